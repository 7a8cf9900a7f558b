use trigen::prelude::*;
use trigen_examples::{init_tracing, write_svg};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut options = Options::new()
        .with_seed("grid-gradient")
        .with_size(1280.0, 720.0)
        .with_sampling(SamplingMode::Triangle)
        .with_cell_size(90.0)
        .with_cell_randomness(0.4)
        .with_color_field(ColorField::DiagonalFromLeft)
        .with_palette(vec![
            Rgb::from_hex("#f4a261")?,
            Rgb::from_hex("#e76f51")?,
            Rgb::from_hex("#264653")?,
        ]);
    options.use_gradient = true;
    options.quantize_steps = 6;

    let mut cache = GeometryCache::new();
    let scene = generate(&options, &mut cache)?;
    write_svg(&scene, "grid-gradient-scene.svg")?;
    Ok(())
}
