use trigen::prelude::*;
use trigen_examples::{init_tracing, write_svg};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let options = Options::new()
        .with_seed("poisson-noise")
        .with_size(1920.0, 1080.0)
        .with_sampling(SamplingMode::PoissonDisc)
        .with_cell_size(60.0)
        .with_color_field(ColorField::Noise {
            scale_x: 3.0,
            scale_y: 3.0,
        })
        .with_palette(vec![
            Rgb::from_hex("#efee69")?,
            Rgb::from_hex("#1d8a99")?,
            Rgb::from_hex("#21313e")?,
        ]);

    let mut cache = GeometryCache::new();
    let scene = generate(&options, &mut cache)?;
    write_svg(&scene, "poisson-noise-scene.svg")?;
    Ok(())
}
