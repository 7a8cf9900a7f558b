use criterion::{criterion_group, criterion_main, Criterion};
use trigen::prelude::*;

fn bench_poisson_disc(c: &mut Criterion) {
    c.bench_function("poisson_disc_800x600_r20", |b| {
        b.iter(|| {
            let mut rng = SeededRng::new(42u64);
            let canvas = CanvasExtent::new(800.0, 600.0, 10.0);
            PoissonDiscSampling::new(20.0)
                .generate(canvas, &mut rng)
                .map(|points| points.len())
        })
    });
}

fn bench_generate(c: &mut Criterion) {
    let options = Options::new()
        .with_seed("bench")
        .with_size(800.0, 600.0)
        .with_sampling(SamplingMode::PoissonDisc)
        .with_cell_size(25.0);

    c.bench_function("generate_poisson_800x600", |b| {
        b.iter(|| {
            let mut cache = GeometryCache::new();
            generate(&options, &mut cache).map(|scene| scene.triangles.len())
        })
    });

    c.bench_function("generate_cached_recolor", |b| {
        let mut cache = GeometryCache::new();
        generate(&options, &mut cache).unwrap();
        let recolored = options.clone().with_color_field(ColorField::Noise {
            scale_x: 4.0,
            scale_y: 4.0,
        });
        b.iter(|| generate(&recolored, &mut cache).map(|scene| scene.triangles.len()))
    });
}

criterion_group!(benches, bench_poisson_disc, bench_generate);
criterion_main!(benches);
