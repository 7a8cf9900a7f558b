#![forbid(unsafe_code)]
//! trigen: seeded triangle-mesh art scene generation.
//!
//! Modules:
//! - random: restartable seeded random stream shared by the whole pipeline
//! - noise: 3D lattice (Perlin) noise built from the seeded stream
//! - sampling: point generation (square grid, triangular grid, Poisson disc)
//! - field / color: scalar color fields and HCL palette interpolation
//! - gradient: per-triangle linear gradient assignment
//! - generator: the full options-to-scene pipeline
//!
//! The pipeline is deterministic: identical seed and options always produce
//! an identical scene.
pub mod cache;
pub mod color;
pub mod error;
pub mod field;
pub mod generator;
pub mod gradient;
pub mod noise;
pub mod random;
pub mod sampling;
pub mod scene;

/// Convenient re-exports for common types. Import with `use trigen::prelude::*;`.
pub mod prelude {
    pub use crate::cache::GeometryCache;
    pub use crate::color::scale::ColorScale;
    pub use crate::color::Rgb;
    pub use crate::error::{Error, Result};
    pub use crate::field::ColorField;
    pub use crate::generator::{generate, GenerationContext, Options, SamplingMode};
    pub use crate::noise::PerlinNoise;
    pub use crate::random::{Seed, SeededRng};
    pub use crate::sampling::{
        CanvasExtent, PointSampling, PoissonDiscSampler, PoissonDiscSampling, SquareGridSampling,
        TriangleGridSampling,
    };
    pub use crate::scene::{Paint, Scene, Triangle};
}
