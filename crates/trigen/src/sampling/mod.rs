//! Point sampling strategies for laying out triangulation sites.
//!
//! Strategies produce candidate points over a canvas that extends past the
//! visible viewport by an overdraw margin, so the later triangulation reaches
//! beyond every edge and the scene shows no boundary gaps.
use glam::Vec2;
use rand::RngCore;

pub mod poisson_disc;
pub mod square_grid;
pub mod triangle_grid;

pub use poisson_disc::{PoissonDiscSampler, PoissonDiscSampling};
pub use square_grid::SquareGridSampling;
pub use triangle_grid::TriangleGridSampling;

use crate::error::Result;
use crate::random::rand01;

/// Extent of the sampled canvas.
#[derive(Debug, Clone, Copy)]
pub struct CanvasExtent {
    /// Visible viewport width.
    pub width: f32,
    /// Visible viewport height.
    pub height: f32,
    /// Margin sampled past the viewport on every side.
    pub overdraw: f32,
}

impl CanvasExtent {
    /// Creates a new [`CanvasExtent`].
    pub fn new(width: f32, height: f32, overdraw: f32) -> Self {
        Self {
            width,
            height,
            overdraw,
        }
    }
}

/// Trait for point sampling.
pub trait PointSampling: Send + Sync {
    /// Generates the full point set for `canvas`, drawing all randomness
    /// from `rng` in a fixed order.
    fn generate(&self, canvas: CanvasExtent, rng: &mut dyn RngCore) -> Result<Vec<Vec2>>;
}

/// Whole-unit lattice jitter, uniform in [-limit, +limit].
///
/// Always draws from the stream, even for a zero limit, so the draw order
/// seen by the rest of the pipeline does not depend on the jitter setting.
#[inline]
pub(crate) fn lattice_jitter(limit: f32, rng: &mut dyn RngCore) -> f32 {
    (rand01(rng) * (2.0 * limit + 1.0)).floor() - limit
}
