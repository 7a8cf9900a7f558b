//! Staggered triangular lattice sampling with per-cell jitter.
use glam::Vec2;
use rand::RngCore;

use crate::error::{Error, Result};
use crate::sampling::{lattice_jitter, CanvasExtent, PointSampling};

/// Triangular grid sampling.
///
/// Columns step by `cell_size`; the y start of every other column is shifted
/// down by half a row height (`cell_size / √3`), producing a staggered
/// triangular lattice. Jitter follows the same rule as the square grid.
#[derive(Debug, Clone)]
pub struct TriangleGridSampling {
    /// Lattice spacing in scene units.
    pub cell_size: f32,
    /// Jitter amount relative to the cell size, usually in [0, 1].
    pub cell_randomness: f32,
}

impl TriangleGridSampling {
    /// Creates a new [`TriangleGridSampling`].
    pub fn new(cell_size: f32, cell_randomness: f32) -> Self {
        Self {
            cell_size,
            cell_randomness,
        }
    }
}

impl PointSampling for TriangleGridSampling {
    fn generate(&self, canvas: CanvasExtent, rng: &mut dyn RngCore) -> Result<Vec<Vec2>> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(Error::InvalidConfig("cell_size must be > 0".into()));
        }

        let limit = self.cell_randomness * self.cell_size;
        let row_height = self.cell_size / 3.0_f32.sqrt();
        let mut points = Vec::new();

        let mut column = 0u32;
        let mut x = -canvas.overdraw;
        while x < canvas.width + canvas.overdraw + self.cell_size {
            let stagger = if column % 2 == 1 { row_height } else { 0.0 };
            let mut y = -canvas.overdraw + stagger;
            while y < canvas.height + canvas.overdraw + self.cell_size {
                let jx = lattice_jitter(limit, rng);
                let jy = lattice_jitter(limit, rng);
                points.push(Vec2::new(x + jx, y + jy));
                y += self.cell_size;
            }
            x += self.cell_size;
            column += 1;
        }

        Ok(points)
    }
}
