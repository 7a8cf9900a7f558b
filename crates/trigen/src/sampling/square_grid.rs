//! Square lattice sampling with per-cell jitter.
use glam::Vec2;
use rand::RngCore;

use crate::error::{Error, Result};
use crate::sampling::{lattice_jitter, CanvasExtent, PointSampling};

/// Square grid sampling.
///
/// Lattice points step by `cell_size` in both axes; each point is jittered
/// independently in x and y by whole units within
/// `±(cell_randomness * cell_size)`.
#[derive(Debug, Clone)]
pub struct SquareGridSampling {
    /// Lattice spacing in scene units.
    pub cell_size: f32,
    /// Jitter amount relative to the cell size, usually in [0, 1].
    pub cell_randomness: f32,
}

impl SquareGridSampling {
    /// Creates a new [`SquareGridSampling`].
    pub fn new(cell_size: f32, cell_randomness: f32) -> Self {
        Self {
            cell_size,
            cell_randomness,
        }
    }
}

impl PointSampling for SquareGridSampling {
    fn generate(&self, canvas: CanvasExtent, rng: &mut dyn RngCore) -> Result<Vec<Vec2>> {
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(Error::InvalidConfig("cell_size must be > 0".into()));
        }

        let limit = self.cell_randomness * self.cell_size;
        let mut points = Vec::new();

        let mut y = -canvas.overdraw;
        while y < canvas.height + canvas.overdraw + self.cell_size {
            let mut x = -canvas.overdraw;
            while x < canvas.width + canvas.overdraw + self.cell_size {
                let jx = lattice_jitter(limit, rng);
                let jy = lattice_jitter(limit, rng);
                points.push(Vec2::new(x + jx, y + jy));
                x += self.cell_size;
            }
            y += self.cell_size;
        }

        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use crate::random::SeededRng;

    use super::*;

    #[test]
    fn unjittered_grid_produces_exact_lattice() {
        let strategy = SquareGridSampling::new(50.0, 0.0);
        let mut rng = SeededRng::new(1u64);
        let points = strategy
            .generate(CanvasExtent::new(100.0, 100.0, 0.0), &mut rng)
            .unwrap();

        assert_eq!(points.len(), 9);
        for expected_y in [0.0, 50.0, 100.0] {
            for expected_x in [0.0, 50.0, 100.0] {
                assert!(
                    points.contains(&Vec2::new(expected_x, expected_y)),
                    "missing lattice point ({expected_x}, {expected_y})"
                );
            }
        }
    }

    #[test]
    fn jitter_stays_within_limit_of_lattice_position() {
        let cell_size = 40.0;
        let cell_randomness = 0.25;
        let limit = cell_randomness * cell_size;

        let strategy = SquareGridSampling::new(cell_size, cell_randomness);
        let mut rng = SeededRng::new(8u64);
        let points = strategy
            .generate(CanvasExtent::new(200.0, 200.0, 0.0), &mut rng)
            .unwrap();

        for p in points {
            let nearest_x = (p.x / cell_size).round() * cell_size;
            let nearest_y = (p.y / cell_size).round() * cell_size;
            assert!((p.x - nearest_x).abs() <= limit);
            assert!((p.y - nearest_y).abs() <= limit);
        }
    }

    #[test]
    fn same_seed_produces_identical_points() {
        let strategy = SquareGridSampling::new(25.0, 0.5);
        let canvas = CanvasExtent::new(300.0, 200.0, 10.0);

        let mut a = SeededRng::new("grid");
        let mut b = SeededRng::new("grid");
        assert_eq!(
            strategy.generate(canvas, &mut a).unwrap(),
            strategy.generate(canvas, &mut b).unwrap()
        );
    }

    #[test]
    fn non_positive_cell_size_fails_fast() {
        let strategy = SquareGridSampling::new(0.0, 0.0);
        let mut rng = SeededRng::new(1u64);
        let result = strategy.generate(CanvasExtent::new(100.0, 100.0, 0.0), &mut rng);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
