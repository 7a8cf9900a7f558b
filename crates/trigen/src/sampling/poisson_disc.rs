//! Poisson disc sampling by iterative dart throwing with spatial rejection.
use std::f32::consts::{FRAC_1_SQRT_2, PI};

use glam::Vec2;
use rand::RngCore;

use crate::error::{Error, Result};
use crate::random::rand01;
use crate::sampling::{CanvasExtent, PointSampling};

/// Maximum candidate children per active point before it retires.
const MAX_ATTEMPTS: usize = 30;

/// Poisson disc sampling strategy.
///
/// Guarantees a minimum pairwise distance of `radius` between all emitted
/// points. Pulls a [`PoissonDiscSampler`] to exhaustion.
#[derive(Debug, Clone)]
pub struct PoissonDiscSampling {
    /// Minimum distance between samples in scene units.
    pub radius: f32,
}

impl PoissonDiscSampling {
    /// Creates a new [`PoissonDiscSampling`] with the given radius.
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }
}

impl PointSampling for PoissonDiscSampling {
    fn generate(&self, canvas: CanvasExtent, rng: &mut dyn RngCore) -> Result<Vec<Vec2>> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidConfig("radius must be > 0".into()));
        }

        let mut sampler = PoissonDiscSampler::new(self.radius, canvas);
        let mut points = Vec::new();
        while let Some(p) = sampler.sample(rng) {
            points.push(p);
        }
        Ok(points)
    }
}

/// Pull-based Poisson disc sampler.
///
/// Each [`PoissonDiscSampler::sample`] call produces one newly accepted point
/// or `None` once the active list is exhausted.
///
/// Sampling runs over a virtual canvas 1.5× the viewport in each axis and
/// emitted points are re-centered by a quarter-viewport offset, so the
/// visible region sits in the middle of the oversampled area and edge
/// triangles always exist outside the viewport.
pub struct PoissonDiscSampler {
    radius_squared: f32,
    /// Width of the area-uniform annulus band, `3·radius²`.
    annulus_band: f32,
    cell_size: f32,
    grid_width: usize,
    grid_height: usize,
    grid: Vec<Option<Vec2>>,
    queue: Vec<Vec2>,
    width: f32,
    height: f32,
    offset: Vec2,
    started: bool,
}

impl PoissonDiscSampler {
    /// Creates a sampler for the given minimum distance and canvas.
    pub fn new(radius: f32, canvas: CanvasExtent) -> Self {
        debug_assert!(radius > 0.0, "radius must be > 0");
        let width = canvas.width * 1.5;
        let height = canvas.height * 1.5;
        let cell_size = radius * FRAC_1_SQRT_2;
        let grid_width = (width / cell_size).ceil() as usize;
        let grid_height = (height / cell_size).ceil() as usize;

        Self {
            radius_squared: radius * radius,
            annulus_band: 3.0 * radius * radius,
            cell_size,
            grid_width,
            grid_height,
            grid: vec![None; grid_width * grid_height],
            queue: Vec::new(),
            width,
            height,
            offset: Vec2::new(canvas.width / 4.0, canvas.height / 4.0),
            started: false,
        }
    }

    /// True if no accepted point lies within `radius` of `(x, y)`.
    ///
    /// Checks the 5×5 cell window around the candidate's cell; with a cell
    /// size of `radius/√2` no closer point can live outside that window.
    fn far(&self, x: f32, y: f32) -> bool {
        let i = (x / self.cell_size).floor() as isize;
        let j = (y / self.cell_size).floor() as isize;
        let i0 = (i - 2).max(0) as usize;
        let j0 = (j - 2).max(0) as usize;
        let i1 = ((i + 3).max(0) as usize).min(self.grid_width);
        let j1 = ((j + 3).max(0) as usize).min(self.grid_height);

        for j in j0..j1 {
            let row = j * self.grid_width;
            for i in i0..i1 {
                if let Some(p) = self.grid[row + i] {
                    let dx = p.x - x;
                    let dy = p.y - y;
                    if dx * dx + dy * dy < self.radius_squared {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Records an accepted point and returns it re-centered on the viewport.
    fn accept(&mut self, x: f32, y: f32) -> Vec2 {
        let p = Vec2::new(x, y);
        self.queue.push(p);
        let gx = (x / self.cell_size).floor() as usize;
        let gy = (y / self.cell_size).floor() as usize;
        self.grid[gy * self.grid_width + gx] = Some(p);
        p - self.offset
    }

    /// Produces the next accepted point, or `None` once exhausted.
    pub fn sample(&mut self, rng: &mut dyn RngCore) -> Option<Vec2> {
        if !self.started {
            self.started = true;
            let x = rand01(rng) * self.width;
            let y = rand01(rng) * self.height;
            return Some(self.accept(x, y));
        }

        while !self.queue.is_empty() {
            let index = (rand01(rng) * self.queue.len() as f32).floor() as usize;
            let origin = self.queue[index];

            for _ in 0..MAX_ATTEMPTS {
                let angle = 2.0 * PI * rand01(rng);
                // Radius drawn uniform by annulus *area* over [radius, 2·radius]
                // to avoid density bias near the inner ring.
                let r = (rand01(rng) * self.annulus_band + self.radius_squared).sqrt();
                let x = origin.x + r * angle.cos();
                let y = origin.y + r * angle.sin();

                if x >= 0.0 && x < self.width && y >= 0.0 && y < self.height && self.far(x, y) {
                    return Some(self.accept(x, y));
                }
            }

            // Every attempt failed: retire this point from the active list.
            self.queue.swap_remove(index);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use crate::random::SeededRng;

    use super::*;

    fn collect(radius: f32, canvas: CanvasExtent, seed: u64) -> Vec<Vec2> {
        let mut rng = SeededRng::new(seed);
        PoissonDiscSampling::new(radius)
            .generate(canvas, &mut rng)
            .unwrap()
    }

    #[test]
    fn all_pairs_respect_minimum_distance() {
        let radius = 20.0;
        let points = collect(radius, CanvasExtent::new(200.0, 160.0, 0.0), 42);

        assert!(points.len() > 10);
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let dist = points[i].distance(points[j]);
                assert!(
                    dist >= radius - 1e-3,
                    "points {i} and {j} are only {dist} apart"
                );
            }
        }
    }

    #[test]
    fn oversampled_canvas_covers_the_viewport_margins() {
        let points = collect(15.0, CanvasExtent::new(200.0, 200.0, 0.0), 7);

        // Re-centered output spans [-w/4, 5w/4) in each axis.
        for p in &points {
            assert!(p.x >= -50.0 && p.x < 250.0);
            assert!(p.y >= -50.0 && p.y < 250.0);
        }
        assert!(points.iter().any(|p| p.x < 0.0 || p.x > 200.0));
    }

    #[test]
    fn sampler_is_pull_based_and_exhausts() {
        let mut sampler = PoissonDiscSampler::new(30.0, CanvasExtent::new(120.0, 120.0, 0.0));
        let mut rng = SeededRng::new(3u64);

        let mut count = 0;
        while sampler.sample(&mut rng).is_some() {
            count += 1;
        }
        assert!(count > 0);
        // Exhaustion is permanent.
        assert!(sampler.sample(&mut rng).is_none());
    }

    #[test]
    fn same_seed_produces_identical_points() {
        let canvas = CanvasExtent::new(300.0, 180.0, 0.0);
        assert_eq!(collect(25.0, canvas, 11), collect(25.0, canvas, 11));
    }

    #[test]
    fn non_positive_radius_fails_fast() {
        let mut rng = SeededRng::new(1u64);
        let result =
            PoissonDiscSampling::new(0.0).generate(CanvasExtent::new(100.0, 100.0, 0.0), &mut rng);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }
}
