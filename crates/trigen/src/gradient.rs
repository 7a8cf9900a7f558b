//! Per-triangle linear gradient assignment.
//!
//! When gradients are enabled the flat fill is replaced by a two-stop
//! gradient whose axis approximates a randomly chosen triangle edge and
//! whose stops straddle the base scalar symmetrically. All randomness comes
//! from the shared post-reset stream, so gradients are deterministic per
//! seed.
use glam::Vec2;
use rand::RngCore;

use crate::color::scale::ColorScale;
use crate::random::rand01;
use crate::scene::{Paint, Triangle};

/// Derives a gradient paint for one triangle.
///
/// Draw order: one draw picks the first vertex, one draw picks the second
/// from the remaining two. The direction vector is `abs(p2 − p1)` with both
/// components normalized by the larger one; the sign of `v.x · v.y` flips
/// which stop gets the darker color so no fixed visual bias develops.
pub(crate) fn assign_gradient(
    triangle: &Triangle,
    scalar: f32,
    scale: &ColorScale,
    negative_factor: f32,
    positive_factor: f32,
    rng: &mut dyn RngCore,
) -> Paint {
    let vertices = triangle.vertices();
    let first = (rand01(rng) * 3.0).floor() as usize;
    let second = (first + 1 + (rand01(rng) * 2.0).floor() as usize) % 3;

    let v = vertices[second] - vertices[first];
    let longest = v.x.abs().max(v.y.abs());
    let direction = if longest > 0.0 {
        Vec2::new(v.x.abs() / longest, v.y.abs() / longest)
    } else {
        // Degenerate edge; fall back to a horizontal axis.
        Vec2::new(1.0, 0.0)
    };

    let product = v.x * v.y;
    let sign = if product > 0.0 {
        1.0
    } else if product < 0.0 {
        -1.0
    } else {
        0.0
    };

    Paint::Gradient {
        start: scale.at(scalar - negative_factor * sign),
        stop: scale.at(scalar + positive_factor * sign),
        direction,
    }
}

#[cfg(test)]
mod tests {
    use crate::color::Rgb;
    use crate::random::SeededRng;

    use super::*;

    fn scale() -> ColorScale {
        ColorScale::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap()
    }

    fn triangle() -> Triangle {
        Triangle::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 20.0),
            Vec2::new(40.0, 80.0),
        )
    }

    #[test]
    fn direction_components_are_normalized_by_the_longer_axis() {
        let scale = scale();
        let mut rng = SeededRng::new(2u64);
        for _ in 0..50 {
            let paint = assign_gradient(&triangle(), 0.5, &scale, 0.03, 0.03, &mut rng);
            let Paint::Gradient { direction, .. } = paint else {
                panic!("expected gradient paint");
            };
            assert!((0.0..=1.0).contains(&direction.x));
            assert!((0.0..=1.0).contains(&direction.y));
            assert!((direction.x - 1.0).abs() < 1e-6 || (direction.y - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn stops_straddle_the_base_scalar() {
        let scale = scale();
        let mut rng = SeededRng::new(3u64);
        let paint = assign_gradient(&triangle(), 0.5, &scale, 0.2, 0.2, &mut rng);
        let Paint::Gradient { start, stop, .. } = paint else {
            panic!("expected gradient paint");
        };
        // Both stops sit symmetrically around scale.at(0.5); with a
        // black-to-white scale one must be darker and one lighter.
        let base = scale.at(0.5);
        assert_ne!(start, stop);
        assert!(start.r.min(stop.r) <= base.r);
        assert!(start.r.max(stop.r) >= base.r);
    }

    #[test]
    fn gradient_draws_are_deterministic_per_seed() {
        let scale = scale();
        let mut a = SeededRng::new("gradient");
        let mut b = SeededRng::new("gradient");
        assert_eq!(
            assign_gradient(&triangle(), 0.3, &scale, 0.05, 0.07, &mut a),
            assign_gradient(&triangle(), 0.3, &scale, 0.05, 0.07, &mut b)
        );
    }

    #[test]
    fn consumes_exactly_two_draws() {
        let scale = scale();
        let mut used = SeededRng::new(8u64);
        let mut reference = SeededRng::new(8u64);

        assign_gradient(&triangle(), 0.5, &scale, 0.03, 0.03, &mut used);
        rand01(&mut reference);
        rand01(&mut reference);
        assert_eq!(rand01(&mut used), rand01(&mut reference));
    }
}
