//! Named scalar color fields over normalized scene coordinates.
//!
//! A field maps a triangle's normalized centroid (x/width, y/height over the
//! visible viewport) to a scalar that is later pushed through the color
//! scale. Field outputs are not required to stay in [0, 1]; the scale clamps.
use std::f32::consts::SQRT_2;
use std::fmt;
use std::sync::Arc;

use crate::noise::PerlinNoise;

/// Caller-supplied scalar field.
pub type CustomField = Arc<dyn Fn(f32, f32) -> f32 + Send + Sync>;

/// Scalar field sampled at a triangle's normalized centroid.
#[derive(Clone)]
pub enum ColorField {
    /// `x`
    Horizontal,
    /// `y`
    Vertical,
    /// `(x + y) / 2`
    DiagonalFromLeft,
    /// `(1 − x + y) / 2`
    DiagonalFromRight,
    /// Distance from the viewport center, scaled to reach past the corners.
    RadialFromCenter,
    /// Distance from a point half a viewport below the bottom center.
    RadialFromBottom,
    /// Blend of closeness to the nearest edge and closeness to the center.
    FromEdges,
    /// Lattice noise sampled at `(x·scale_x, y·scale_y, 0)`.
    Noise { scale_x: f32, scale_y: f32 },
    /// Escape hatch for arbitrary fields.
    Custom(CustomField),
}

impl ColorField {
    /// Evaluates the field at normalized coordinates.
    pub fn evaluate(&self, noise: &PerlinNoise, x: f32, y: f32) -> f32 {
        match self {
            ColorField::Horizontal => x,
            ColorField::Vertical => y,
            ColorField::DiagonalFromLeft => (x + y) / 2.0,
            ColorField::DiagonalFromRight => (1.0 - x + y) / 2.0,
            ColorField::RadialFromCenter => (x - 0.5).hypot(y - 0.5) * SQRT_2 * 1.1,
            ColorField::RadialFromBottom => (x - 0.5).hypot(y - 1.5) - 0.5,
            ColorField::FromEdges => {
                (edge_closeness(x, y) + 1.0 - (x - 0.5).hypot(y - 0.5) * SQRT_2) / 2.0
            }
            ColorField::Noise { scale_x, scale_y } => noise.noise(x * scale_x, y * scale_y, 0.0),
            ColorField::Custom(field) => field(x, y),
        }
    }
}

/// Doubled distance to the nearest viewport edge: 0 on the border, 1 at the
/// center.
fn edge_closeness(x: f32, y: f32) -> f32 {
    x.min(1.0 - x).min(y.min(1.0 - y)) * 2.0
}

impl Default for ColorField {
    fn default() -> Self {
        ColorField::DiagonalFromLeft
    }
}

impl fmt::Debug for ColorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorField::Horizontal => "Horizontal",
            ColorField::Vertical => "Vertical",
            ColorField::DiagonalFromLeft => "DiagonalFromLeft",
            ColorField::DiagonalFromRight => "DiagonalFromRight",
            ColorField::RadialFromCenter => "RadialFromCenter",
            ColorField::RadialFromBottom => "RadialFromBottom",
            ColorField::FromEdges => "FromEdges",
            ColorField::Noise { scale_x, scale_y } => {
                return f
                    .debug_struct("Noise")
                    .field("scale_x", scale_x)
                    .field("scale_y", scale_y)
                    .finish();
            }
            ColorField::Custom(_) => "Custom(..)",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use crate::random::SeededRng;

    use super::*;

    fn noise() -> PerlinNoise {
        let mut rng = SeededRng::new(1u64);
        PerlinNoise::new(&mut rng)
    }

    #[test]
    fn linear_fields_match_their_formulas() {
        let noise = noise();
        assert_eq!(ColorField::Horizontal.evaluate(&noise, 0.3, 0.9), 0.3);
        assert_eq!(ColorField::Vertical.evaluate(&noise, 0.3, 0.9), 0.9);
        assert_eq!(ColorField::DiagonalFromLeft.evaluate(&noise, 0.4, 0.6), 0.5);
        assert_eq!(
            ColorField::DiagonalFromRight.evaluate(&noise, 0.4, 0.6),
            0.6
        );
    }

    #[test]
    fn radial_from_center_is_zero_at_center_and_beyond_one_at_corners() {
        let noise = noise();
        assert_eq!(ColorField::RadialFromCenter.evaluate(&noise, 0.5, 0.5), 0.0);
        let corner = ColorField::RadialFromCenter.evaluate(&noise, 0.0, 0.0);
        assert!((corner - 1.1).abs() < 1e-5);
    }

    #[test]
    fn edge_closeness_peaks_at_center() {
        assert_eq!(edge_closeness(0.5, 0.5), 1.0);
        assert_eq!(edge_closeness(0.0, 0.5), 0.0);
        assert_eq!(edge_closeness(0.5, 1.0), 0.0);
    }

    #[test]
    fn noise_field_scales_its_input_coordinates() {
        let noise = noise();
        let field = ColorField::Noise {
            scale_x: 4.0,
            scale_y: 4.0,
        };
        assert_eq!(
            field.evaluate(&noise, 0.3, 0.7),
            noise.noise(1.2, 2.8, 0.0)
        );
    }

    #[test]
    fn custom_field_is_invoked() {
        let noise = noise();
        let field = ColorField::Custom(Arc::new(|x, y| x * 10.0 + y));
        assert_eq!(field.evaluate(&noise, 0.5, 0.25), 5.25);
    }
}
