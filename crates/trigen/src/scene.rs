//! Scene data model produced by the generator.
//!
//! A scene is an ordered list of triangles, each carrying either a solid
//! fill or a two-stop linear gradient. Serialization to SVG/PNG is a
//! consumer's responsibility; the scene only records geometry and paint.
use glam::Vec2;

use crate::color::Rgb;

/// A triangle in scene coordinates. Vertices are held by value.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vec2,
    pub b: Vec2,
    pub c: Vec2,
}

impl Triangle {
    /// Creates a triangle from three vertices.
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Self { a, b, c }
    }

    /// The arithmetic mean of the three vertices.
    pub fn centroid(&self) -> Vec2 {
        (self.a + self.b + self.c) / 3.0
    }

    /// Centroid normalized over the visible viewport.
    ///
    /// Sampling overdraws past the viewport, so components can fall outside
    /// [0, 1] for boundary triangles.
    pub fn normalized_centroid(&self, width: f32, height: f32) -> Vec2 {
        let c = self.centroid();
        Vec2::new(c.x / width, c.y / height)
    }

    /// The vertices in order.
    pub fn vertices(&self) -> [Vec2; 3] {
        [self.a, self.b, self.c]
    }
}

/// Fill paint for one triangle.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Flat fill.
    Solid(Rgb),
    /// Two-stop linear gradient from the gradient-space origin along
    /// `direction` (components in [0, 1], the longer axis mapped to 1).
    Gradient {
        start: Rgb,
        stop: Rgb,
        direction: Vec2,
    },
}

impl Paint {
    /// The color a renderer should fall back to when it cannot draw
    /// gradients: the solid color or the gradient's start stop.
    pub fn primary_color(&self) -> Rgb {
        match self {
            Paint::Solid(color) => *color,
            Paint::Gradient { start, .. } => *start,
        }
    }
}

/// A generated scene.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Viewport width in scene units.
    pub width: f32,
    /// Viewport height in scene units.
    pub height: f32,
    /// Triangles with their paint, in draw order.
    pub triangles: Vec<(Triangle, Paint)>,
    /// Stroke color override; `None` means each triangle strokes with its
    /// own fill color (hides hairline seams between adjacent fills).
    pub stroke_color: Option<Rgb>,
    /// Stroke width in scene units.
    pub stroke_width: f32,
    /// Draw outlines only, no fills.
    pub stroke_only: bool,
    /// Optional background color behind all triangles.
    pub background: Option<Rgb>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centroid_averages_vertices() {
        let tri = Triangle::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(0.0, 3.0),
        );
        assert_eq!(tri.centroid(), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn normalized_centroid_uses_viewport_dimensions() {
        let tri = Triangle::new(
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(100.0, 200.0),
        );
        let norm = tri.normalized_centroid(200.0, 200.0);
        assert_eq!(norm, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn overdrawn_triangles_can_normalize_outside_unit_range() {
        let tri = Triangle::new(
            Vec2::new(-30.0, -30.0),
            Vec2::new(-30.0, -60.0),
            Vec2::new(-60.0, -30.0),
        );
        let norm = tri.normalized_centroid(100.0, 100.0);
        assert!(norm.x < 0.0 && norm.y < 0.0);
    }

    #[test]
    fn primary_color_picks_solid_or_gradient_start() {
        let solid = Paint::Solid(Rgb::new(1, 2, 3));
        assert_eq!(solid.primary_color(), Rgb::new(1, 2, 3));

        let gradient = Paint::Gradient {
            start: Rgb::new(9, 9, 9),
            stop: Rgb::new(0, 0, 0),
            direction: Vec2::new(1.0, 0.5),
        };
        assert_eq!(gradient.primary_color(), Rgb::new(9, 9, 9));
    }
}
