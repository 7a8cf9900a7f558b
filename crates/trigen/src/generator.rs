//! Options surface and the end-to-end options-to-scene pipeline.
use std::fmt;
use std::sync::Arc;

use glam::Vec2;
use spade::{DelaunayTriangulation, Point2, Triangulation};
use tracing::{debug, info, warn};

use crate::cache::{geometry_key, GeometryCache};
use crate::color::scale::ColorScale;
use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::field::ColorField;
use crate::gradient::assign_gradient;
use crate::noise::PerlinNoise;
use crate::random::{rand01, Seed, SeededRng};
use crate::sampling::{
    CanvasExtent, PointSampling, PoissonDiscSampling, SquareGridSampling, TriangleGridSampling,
};
use crate::scene::{Paint, Scene, Triangle};

/// Point layout strategy selected in [`Options`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum SamplingMode {
    /// Square lattice with jitter.
    Square,
    /// Staggered triangular lattice with jitter.
    Triangle,
    /// Poisson disc dart throwing; `cell_size` acts as the disc radius.
    PoissonDisc,
    /// Caller-supplied points; bypasses the RNG entirely.
    Override(Vec<Vec2>),
}

/// Caller-supplied color function, bypassing field and palette.
pub type ColorOverride = Arc<dyn Fn(f32, f32) -> Rgb + Send + Sync>;

/// Configuration for one generation run.
#[non_exhaustive]
#[derive(Clone)]
pub struct Options {
    /// Seed for the random stream.
    pub seed: Seed,
    /// Viewport width in scene units.
    pub width: f32,
    /// Viewport height in scene units.
    pub height: f32,
    /// Point layout strategy.
    pub sampling: SamplingMode,
    /// Lattice spacing, or disc radius in Poisson mode.
    pub cell_size: f32,
    /// Grid jitter relative to the cell size.
    pub cell_randomness: f32,
    /// Sampling margin past the viewport.
    pub overdraw: f32,
    /// Scalar field driving the palette lookup.
    pub color_field: ColorField,
    /// Ordered palette of at least two anchor colors.
    pub color_palette: Vec<Rgb>,
    /// Scalar jitter amplitude added per triangle.
    pub color_randomness: f32,
    /// Quantize the scalar into this many steps; 0 disables.
    pub quantize_steps: u32,
    /// Flip the scale (`1 − scalar`).
    pub invert_scale: bool,
    /// Replace flat fills with per-triangle linear gradients.
    pub use_gradient: bool,
    /// How far the gradient's first stop sits below the base scalar.
    pub gradient_negative_factor: f32,
    /// How far the gradient's second stop sits above the base scalar.
    pub gradient_positive_factor: f32,
    /// Stroke color override; `None` strokes each triangle with its fill.
    pub stroke_color: Option<Rgb>,
    /// Stroke width in scene units.
    pub stroke_width: f32,
    /// Emit outlines only.
    pub stroke_only: bool,
    /// Optional background color recorded on the scene.
    pub background: Option<Rgb>,
    /// Bypasses field and palette entirely; receives normalized centroid
    /// coordinates.
    pub color_override: Option<ColorOverride>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            seed: Seed::Number(0),
            width: 1920.0,
            height: 1080.0,
            sampling: SamplingMode::PoissonDisc,
            cell_size: 100.0,
            cell_randomness: 0.3,
            overdraw: 10.0,
            color_field: ColorField::default(),
            color_palette: vec![Rgb::new(0xef, 0xee, 0x69), Rgb::new(0x21, 0x31, 0x3e)],
            color_randomness: 0.0,
            quantize_steps: 0,
            invert_scale: false,
            use_gradient: false,
            gradient_negative_factor: 0.03,
            gradient_positive_factor: 0.03,
            stroke_color: None,
            stroke_width: 0.5,
            stroke_only: false,
            background: None,
            color_override: None,
        }
    }
}

impl Options {
    /// Creates options with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: impl Into<Seed>) -> Self {
        self.seed = seed.into();
        self
    }

    /// Sets the viewport size.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the sampling mode.
    pub fn with_sampling(mut self, sampling: SamplingMode) -> Self {
        self.sampling = sampling;
        self
    }

    /// Sets the cell size (disc radius in Poisson mode).
    pub fn with_cell_size(mut self, cell_size: f32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Sets the grid jitter amount.
    pub fn with_cell_randomness(mut self, cell_randomness: f32) -> Self {
        self.cell_randomness = cell_randomness;
        self
    }

    /// Sets the color field.
    pub fn with_color_field(mut self, color_field: ColorField) -> Self {
        self.color_field = color_field;
        self
    }

    /// Sets the palette.
    pub fn with_palette(mut self, color_palette: Vec<Rgb>) -> Self {
        self.color_palette = color_palette;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    ///
    /// Runs before any sampling so no partial state is ever committed.
    pub fn validate(&self) -> Result<()> {
        if !self.width.is_finite() || !self.height.is_finite() || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(Error::InvalidConfig(
                "width and height must be > 0".into(),
            ));
        }

        match &self.sampling {
            SamplingMode::Square | SamplingMode::Triangle => {
                if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
                    return Err(Error::InvalidConfig("cell_size must be > 0".into()));
                }
            }
            SamplingMode::PoissonDisc => {
                if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
                    return Err(Error::InvalidConfig(
                        "cell_size (Poisson disc radius) must be > 0".into(),
                    ));
                }
            }
            SamplingMode::Override(points) => {
                if points.len() < 3 {
                    return Err(Error::InvalidConfig(
                        "override sampling requires at least 3 points".into(),
                    ));
                }
            }
        }

        if self.color_override.is_none() && self.color_palette.len() < 2 {
            return Err(Error::InvalidConfig(
                "color palette requires at least 2 colors".into(),
            ));
        }

        Ok(())
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("seed", &self.seed)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("sampling", &self.sampling)
            .field("cell_size", &self.cell_size)
            .field("cell_randomness", &self.cell_randomness)
            .field("overdraw", &self.overdraw)
            .field("color_field", &self.color_field)
            .field("color_palette", &self.color_palette)
            .field("color_randomness", &self.color_randomness)
            .field("quantize_steps", &self.quantize_steps)
            .field("invert_scale", &self.invert_scale)
            .field("use_gradient", &self.use_gradient)
            .field(
                "color_override",
                &self.color_override.as_ref().map(|_| "(callback)"),
            )
            .finish_non_exhaustive()
    }
}

/// Owns the seeded stream and the noise field for one generation run.
///
/// Construction builds the noise permutation table from the fresh stream;
/// [`SeededRng::reset`] later rewinds the stream to this post-construction
/// baseline for coloring.
pub struct GenerationContext {
    rng: SeededRng,
    noise: PerlinNoise,
}

impl GenerationContext {
    /// Creates a context for the given seed.
    pub fn new(seed: impl Into<Seed>) -> Self {
        let mut rng = SeededRng::new(seed);
        let noise = PerlinNoise::new(&mut rng);
        Self { rng, noise }
    }

    /// The context's noise field.
    pub fn noise(&self) -> &PerlinNoise {
        &self.noise
    }

    /// Mutable access to the stream, for callers driving samplers directly.
    pub fn rng_mut(&mut self) -> &mut SeededRng {
        &mut self.rng
    }
}

/// Generates a scene from `options`, reusing `cache` when only
/// color-affecting options changed since the previous run.
pub fn generate(options: &Options, cache: &mut GeometryCache) -> Result<Scene> {
    options.validate()?;

    // Built before any sampling so a bad palette fails fast.
    let scale = match options.color_override {
        Some(_) => None,
        None => Some(ColorScale::new(&options.color_palette)?),
    };

    let mut ctx = GenerationContext::new(options.seed.clone());

    let key = geometry_key(options);
    let triangles: Vec<Triangle> = match cache.lookup(key) {
        Some(cached) => {
            debug!(key, triangles = cached.len(), "geometry cache hit");
            cached.to_vec()
        }
        None => {
            let points = sample_points(options, &mut ctx.rng)?;
            let triangles = triangulate(&points);
            cache.store(key, triangles.clone());
            triangles
        }
    };

    if triangles.is_empty() {
        warn!("triangulation produced no triangles, emitting an empty scene");
    }

    // Rewind the stream so colors depend only on seed, triangle order, and
    // color options, not on how many draws sampling consumed.
    ctx.rng.reset();

    let mut painted = Vec::with_capacity(triangles.len());
    for triangle in &triangles {
        let norm = triangle.normalized_centroid(options.width, options.height);
        let paint = paint_triangle(options, &mut ctx, scale.as_ref(), triangle, norm);
        painted.push((*triangle, paint));
    }

    info!(
        triangles = painted.len(),
        sampling = ?options.sampling_tag(),
        "generated scene"
    );

    Ok(Scene {
        width: options.width,
        height: options.height,
        triangles: painted,
        stroke_color: options.stroke_color,
        stroke_width: options.stroke_width,
        stroke_only: options.stroke_only,
        background: options.background,
    })
}

impl Options {
    /// Short tag for logging, without the override payload.
    fn sampling_tag(&self) -> &'static str {
        match self.sampling {
            SamplingMode::Square => "square",
            SamplingMode::Triangle => "triangle",
            SamplingMode::PoissonDisc => "poisson-disc",
            SamplingMode::Override(_) => "override",
        }
    }
}

fn paint_triangle(
    options: &Options,
    ctx: &mut GenerationContext,
    scale: Option<&ColorScale>,
    triangle: &Triangle,
    norm: Vec2,
) -> Paint {
    if let Some(color_fn) = &options.color_override {
        return Paint::Solid(color_fn(norm.x, norm.y));
    }

    let Some(scale) = scale else {
        // validate() guarantees a palette whenever no override is set.
        return Paint::Solid(Rgb::new(0, 0, 0));
    };

    let mut scalar = options.color_field.evaluate(&ctx.noise, norm.x, norm.y)
        + (rand01(&mut ctx.rng) - 0.5) * options.color_randomness;

    if options.quantize_steps > 0 {
        scalar =
            (scalar * options.quantize_steps as f32).round() / (options.quantize_steps as f32 - 1.0);
    }
    if options.invert_scale {
        scalar = 1.0 - scalar;
    }

    if options.use_gradient {
        assign_gradient(
            triangle,
            scalar,
            scale,
            options.gradient_negative_factor,
            options.gradient_positive_factor,
            &mut ctx.rng,
        )
    } else {
        Paint::Solid(scale.at(scalar))
    }
}

fn sample_points(options: &Options, rng: &mut SeededRng) -> Result<Vec<Vec2>> {
    let canvas = CanvasExtent::new(options.width, options.height, options.overdraw);
    match &options.sampling {
        SamplingMode::Square => {
            SquareGridSampling::new(options.cell_size, options.cell_randomness)
                .generate(canvas, rng)
        }
        SamplingMode::Triangle => {
            TriangleGridSampling::new(options.cell_size, options.cell_randomness)
                .generate(canvas, rng)
        }
        SamplingMode::PoissonDisc => {
            PoissonDiscSampling::new(options.cell_size).generate(canvas, rng)
        }
        SamplingMode::Override(points) => Ok(points.clone()),
    }
}

/// Delaunay-triangulates the point set.
///
/// Degenerate input (fewer than 3 usable points, all points collinear, or
/// coordinates the triangulator rejects) yields zero triangles, never an
/// error.
fn triangulate(points: &[Vec2]) -> Vec<Triangle> {
    if points.len() < 3 {
        return Vec::new();
    }

    let vertices: Vec<Point2<f32>> = points.iter().map(|p| Point2::new(p.x, p.y)).collect();
    let triangulation: DelaunayTriangulation<Point2<f32>> =
        match DelaunayTriangulation::bulk_load(vertices) {
            Ok(triangulation) => triangulation,
            Err(_) => {
                warn!("triangulation rejected the input point set");
                return Vec::new();
            }
        };

    triangulation
        .inner_faces()
        .map(|face| {
            let [a, b, c] = face.positions();
            Triangle::new(
                Vec2::new(a.x, a.y),
                Vec2::new(b.x, b.y),
                Vec2::new(c.x, c.y),
            )
        })
        .collect()
}
