//! Single-slot memo for the geometry half of the pipeline.
//!
//! Point sampling and triangulation are the expensive part of a generation
//! run, and they depend on only a subset of the options. The cache keeps the
//! most recent triangle list keyed by a fingerprint of exactly those
//! geometry-affecting fields, so successive runs that change only color
//! options skip re-sampling and re-triangulating.
//!
//! The cache is an explicit caller-owned object passed into
//! [`crate::generator::generate`]; the pipeline itself holds no hidden
//! state.
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::generator::{Options, SamplingMode};
use crate::scene::Triangle;

/// Single-slot cache mapping one geometry fingerprint to its triangle list.
#[derive(Debug, Clone, Default)]
pub struct GeometryCache {
    entry: Option<(u64, Vec<Triangle>)>,
}

impl GeometryCache {
    /// Creates a new, empty cache.
    pub fn new() -> Self {
        Self { entry: None }
    }

    /// Returns the cached triangle list if `key` matches the stored slot.
    pub fn lookup(&self, key: u64) -> Option<&[Triangle]> {
        match &self.entry {
            Some((stored, triangles)) if *stored == key => Some(triangles),
            _ => None,
        }
    }

    /// Replaces the slot with `key` and its triangle list.
    pub fn store(&mut self, key: u64, triangles: Vec<Triangle>) {
        self.entry = Some((key, triangles));
    }

    /// Clears the slot.
    pub fn clear(&mut self) {
        self.entry = None;
    }
}

/// Fingerprint of the geometry-affecting option subset.
///
/// Covers seed, viewport size, overdraw, sampling mode and its cell
/// parameters, and the override point list identity. Color options never
/// enter the key.
pub(crate) fn geometry_key(options: &Options) -> u64 {
    let mut hasher = DefaultHasher::new();

    options.seed.hash(&mut hasher);
    options.width.to_bits().hash(&mut hasher);
    options.height.to_bits().hash(&mut hasher);
    options.overdraw.to_bits().hash(&mut hasher);

    match &options.sampling {
        SamplingMode::Square => {
            0u8.hash(&mut hasher);
            options.cell_size.to_bits().hash(&mut hasher);
            options.cell_randomness.to_bits().hash(&mut hasher);
        }
        SamplingMode::Triangle => {
            1u8.hash(&mut hasher);
            options.cell_size.to_bits().hash(&mut hasher);
            options.cell_randomness.to_bits().hash(&mut hasher);
        }
        SamplingMode::PoissonDisc => {
            2u8.hash(&mut hasher);
            options.cell_size.to_bits().hash(&mut hasher);
        }
        SamplingMode::Override(points) => {
            3u8.hash(&mut hasher);
            points.len().hash(&mut hasher);
            for p in points {
                p.x.to_bits().hash(&mut hasher);
                p.y.to_bits().hash(&mut hasher);
            }
        }
    }

    hasher.finish()
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn options() -> Options {
        Options {
            seed: "cache".into(),
            width: 400.0,
            height: 300.0,
            sampling: SamplingMode::Square,
            cell_size: 50.0,
            cell_randomness: 0.2,
            ..Options::default()
        }
    }

    fn triangle() -> Triangle {
        Triangle::new(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
        )
    }

    #[test]
    fn lookup_hits_only_on_matching_key() {
        let mut cache = GeometryCache::new();
        cache.store(42, vec![triangle()]);

        assert!(cache.lookup(42).is_some());
        assert!(cache.lookup(43).is_none());
    }

    #[test]
    fn store_replaces_the_single_slot() {
        let mut cache = GeometryCache::new();
        cache.store(1, vec![triangle()]);
        cache.store(2, Vec::new());

        assert!(cache.lookup(1).is_none());
        assert_eq!(cache.lookup(2), Some(&[][..]));
    }

    #[test]
    fn color_options_do_not_change_the_key() {
        let base = options();
        let mut recolored = options();
        recolored.color_randomness = 0.9;
        recolored.quantize_steps = 8;
        recolored.invert_scale = true;
        recolored.use_gradient = true;

        assert_eq!(geometry_key(&base), geometry_key(&recolored));
    }

    #[test]
    fn every_geometry_field_invalidates_the_key() {
        let base_key = geometry_key(&options());

        let mut changed = options();
        changed.seed = "other".into();
        assert_ne!(geometry_key(&changed), base_key);

        let mut changed = options();
        changed.width = 401.0;
        assert_ne!(geometry_key(&changed), base_key);

        let mut changed = options();
        changed.cell_size = 51.0;
        assert_ne!(geometry_key(&changed), base_key);

        let mut changed = options();
        changed.cell_randomness = 0.3;
        assert_ne!(geometry_key(&changed), base_key);

        let mut changed = options();
        changed.sampling = SamplingMode::Triangle;
        assert_ne!(geometry_key(&changed), base_key);
    }

    #[test]
    fn override_identity_enters_the_key() {
        let mut a = options();
        a.sampling = SamplingMode::Override(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 10.0),
        ]);

        let mut b = a.clone();
        assert_eq!(geometry_key(&a), geometry_key(&b));

        if let SamplingMode::Override(points) = &mut b.sampling {
            points[0].x = 5.0;
        }
        assert_ne!(geometry_key(&a), geometry_key(&b));
    }
}
