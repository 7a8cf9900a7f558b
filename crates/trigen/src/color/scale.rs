//! Perceptually uniform color scale over an ordered palette.
use crate::color::{lch_to_rgb, rgb_to_lch, Lch, Rgb};
use crate::error::{Error, Result};

/// Chroma below this is treated as achromatic (hue is meaningless).
const ACHROMATIC_CHROMA: f32 = 1e-3;

/// A color scale interpolating between ≥2 anchor colors in LCh space.
///
/// Anchors are evenly spaced along `t`: `at(0.0)` is the first palette
/// color and `at(1.0)` the last. Values outside [0, 1] are clamped rather
/// than rejected, because noise fields and jitter can push scalars out of
/// range.
#[derive(Debug, Clone)]
pub struct ColorScale {
    stops: Vec<Lch>,
}

impl ColorScale {
    /// Builds a scale from an ordered palette.
    pub fn new(palette: &[Rgb]) -> Result<Self> {
        if palette.len() < 2 {
            return Err(Error::InvalidConfig(
                "color palette requires at least 2 colors".into(),
            ));
        }
        Ok(Self {
            stops: palette.iter().copied().map(rgb_to_lch).collect(),
        })
    }

    /// Samples the scale at `t`, clamping values outside [0, 1].
    ///
    /// Hue interpolates along the shortest arc; an achromatic stop adopts
    /// the other stop's hue so gray-to-color segments do not spin through
    /// the color wheel.
    pub fn at(&self, t: f32) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let segments = self.stops.len() - 1;
        let scaled = t * segments as f32;
        let index = (scaled as usize).min(segments - 1);
        let frac = scaled - index as f32;

        let from = self.stops[index];
        let to = self.stops[index + 1];

        let (h0, h1) = match (from.c < ACHROMATIC_CHROMA, to.c < ACHROMATIC_CHROMA) {
            (true, true) => (0.0, 0.0),
            (true, false) => (to.h, to.h),
            (false, true) => (from.h, from.h),
            (false, false) => (from.h, from.h + shortest_arc(to.h - from.h)),
        };

        lch_to_rgb(Lch {
            l: from.l + frac * (to.l - from.l),
            c: from.c + frac * (to.c - from.c),
            h: h0 + frac * (h1 - h0),
        })
    }
}

/// Wraps a hue delta into [-180, 180].
fn shortest_arc(delta: f32) -> f32 {
    let mut d = delta.rem_euclid(360.0);
    if d > 180.0 {
        d -= 360.0;
    }
    d
}
