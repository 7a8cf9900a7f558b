//! Color types and sRGB ↔ CIELCh conversions.
//!
//! Palette interpolation happens in LCh (the cylindrical form of CIELAB,
//! often called HCL), which keeps gradients perceptually even. Conversions
//! go sRGB → linear RGB → XYZ (D65) → Lab → LCh and back.
use crate::error::{Error, Result};

pub mod scale;

/// 8-bit sRGB color.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Creates a color from 8-bit channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string like `"#ff00aa"` or `"ff00aa"` (case
    /// insensitive).
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(Error::InvalidColor(hex.to_owned()));
        }
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidColor(hex.to_owned()))
        };
        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }

    /// Formats the color as `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// CIELCh color, hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Lch {
    pub l: f32,
    pub c: f32,
    pub h: f32,
}

// D65 reference white.
const XN: f32 = 0.950_47;
const YN: f32 = 1.0;
const ZN: f32 = 1.088_83;

// CIE constants, exact rational forms.
const EPSILON: f32 = 216.0 / 24389.0;
const KAPPA: f32 = 24389.0 / 27.0;

fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

fn lab_f_inv(t: f32) -> f32 {
    let cubed = t * t * t;
    if cubed > EPSILON {
        cubed
    } else {
        (116.0 * t - 16.0) / KAPPA
    }
}

pub(crate) fn rgb_to_lch(rgb: Rgb) -> Lch {
    let r = srgb_to_linear(f32::from(rgb.r) / 255.0);
    let g = srgb_to_linear(f32::from(rgb.g) / 255.0);
    let b = srgb_to_linear(f32::from(rgb.b) / 255.0);

    let x = 0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b;
    let y = 0.212_672_9 * r + 0.715_152_2 * g + 0.072_175_0 * b;
    let z = 0.019_333_9 * r + 0.119_192_0 * g + 0.950_304_1 * b;

    let fx = lab_f(x / XN);
    let fy = lab_f(y / YN);
    let fz = lab_f(z / ZN);

    let l = 116.0 * fy - 16.0;
    let a = 500.0 * (fx - fy);
    let lab_b = 200.0 * (fy - fz);

    let c = a.hypot(lab_b);
    let h = lab_b.atan2(a).to_degrees().rem_euclid(360.0);

    Lch { l, c, h }
}

pub(crate) fn lch_to_rgb(lch: Lch) -> Rgb {
    let h_rad = lch.h.to_radians();
    let a = lch.c * h_rad.cos();
    let lab_b = lch.c * h_rad.sin();

    let fy = (lch.l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - lab_b / 200.0;

    let x = XN * lab_f_inv(fx);
    let y = YN * if lch.l > KAPPA * EPSILON {
        fy * fy * fy
    } else {
        lch.l / KAPPA
    };
    let z = ZN * lab_f_inv(fz);

    let r = 3.240_454_2 * x - 1.537_138_5 * y - 0.498_531_4 * z;
    let g = -0.969_266_0 * x + 1.876_010_8 * y + 0.041_556_0 * z;
    let b = 0.055_643_4 * x - 0.204_025_9 * y + 1.057_225_2 * z;

    let to_channel = |c: f32| (linear_to_srgb(c).clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgb {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}
