//! 3D lattice (improved Perlin) noise seeded from the shared random stream.
//!
//! The permutation table is shuffled with draws from the seeded stream, so a
//! noise field is fully determined by the seed. The output carries a +0.5
//! bias and is deliberately unclamped: values can leave [0, 1] and the
//! color scale is required to handle that.
use rand::RngCore;

use crate::random::rand01;

/// Quintic fade curve `t³(t(6t−15)+10)`.
fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}

/// Selects one of 12 gradient directions from the low 4 bits of the hash.
fn grad(hash: u8, x: f32, y: f32, z: f32) -> f32 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}

/// Perlin noise field over a seeded 512-entry permutation table.
///
/// The table holds a shuffled permutation of 0..256 mirrored once
/// (entries 256..512 repeat 0..256) so lattice lookups never need a
/// bounds wrap.
#[derive(Debug, Clone)]
pub struct PerlinNoise {
    permutation: [u8; 512],
}

impl PerlinNoise {
    /// Builds the permutation table by Fisher–Yates shuffling the identity
    /// table with draws from `rng`.
    pub fn new(rng: &mut dyn RngCore) -> Self {
        let mut permutation = [0u8; 512];
        for (i, slot) in permutation.iter_mut().take(256).enumerate() {
            *slot = i as u8;
        }

        for i in (1..=256usize).rev() {
            let j = (rand01(rng) * i as f32).floor() as usize;
            permutation.swap(i - 1, j);
        }

        for i in 0..256 {
            permutation[i + 256] = permutation[i];
        }

        Self { permutation }
    }

    /// Evaluates the noise field at `(xi, yi, zi)`.
    ///
    /// Standard improved Perlin: trilinear interpolation of the 8 corner
    /// gradients of the containing lattice cell, plus a constant 0.5 bias.
    pub fn noise(&self, xi: f32, yi: f32, zi: f32) -> f32 {
        let p = &self.permutation;

        let xf = xi.floor();
        let yf = yi.floor();
        let zf = zi.floor();
        let xc = (xf as i32 & 255) as usize;
        let yc = (yf as i32 & 255) as usize;
        let zc = (zf as i32 & 255) as usize;
        let x = xi - xf;
        let y = yi - yf;
        let z = zi - zf;

        let u = fade(x);
        let v = fade(y);
        let w = fade(z);

        let a = p[xc] as usize + yc;
        let aa = p[a] as usize + zc;
        let ab = p[a + 1] as usize + zc;
        let b = p[xc + 1] as usize + yc;
        let ba = p[b] as usize + zc;
        let bb = p[b + 1] as usize + zc;

        lerp(
            w,
            lerp(
                v,
                lerp(
                    u,
                    grad(p[aa], x, y, z),
                    grad(p[ba], x - 1.0, y, z),
                ),
                lerp(
                    u,
                    grad(p[ab], x, y - 1.0, z),
                    grad(p[bb], x - 1.0, y - 1.0, z),
                ),
            ),
            lerp(
                v,
                lerp(
                    u,
                    grad(p[aa + 1], x, y, z - 1.0),
                    grad(p[ba + 1], x - 1.0, y, z - 1.0),
                ),
                lerp(
                    u,
                    grad(p[ab + 1], x, y - 1.0, z - 1.0),
                    grad(p[bb + 1], x - 1.0, y - 1.0, z - 1.0),
                ),
            ),
        ) + 0.5
    }
}
