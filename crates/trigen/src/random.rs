//! Restartable seeded random stream.
//!
//! Every random decision in the pipeline is drawn from one [`SeededRng`].
//! The stream is portable (pure integer xorshift64 core, no platform or
//! library version dependence) and restartable: [`SeededRng::reset`] rewinds
//! it to the state immediately after construction. The generator resets the
//! stream exactly once, between triangulation and coloring, so colors are a
//! pure function of seed, triangle list, and color options regardless of how
//! many draws point generation consumed.
use rand::RngCore;

/// An opaque seed value, numeric or textual.
///
/// Text seeds are normalized to a 64-bit state with FNV-1a so the same
/// string always expands to the same stream.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Seed {
    Number(u64),
    Text(String),
}

impl Seed {
    /// Expands the seed into the initial 64-bit RNG state.
    pub fn state(&self) -> u64 {
        match self {
            Seed::Number(n) => *n,
            Seed::Text(s) => fnv1a(s.as_bytes()),
        }
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Seed::Number(value)
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Seed::Text(value.to_owned())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Seed::Text(value)
    }
}

/// FNV-1a 64-bit hash, used to normalize text seeds into RNG state.
fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for b in bytes {
        hash ^= u64::from(*b);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

/// Deterministic, restartable RNG stream (xorshift64 with shifts 13/7/17).
#[derive(Debug, Clone)]
pub struct SeededRng {
    initial: u64,
    state: u64,
}

impl SeededRng {
    /// Replacement for a zero seed, which is a fixed point of xorshift.
    const FALLBACK_STATE: u64 = 0x5EED_0DD5_0F2B_ADC0;

    /// Creates a stream from any seed value.
    pub fn new(seed: impl Into<Seed>) -> Self {
        let mut state = seed.into().state();
        if state == 0 {
            state = Self::FALLBACK_STATE;
        }
        Self {
            initial: state,
            state,
        }
    }

    /// Rewinds the stream to its state immediately after construction.
    pub fn reset(&mut self) {
        self.state = self.initial;
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Generate a random float in [0, 1).
///
/// The top 24 bits fill the f32 mantissa exactly, so the result never
/// rounds up to 1.0.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() >> 8) as f32 / (1u32 << 24) as f32
}
