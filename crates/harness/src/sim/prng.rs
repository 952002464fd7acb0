//! Xorshift32 pseudo-random operand generator.
//!
//! Not cryptographic. The stream depends only on the seed, so a run can be
//! replayed exactly by constructing a new generator with the same seed.

use crate::common::DEFAULT_SEED;

/// Marsaglia xorshift32 generator (shifts 13, 17, 5).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    /// Creates a generator. Zero is a fixed point of xorshift and is
    /// replaced by [`DEFAULT_SEED`].
    pub const fn new(seed: u32) -> Self {
        let state = if seed == 0 { DEFAULT_SEED } else { seed };
        Self { state }
    }

    /// Current internal state (the last value returned, or the seed).
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Advances the generator and returns the new value. Never returns zero.
    pub const fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl Default for Xorshift32 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Iterator for Xorshift32 {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_u32())
    }
}
