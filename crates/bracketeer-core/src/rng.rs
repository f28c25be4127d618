//! Random number generator abstraction for determinism.
//!
//! In production, this wraps a seeded `StdRng`. In tests and replays,
//! a scripted implementation is injected.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a raw random `u64`.
    fn next_u64(&mut self) -> u64;

    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Generate a random `f64` in `[lo, hi)`.
    fn next_f64_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

/// Reproducible generator: the same seed and the same sequence of calls
/// always yields the same values.
#[derive(Debug, Clone)]
pub struct SeededRng {
    inner: StdRng,
    seed: u64,
}

impl SeededRng {
    /// Creates a generator from a 64-bit seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed this generator was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DeterministicRng for SeededRng {
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn next_f64(&mut self) -> f64 {
        self.inner.random::<f64>()
    }
}
