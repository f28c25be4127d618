//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use bracketeer_core::rng::DeterministicRng;

/// A no-op RNG that always returns `0` for `next_u64` and `0.0` for
/// `next_f64`. Suitable for tests that do not depend on specific random values.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u64(&mut self) -> u64 {
        0
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }
}

/// An RNG that returns floats from a predetermined sequence. Panics if the
/// sequence is exhausted. Used in tests that need specific, repeatable
/// accept/reject outcomes (e.g., which words get replaced).
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<f64>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, index: 0 }
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u64(&mut self) -> u64 {
        0
    }

    fn next_f64(&mut self) -> f64 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
