//! Shared test mocks and utilities for the Bracketeer text converter.

mod clock;
mod entropy;
mod rng;

pub use clock::FixedClock;
pub use entropy::{FailingEntropy, FixedEntropy};
pub use rng::{MockRng, SequenceRng};
