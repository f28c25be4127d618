//! Bracketeer Core — shared capability abstractions.
//!
//! This crate defines the ambient capabilities the conversion engine reads
//! from (time, process identity, secure randomness) and the seeded generator
//! abstraction it draws from. It contains no HTTP or rewriting code.

pub mod clock;
pub mod entropy;
pub mod error;
pub mod rng;
