//! Domain layer: the rewriting engine and its inputs and outputs.

pub mod chunk_rewriter;
pub mod commands;
pub mod conversion;
pub mod mixing;
pub mod probability;
pub mod seed;
pub mod word_rewriter;
