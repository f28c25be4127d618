//! Application layer: orchestrates seed derivation and rewriting.

pub mod command_handlers;
