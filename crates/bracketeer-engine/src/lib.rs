//! Bracketeer — seeded randomized text rewriting.
//!
//! Responsible for deriving a per-request generator seed from ambient
//! entropy, drawing accept/reject decisions from it, and rewriting text
//! either word by word or `<...>` chunk by chunk.

pub mod application;
pub mod domain;
