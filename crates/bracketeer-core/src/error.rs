//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A request failed boundary validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// The clock or secure random source could not be read.
    #[error("entropy source unavailable: {0}")]
    Entropy(String),
}
