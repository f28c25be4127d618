//! Process identity and secure randomness, modeled as an injectable
//! capability so seed derivation can run without touching the OS.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::DomainError;

/// Abstraction over the ambient, non-clock entropy inputs.
pub trait EntropySource: Send + Sync {
    /// Returns the identifier of the current process.
    fn process_id(&self) -> u32;

    /// Fills `dest` from a cryptographically secure source.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Entropy` if the operating system source fails.
    fn fill_secure(&self, dest: &mut [u8]) -> Result<(), DomainError>;
}

/// Production entropy backed by `std::process::id` and the OS random source.
#[derive(Debug, Clone, Copy)]
pub struct SystemEntropy;

impl EntropySource for SystemEntropy {
    fn process_id(&self) -> u32 {
        std::process::id()
    }

    fn fill_secure(&self, dest: &mut [u8]) -> Result<(), DomainError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| DomainError::Entropy(e.to_string()))
    }
}
