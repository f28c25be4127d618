//! Test entropy — deterministic `EntropySource` implementations for tests.

use bracketeer_core::entropy::EntropySource;
use bracketeer_core::error::DomainError;

/// An entropy source with a fixed process id that fills every secure buffer
/// with the same byte.
#[derive(Debug, Clone, Copy)]
pub struct FixedEntropy {
    /// Value returned by `process_id`.
    pub pid: u32,
    /// Byte written to every position of a secure buffer.
    pub fill: u8,
}

impl EntropySource for FixedEntropy {
    fn process_id(&self) -> u32 {
        self.pid
    }

    fn fill_secure(&self, dest: &mut [u8]) -> Result<(), DomainError> {
        dest.fill(self.fill);
        Ok(())
    }
}

/// An entropy source whose secure random source is always unavailable.
/// Useful for testing error-handling paths.
#[derive(Debug, Clone, Copy)]
pub struct FailingEntropy;

impl EntropySource for FailingEntropy {
    fn process_id(&self) -> u32 {
        1
    }

    fn fill_secure(&self, _dest: &mut [u8]) -> Result<(), DomainError> {
        Err(DomainError::Entropy("random source unavailable".into()))
    }
}
