//! Shared application state.

use std::sync::Arc;

use bracketeer_core::clock::Clock;
use bracketeer_core::entropy::EntropySource;
use bracketeer_engine::domain::seed::{SeedForge, SeedPolicy};

/// Application state shared across all request handlers. Holds only
/// read-only capabilities; every request builds its own generator.
#[derive(Clone)]
pub struct AppState {
    /// Wall-clock and monotonic time source.
    pub clock: Arc<dyn Clock>,
    /// Process id and secure random source.
    pub entropy: Arc<dyn EntropySource>,
    /// How caller seeds are folded into generator seeds.
    pub seed_policy: SeedPolicy,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        entropy: Arc<dyn EntropySource>,
        seed_policy: SeedPolicy,
    ) -> Self {
        Self {
            clock,
            entropy,
            seed_policy,
        }
    }

    /// Returns a seed forge borrowing this state's capabilities.
    #[must_use]
    pub fn seed_forge(&self) -> SeedForge<'_> {
        SeedForge::with_policy(self.clock.as_ref(), self.entropy.as_ref(), self.seed_policy)
    }
}
