//! Test clock — deterministic `Clock` implementation for tests.

use bracketeer_core::clock::Clock;
use chrono::{DateTime, Local};

/// A clock that always returns a fixed point in time and a fixed monotonic
/// reading.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    /// Wall-clock time returned by `now`.
    pub now: DateTime<Local>,
    /// Value returned by `monotonic_nanos`.
    pub monotonic_nanos: u128,
}

impl FixedClock {
    /// Create a clock frozen at `now` with a zero monotonic reading.
    #[must_use]
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            now,
            monotonic_nanos: 0,
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.now
    }

    fn monotonic_nanos(&self) -> u128 {
        self.monotonic_nanos
    }
}
