//! Clock abstraction for determinism.

use std::sync::LazyLock;
use std::time::Instant;

use chrono::{DateTime, Local};

/// Reference point for monotonic readings taken by `SystemClock`.
static MONOTONIC_ORIGIN: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Abstraction over system time for deterministic behavior.
pub trait Clock: Send + Sync {
    /// Returns the current local wall-clock time.
    fn now(&self) -> DateTime<Local>;

    /// Returns a monotonic reading in nanoseconds. Only differences between
    /// readings are meaningful.
    fn monotonic_nanos(&self) -> u128;
}

/// Production clock that delegates to the system clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn monotonic_nanos(&self) -> u128 {
        MONOTONIC_ORIGIN.elapsed().as_nanos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_monotonic_readings_never_decrease() {
        let clock = SystemClock;

        let first = clock.monotonic_nanos();
        let second = clock.monotonic_nanos();

        assert!(second >= first);
    }
}
