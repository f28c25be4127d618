//! Seed derivation.
//!
//! A generator seed is "reproducible on demand, unique by default": the
//! ambient inputs (local calendar time, wall and monotonic nanoseconds,
//! process id, 32 secure random bytes) are hashed with BLAKE2b so that every
//! call yields a fresh seed, and a caller seed can either be mixed into that
//! hash or, under `SeedPolicy::PassThrough`, replace it entirely.

use std::str::FromStr;

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use bracketeer_core::clock::Clock;
use bracketeer_core::entropy::EntropySource;
use bracketeer_core::error::DomainError;
use chrono::{DateTime, Datelike, Local, Timelike};
use tracing::debug;

type Blake2b256 = Blake2b<U32>;

/// Seeds are reduced modulo this value, so they always fit in 63 bits.
pub const SEED_MODULUS: u64 = (1 << 63) - 1;

/// Number of secure random bytes folded into every ambient seed.
pub const SECURE_BYTES: usize = 32;

const LCG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const LCG_INCREMENT: u64 = 1_442_695_040_888_963_407;

/// Produces generator seeds for conversions.
pub trait SeedSource: Send + Sync {
    /// Derives a seed in `[0, 2^63 - 2]`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Entropy` if an ambient entropy input is
    /// unavailable.
    fn derive_seed(&self, explicit_seed: Option<i64>) -> Result<u64, DomainError>;
}

/// How a caller-supplied seed is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Fold the caller seed into the ambient hash.
    #[default]
    Mixed,
    /// Use the caller seed directly, skipping ambient entropy.
    PassThrough,
}

impl SeedPolicy {
    /// Configuration name of the policy, as accepted by `from_str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mixed => "mixed",
            Self::PassThrough => "passthrough",
        }
    }
}

impl FromStr for SeedPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mixed" => Ok(Self::Mixed),
            "passthrough" | "pass-through" | "pass_through" => Ok(Self::PassThrough),
            other => Err(DomainError::Validation(format!(
                "unknown seed policy '{other}', expected 'mixed' or 'passthrough'"
            ))),
        }
    }
}

/// Calendar-derived integers mixed into every ambient seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarBases {
    /// Positional encoding of the date and time down to the microsecond.
    pub base1: i128,
    /// Secondary recipe combining XOR, products, division and modulo.
    pub base2: i128,
}

impl CalendarBases {
    /// Computes both bases from a local timestamp.
    #[must_use]
    pub fn from_datetime(now: &DateTime<Local>) -> Self {
        let year = i128::from(now.year());
        let month = i128::from(now.month());
        let day = i128::from(now.day());
        let hour = i128::from(now.hour());
        let minute = i128::from(now.minute());
        let second = i128::from(now.second());
        let micros = i128::from(now.nanosecond() / 1_000);

        let base1 = (((((year * 13 + month) * 37 + day) * 29 + hour) * 59 + minute) * 61 + second)
            * 1_000_000
            + micros.max(1);

        let denom = ((month * day) % 97).max(1);
        let base2 = ((year ^ (month * 97)) + day * 131) * ((hour + 1) * (minute + 1) * (second + 1))
            + base1.div_euclid(denom)
            - (year + month + day) % 7919;

        Self { base1, base2 }
    }
}

/// Folds a caller seed with `base2` through a 64-bit LCG step.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn mix_explicit_seed(explicit_seed: i64, base2: i128) -> u64 {
    let seed = u64::from_ne_bytes(explicit_seed.to_ne_bytes());
    seed.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT) ^ (base2 as u64)
}

/// Reduces a little-endian unsigned integer of any width modulo
/// `SEED_MODULUS`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn reduce_le_bytes(bytes: &[u8]) -> u64 {
    let modulus = u128::from(SEED_MODULUS);
    let reduced = bytes
        .iter()
        .rev()
        .fold(0u128, |acc, &byte| ((acc << 8) | u128::from(byte)) % modulus);
    reduced as u64
}

/// Ambient-entropy seed derivation over injectable clock and entropy
/// capabilities.
pub struct SeedForge<'a> {
    clock: &'a dyn Clock,
    entropy: &'a dyn EntropySource,
    policy: SeedPolicy,
}

impl<'a> SeedForge<'a> {
    /// Creates a forge using the default `SeedPolicy::Mixed`.
    #[must_use]
    pub fn new(clock: &'a dyn Clock, entropy: &'a dyn EntropySource) -> Self {
        Self::with_policy(clock, entropy, SeedPolicy::default())
    }

    /// Creates a forge with an explicit seed policy.
    #[must_use]
    pub fn with_policy(
        clock: &'a dyn Clock,
        entropy: &'a dyn EntropySource,
        policy: SeedPolicy,
    ) -> Self {
        Self {
            clock,
            entropy,
            policy,
        }
    }

    fn ambient_seed(&self, explicit_seed: Option<i64>) -> Result<u64, DomainError> {
        let now = self.clock.now();
        let bases = CalendarBases::from_datetime(&now);
        let wall_nanos =
            i128::from(now.timestamp()) * 1_000_000_000 + i128::from(now.timestamp_subsec_nanos());
        let monotonic_nanos = self.clock.monotonic_nanos();
        let pid = u64::from(self.entropy.process_id());

        let mut secure = [0u8; SECURE_BYTES];
        self.entropy.fill_secure(&mut secure)?;

        let mut hasher = Blake2b256::new();
        hasher.update(bases.base1.to_le_bytes());
        hasher.update(bases.base2.to_le_bytes());
        hasher.update(wall_nanos.to_le_bytes());
        hasher.update(monotonic_nanos.to_le_bytes());
        hasher.update(pid.to_le_bytes());
        hasher.update(secure);

        if let Some(seed) = explicit_seed {
            let mixed = mix_explicit_seed(seed, bases.base2);
            hasher.update(u128::from(mixed).to_le_bytes());
        }

        Ok(reduce_le_bytes(&hasher.finalize()))
    }
}

impl SeedSource for SeedForge<'_> {
    fn derive_seed(&self, explicit_seed: Option<i64>) -> Result<u64, DomainError> {
        let seed = match (self.policy, explicit_seed) {
            (SeedPolicy::PassThrough, Some(seed)) => {
                u64::from_ne_bytes(seed.to_ne_bytes()) % SEED_MODULUS
            }
            _ => self.ambient_seed(explicit_seed)?,
        };
        debug!(
            policy = ?self.policy,
            explicit = explicit_seed.is_some(),
            seed,
            "derived generator seed"
        );
        Ok(seed)
    }
}
