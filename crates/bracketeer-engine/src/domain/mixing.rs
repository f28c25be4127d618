//! Salted uniform draws.
//!
//! Each decision point hashes four generator outputs together with a salt
//! derived from its position in the text, so two similar chunks at different
//! offsets get decorrelated outcomes while the whole pass stays reproducible
//! from the generator seed alone.

use blake2::digest::consts::U8;
use blake2::{Blake2b, Digest};
use bracketeer_core::rng::DeterministicRng;

type Blake2b64 = Blake2b<U8>;

const MANTISSA_MASK: u64 = (1 << 53) - 1;
const MANTISSA_SCALE: f64 = 9_007_199_254_740_992.0; // 2^53

const INDEX_MULTIPLIER: u64 = 0x9E37_79B9_7F4A_7C15;
const START_MULTIPLIER: u64 = 1_315_423_911;
const END_MULTIPLIER: u64 = 2_654_435_761;

/// At most this many code points of a chunk contribute to its content salt.
pub const CONTENT_SALT_LIMIT: usize = 1024;

/// Draws a uniform value in `[0, 1)` from `rng`, salted with `salt`.
///
/// Consumes two `u64` draws followed by two `f64` draws.
#[allow(clippy::cast_precision_loss)]
pub fn draw_mixed(rng: &mut dyn DeterministicRng, salt: u64) -> f64 {
    let a = rng.next_u64();
    let b = rng.next_u64();
    let x = rng.next_f64();
    let y = rng.next_f64();

    let mut hasher = Blake2b64::new();
    hasher.update(a.to_le_bytes());
    hasher.update(b.to_le_bytes());
    hasher.update(x.to_bits().to_le_bytes());
    hasher.update(y.to_bits().to_le_bytes());
    hasher.update(salt.to_le_bytes());

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hasher.finalize());

    (u64::from_le_bytes(bytes) & MANTISSA_MASK) as f64 / MANTISSA_SCALE
}

/// Structural salt for the chunk spanning `start..=end`.
///
/// `index` is the zero-based ordinal of the chunk among matched chunks and
/// `chunk` holds its code points including both delimiters.
#[must_use]
pub fn chunk_salt(index: usize, start: usize, end: usize, chunk: &[char]) -> u64 {
    let length = chunk.len() as u64;
    let content: u64 = chunk
        .iter()
        .take(CONTENT_SALT_LIMIT)
        .map(|&c| u64::from(u32::from(c) & 0xFF))
        .sum();

    (index as u64 + 1).wrapping_mul(INDEX_MULTIPLIER)
        ^ (start as u64).wrapping_mul(START_MULTIPLIER)
        ^ (end as u64).wrapping_mul(END_MULTIPLIER)
        ^ ((length & 0xFFFF_FFFF) << 17)
        ^ content
}
