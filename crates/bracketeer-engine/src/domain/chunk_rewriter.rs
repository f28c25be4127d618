//! Mode 1: bracket-chunk rewriting.
//!
//! A single left-to-right scan over code points. A `<` with a later `>`
//! opens a chunk; each chunk is either collapsed to the marker or kept
//! verbatim based on a salted draw. Ordinary spaces are swapped for NBSP
//! while the scan state permits it. A final pass strips every remaining
//! `<` and `>`.

use bracketeer_core::rng::DeterministicRng;
use tracing::debug;

use super::conversion::Rewrite;
use super::mixing::{chunk_salt, draw_mixed};
use super::probability::accepts;

/// Non-breaking space substituted for ordinary spaces.
pub const NBSP: char = '\u{00A0}';

const OPEN: char = '<';
const CLOSE: char = '>';

/// Whether an ordinary space seen now is marker-substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpaceState {
    PermitsMarker,
    SuppressesMarker,
}

/// Rewrites `<...>` chunks of `text`, replacing each with the marker when its
/// salted draw is accepted against the normalized probability `p`.
///
/// Returns the rewritten text with the number of chunks seen and replaced.
/// An unmatched `<` is never counted; it is emitted, then removed by the
/// delimiter cleanup.
pub fn rewrite_chunks(text: &str, p: f64, rng: &mut dyn DeterministicRng) -> Rewrite {
    if text.is_empty() {
        return Rewrite::default();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut rewrite = Rewrite::with_capacity(text.len());
    let mut state = SpaceState::PermitsMarker;
    // Once a search for `>` fails, no later `<` can be matched either.
    let mut closers_exhausted = false;
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            OPEN => {
                state = SpaceState::SuppressesMarker;
                let close = if closers_exhausted {
                    None
                } else {
                    chars[i + 1..].iter().position(|&c| c == CLOSE).map(|offset| i + 1 + offset)
                };

                if let Some(j) = close {
                    let span = &chars[i..=j];
                    let salt = chunk_salt(rewrite.units_total, i, j, span);
                    let replace = accepts(draw_mixed(rng, salt), p);
                    rewrite.push_unit(span.iter().copied(), replace);
                    state = SpaceState::PermitsMarker;
                    i = j + 1;
                    continue;
                }

                closers_exhausted = true;
                rewrite.text.push(OPEN);
            }
            CLOSE => {
                state = SpaceState::PermitsMarker;
                rewrite.text.push(CLOSE);
            }
            ' ' if state == SpaceState::PermitsMarker => rewrite.text.push(NBSP),
            other => rewrite.text.push(other),
        }
        i += 1;
    }

    rewrite.text.retain(|c| c != OPEN && c != CLOSE);

    debug!(
        chunks_total = rewrite.units_total,
        chunks_replaced = rewrite.units_replaced,
        "chunk scan complete"
    );
    rewrite
}
