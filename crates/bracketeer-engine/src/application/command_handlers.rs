//! Command handlers for the conversion context.
//!
//! This module contains application-level handler functions that
//! orchestrate domain logic: derive a seed, build the generator, rewrite.

use bracketeer_core::error::DomainError;
use bracketeer_core::rng::{DeterministicRng, SeededRng};
use tracing::debug;

use crate::domain::chunk_rewriter::rewrite_chunks;
use crate::domain::commands::ConvertText;
use crate::domain::conversion::{ConversionResult, RewriteMode};
use crate::domain::probability::normalize_probability;
use crate::domain::seed::SeedSource;
use crate::domain::word_rewriter::rewrite_words;

/// Handles the `ConvertText` command: derives a fresh seed, builds a
/// generator owned by this call, and rewrites the text.
///
/// # Errors
///
/// Returns `DomainError::Entropy` if seed derivation cannot read its
/// ambient inputs.
pub fn handle_convert(
    command: &ConvertText,
    seeds: &dyn SeedSource,
) -> Result<ConversionResult, DomainError> {
    let seed = seeds.derive_seed(command.seed)?;
    let mut rng = SeededRng::from_seed(seed);
    debug!(
        correlation_id = %command.correlation_id,
        seed = rng.seed(),
        "built generator"
    );
    Ok(convert_with_rng(command, &mut rng))
}

/// Rewrites the command's text with an injected generator.
#[must_use]
pub fn convert_with_rng(command: &ConvertText, rng: &mut dyn DeterministicRng) -> ConversionResult {
    let p = normalize_probability(command.percent);
    let mode = RewriteMode::from_selector(command.mode);

    let rewrite = match mode {
        RewriteMode::Words => rewrite_words(&command.text, p, rng),
        RewriteMode::Chunks => rewrite_chunks(&command.text, p, rng),
    };

    debug!(
        correlation_id = %command.correlation_id,
        command_type = command.command_type(),
        ?mode,
        p,
        "rewrote text"
    );

    ConversionResult {
        converted: rewrite.text,
        percent: command.percent,
        units_total: rewrite.units_total,
        units_replaced: rewrite.units_replaced,
        mode: command.mode,
    }
}
