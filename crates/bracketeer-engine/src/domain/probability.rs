//! Probability normalization and the accept rule shared by both rewriters.

use bracketeer_core::error::DomainError;

/// Upper bound accepted for the caller's `percent` field.
pub const MAX_PERCENT: f64 = 100.0;

/// Checks the caller's `percent` against the accepted `[0, 100]` range.
///
/// # Errors
///
/// Returns `DomainError::Validation` if `percent` is not finite or falls
/// outside `[0, 100]`.
pub fn validate_percent(percent: f64) -> Result<(), DomainError> {
    if !percent.is_finite() {
        return Err(DomainError::Validation("percent must be a finite number".to_owned()));
    }
    if !(0.0..=MAX_PERCENT).contains(&percent) {
        return Err(DomainError::Validation(format!(
            "percent must be between 0 and {MAX_PERCENT}, got {percent}"
        )));
    }
    Ok(())
}

/// Reduces a caller probability to a fraction in `[0, 1]`.
///
/// Values up to `1.0` are already fractions; larger values are percentages.
#[must_use]
pub fn normalize_probability(percent: f64) -> f64 {
    if percent.is_nan() {
        return 0.0;
    }
    let p = if percent <= 1.0 { percent } else { percent / 100.0 };
    p.clamp(0.0, 1.0)
}

/// Accept rule for a uniform draw against a normalized probability.
///
/// A draw is accepted when `draw <= p`. A probability of zero never accepts,
/// so a zero draw cannot replace anything at `p = 0`.
#[must_use]
pub fn accepts(draw: f64, p: f64) -> bool {
    p > 0.0 && draw <= p
}
