//! Commands for the conversion context.

use uuid::Uuid;

/// Command to rewrite a piece of text.
#[derive(Debug, Clone)]
pub struct ConvertText {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The text to rewrite. May be empty.
    pub text: String,
    /// Replacement probability as supplied by the caller: a fraction in
    /// `[0, 1]` or a percentage in `(1, 100]`.
    pub percent: f64,
    /// Optional caller seed used to steer reproducibility.
    pub seed: Option<i64>,
    /// Raw mode selector, echoed back unchanged.
    pub mode: i64,
}

impl ConvertText {
    /// Command type name, used for logging.
    #[must_use]
    pub fn command_type(&self) -> &'static str {
        "conversion.convert_text"
    }
}
