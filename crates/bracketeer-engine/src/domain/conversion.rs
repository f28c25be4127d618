//! Conversion modes and results.

/// Literal character inserted in place of a replaced word or chunk.
pub const MARKER: char = ']';

/// Which rewriter a conversion uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteMode {
    /// Mode 0: replace whole word tokens.
    Words,
    /// Mode 1: replace `<...>` chunks and mark spaces.
    Chunks,
}

impl RewriteMode {
    /// Maps a raw mode selector to a rewriter. `1` selects chunk mode; any
    /// other value falls back to word mode.
    #[must_use]
    pub fn from_selector(mode: i64) -> Self {
        if mode == 1 { Self::Chunks } else { Self::Words }
    }
}

/// Output of a single rewriting pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewrite {
    /// The rewritten text.
    pub text: String,
    /// Number of units (words or chunks) seen.
    pub units_total: usize,
    /// Number of units replaced by the marker.
    pub units_replaced: usize,
}

impl Rewrite {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Records one unit: the marker when `replace` holds, `unit` verbatim
    /// otherwise.
    pub(crate) fn push_unit<I>(&mut self, unit: I, replace: bool)
    where
        I: IntoIterator<Item = char>,
    {
        self.units_total += 1;
        if replace {
            self.units_replaced += 1;
            self.text.push(MARKER);
        } else {
            self.text.extend(unit);
        }
    }
}

/// Result of a conversion, including the echoed request fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    /// The rewritten text.
    pub converted: String,
    /// The caller's un-normalized probability.
    pub percent: f64,
    /// Number of words (mode 0) or chunks (mode 1) seen.
    pub units_total: usize,
    /// Number of words or chunks replaced.
    pub units_replaced: usize,
    /// The caller's raw mode selector.
    pub mode: i64,
}
