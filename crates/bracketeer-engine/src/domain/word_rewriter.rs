//! Mode 0: word-token rewriting.

use bracketeer_core::rng::DeterministicRng;

use super::conversion::Rewrite;
use super::probability::accepts;

/// Word characters: Unicode alphabetic and numeric code points plus underscore.
/// Alphabetic includes combining vowel signs such as U+093F.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Replaces each maximal run of word characters in `text` with the marker
/// when an independent uniform draw is accepted against `p`. Everything
/// between runs is copied unchanged.
pub fn rewrite_words(text: &str, p: f64, rng: &mut dyn DeterministicRng) -> Rewrite {
    let mut rewrite = Rewrite::with_capacity(text.len());
    let mut word_start: Option<usize> = None;

    for (idx, c) in text.char_indices() {
        if is_word_char(c) {
            word_start.get_or_insert(idx);
            continue;
        }
        if let Some(start) = word_start.take() {
            let replace = accepts(rng.next_f64_range(0.0, 1.0), p);
            rewrite.push_unit(text[start..idx].chars(), replace);
        }
        rewrite.text.push(c);
    }

    if let Some(start) = word_start {
        let replace = accepts(rng.next_f64_range(0.0, 1.0), p);
        rewrite.push_unit(text[start..].chars(), replace);
    }

    rewrite
}

#[cfg(test)]
mod tests {
    use super::*;

    use bracketeer_core::rng::SeededRng;
    use bracketeer_test_support::{MockRng, SequenceRng};

    #[test]
    fn test_empty_input_yields_empty_output() {
        let rewrite = rewrite_words("", 1.0, &mut MockRng);

        assert_eq!(rewrite, Rewrite::default());
    }

    #[test]
    fn test_full_probability_replaces_every_word() {
        let mut rng = SeededRng::from_seed(9);

        let rewrite = rewrite_words("foo bar", 1.0, &mut rng);

        assert_eq!(rewrite.text, "] ]");
        assert_eq!(rewrite.units_total, 2);
        assert_eq!(rewrite.units_replaced, 2);
    }

    #[test]
    fn test_zero_probability_leaves_text_untouched() {
        let mut rng = SeededRng::from_seed(9);

        let rewrite = rewrite_words("a b", 0.0, &mut rng);

        assert_eq!(rewrite.text, "a b");
        assert_eq!(rewrite.units_total, 2);
        assert_eq!(rewrite.units_replaced, 0);
    }

    #[test]
    fn test_draws_decide_each_word_in_order() {
        let mut rng = SequenceRng::new(vec![0.9, 0.2, 0.5]);

        let rewrite = rewrite_words("one, two; three", 0.5, &mut rng);

        assert_eq!(rewrite.text, "one, ]; ]");
        assert_eq!(rewrite.units_replaced, 2);
        assert_eq!(rng.draws(), 3);
    }

    #[test]
    fn test_punctuation_and_underscores() {
        let mut rng = SeededRng::from_seed(1);

        let rewrite = rewrite_words("snake_case -- 42!", 1.0, &mut rng);

        assert_eq!(rewrite.text, "] -- ]!");
        assert_eq!(rewrite.units_total, 2);
    }

    #[test]
    fn test_unicode_letters_form_words() {
        let mut rng = SeededRng::from_seed(1);

        let rewrite = rewrite_words("Tiếng Việt", 1.0, &mut rng);

        assert_eq!(rewrite.text, "] ]");
        assert_eq!(rewrite.units_total, 2);
    }

    #[test]
    fn test_combining_vowel_signs_stay_inside_words() {
        let mut rng = SequenceRng::new(vec![0.0]);

        // U+093F is a spacing mark with the Alphabetic property.
        let rewrite = rewrite_words("कि", 1.0, &mut rng);

        assert_eq!(rewrite.text, "]");
        assert_eq!(rewrite.units_total, 1);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn test_text_without_words_draws_nothing() {
        let mut rng = SequenceRng::new(vec![]);

        let rewrite = rewrite_words("  ...  ", 1.0, &mut rng);

        assert_eq!(rewrite.text, "  ...  ");
        assert_eq!(rewrite.units_total, 0);
        assert_eq!(rng.draws(), 0);
    }
}
