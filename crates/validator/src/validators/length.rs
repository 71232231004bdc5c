//! Text length
//!
//! Length is measured in Unicode scalar values (`char`s), not bytes, so
//! "ほげ" has length 2.

use crate::foundation::ValidationError;
use crate::messages::{defaults, render};

/// Returns `true` if the number of characters in `text` is within
/// `min..=max`.
///
/// # Examples
///
/// ```
/// use fieldcheck::text_length_in_range;
///
/// assert!(text_length_in_range("hoge", 4, 5));
/// assert!(text_length_in_range("ほげ", 1, 3));
/// assert!(!text_length_in_range("ほげふが", 1, 3));
/// ```
#[inline]
pub fn text_length_in_range(text: &str, min: usize, max: usize) -> bool {
    let len = text.chars().count();
    min <= len && len <= max
}

crate::validator! {
    /// Validates that a string length is within a range (counts chars).
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub TextLength { min: usize, max: usize } for str;
    rule(self, input) { text_length_in_range(input, self.min, self.max) }
    error(self, input) {
        ValidationError::new(
            "text_length",
            render(defaults::TEXT_LENGTH, &[&self.min, &self.max]),
        )
        .with_param("min", self.min.to_string())
        .with_param("max", self.max.to_string())
        .with_param("actual", input.chars().count().to_string())
    }
    fn length(min: usize, max: usize);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use rstest::rstest;

    #[rstest]
    #[case("hoge", 4, 5, true)]
    #[case("\u{307b}\u{3052}", 1, 3, true)]
    #[case("\u{307b}\u{3052}\u{3075}\u{304c}", 1, 3, false)]
    #[case("\u{307b}\u{3052}\u{3075}\u{304c}abc", 1, 7, true)]
    #[case("", 0, 0, true)]
    #[case("", 1, 3, false)]
    fn test_text_length_in_range(
        #[case] text: &str,
        #[case] min: usize,
        #[case] max: usize,
        #[case] ok: bool,
    ) {
        assert_eq!(text_length_in_range(text, min, max), ok);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let text = "h\u{e9}llo";
        assert_eq!(text.len(), 6);
        assert!(text_length_in_range(text, 5, 5));
        assert!(!text_length_in_range("\u{1f44b}\u{1f30d}\u{1f680}", 1, 2));
        assert!(text_length_in_range("\u{1f44b}\u{1f30d}\u{1f680}", 1, 3));
    }

    #[test]
    fn test_length_rule() {
        let rule = length(1, 3);
        assert!(rule.validate("abc").is_ok());

        let error = rule.validate("abcd").unwrap_err();
        assert_eq!(error.code, "text_length");
        assert_eq!(error.message, "string length must be between 1 and 3");
        assert_eq!(error.param("actual"), Some("4"));
    }
}
