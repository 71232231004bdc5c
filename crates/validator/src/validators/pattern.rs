//! Pattern matching
//!
//! Matching uses search semantics: the pattern may match anywhere in the
//! text. Anchor it with `^...$` for a full match.
//!
//! Patterns are either precompiled [`Regex`] values or text compiled on
//! demand. Text that does not compile is a programming error in the caller,
//! so the infallible path panics; use [`try_matches`] or [`compile_pattern`]
//! when the pattern itself comes from untrusted input.

use regex::Regex;

use crate::error::{Error, Result};
use crate::foundation::ValidationError;
use crate::messages::{defaults, render};

/// Something that can be matched against text.
pub trait Pattern {
    /// Returns `true` if the pattern matches anywhere in `text`.
    fn is_match(&self, text: &str) -> bool;

    /// The pattern's source text, used in messages.
    fn as_str(&self) -> &str;
}

impl Pattern for Regex {
    #[inline]
    fn is_match(&self, text: &str) -> bool {
        Self::is_match(self, text)
    }

    #[inline]
    fn as_str(&self) -> &str {
        Self::as_str(self)
    }
}

/// Compiles on every call and panics if the pattern is invalid.
impl Pattern for str {
    fn is_match(&self, text: &str) -> bool {
        compile_pattern(self)
            .unwrap_or_else(|err| panic!("{err}"))
            .is_match(text)
    }

    #[inline]
    fn as_str(&self) -> &str {
        self
    }
}

impl Pattern for String {
    #[inline]
    fn is_match(&self, text: &str) -> bool {
        self.as_str().is_match(text)
    }

    #[inline]
    fn as_str(&self) -> &str {
        self
    }
}

impl<P: Pattern + ?Sized> Pattern for &P {
    #[inline]
    fn is_match(&self, text: &str) -> bool {
        (**self).is_match(text)
    }

    #[inline]
    fn as_str(&self) -> &str {
        (**self).as_str()
    }
}

/// Compiles `pattern`, reporting syntax errors as [`Error::InvalidPattern`].
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        pattern: pattern.to_owned(),
        source,
    })
}

/// Returns `true` if `pattern` matches anywhere in `text`.
///
/// # Panics
///
/// If `pattern` is text that is not a valid regular expression.
///
/// # Examples
///
/// ```
/// use fieldcheck::matches;
/// use regex::Regex;
///
/// assert!(matches("090-1234-1234", "[0-9]{3}-[0-9]{4}-[0-9]{4}"));
///
/// let anchored = Regex::new("^foo .+ fuga$").unwrap();
/// assert!(matches("foo bar hoge fuga", &anchored));
/// ```
#[inline]
pub fn matches<P: Pattern + ?Sized>(text: &str, pattern: &P) -> bool {
    pattern.is_match(text)
}

/// Fallible variant of [`matches`] for patterns supplied as text.
pub fn try_matches(text: &str, pattern: &str) -> Result<bool> {
    Ok(compile_pattern(pattern)?.is_match(text))
}

crate::validator! {
    /// Validates that a string matches a regular expression (search semantics).
    pub Matches { pattern: Regex } for str;
    rule(self, input) { matches(input, &self.pattern) }
    error(self, input) {
        ValidationError::new("matches", render(defaults::MATCHES, &[&self.pattern.as_str()]))
            .with_param("pattern", self.pattern.as_str().to_owned())
    }
    new(pattern: &str) -> Error {
        Ok(Self {
            pattern: compile_pattern(pattern)?,
        })
    }
    fn matching(pattern: &str) -> Error;
}

impl From<Regex> for Matches {
    fn from(pattern: Regex) -> Self {
        Self { pattern }
    }
}

// ============================================================================
// TESTS
// ============================================================================
