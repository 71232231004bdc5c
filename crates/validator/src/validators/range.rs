//! Numeric range

use std::fmt::Display;

use crate::foundation::ValidationError;
use crate::messages::{defaults, render};

/// Returns `true` if `min <= value <= max`.
///
/// Both bounds are inclusive. An inverted range (`min > max`) accepts nothing.
///
/// # Examples
///
/// ```
/// use fieldcheck::in_range;
///
/// assert!(in_range(1, 0, 1));
/// assert!(in_range(50, 0, 100));
/// assert!(!in_range(30, 50, 100));
/// ```
#[inline]
pub fn in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    min <= value && value <= max
}

crate::validator! {
    /// Validates that a value is within an inclusive range.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldcheck::validators::range;
    /// use fieldcheck::foundation::Validate;
    ///
    /// let rule = range(50, 100);
    /// assert!(rule.validate(&50).is_ok());
    /// assert_eq!(rule.validate(&30).unwrap_err().message, "must be between 50 and 100");
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub InRange<T: PartialOrd + Display + Copy> { min: T, max: T } for T;
    rule(self, input) { in_range(*input, self.min, self.max) }
    error(self, input) {
        ValidationError::new("in_range", render(defaults::IN_RANGE, &[&self.min, &self.max]))
            .with_param("min", self.min.to_string())
            .with_param("max", self.max.to_string())
    }
    fn range(min: T, max: T);
}

// ============================================================================
// TESTS
// ============================================================================
