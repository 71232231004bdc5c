//! Structured failure returned by rule objects
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! never allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// Carries a machine-readable `code`, the rendered English `message`, an
/// optional field key, and the rule's parameters in declaration order. The
/// parameter values double as the positional arguments when the
/// [`Accumulator`](crate::Accumulator) re-renders a caller-supplied template.
///
/// # Examples
///
/// ```
/// use fieldcheck::foundation::ValidationError;
///
/// let error = ValidationError::new("in_range", "must be between 50 and 100")
///     .with_field("age")
///     .with_param("min", "50")
///     .with_param("max", "100");
///
/// assert_eq!(error.param("max"), Some("100"));
/// assert_eq!(error.to_string(), "[age] in_range: must be between 50 and 100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling.
    ///
    /// Examples: "not_empty", "in_range", "matches"
    pub code: Cow<'static, str>,

    /// Human-readable message, already rendered.
    pub message: Cow<'static, str>,

    /// Field key the failure belongs to, when known.
    pub field: Option<Cow<'static, str>>,

    /// Rule parameters as ordered key-value pairs (typically 0-2).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field key for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Appends a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Parameter values in declaration order.
    pub fn param_values(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert_eq!(error.to_string(), "test: Test error");
    }

    #[test]
    fn test_error_with_field() {
        let error = ValidationError::new("not_empty", "can't be blank").with_field("email");
        assert_eq!(error.field.as_deref(), Some("email"));
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new("in_range", "out of range")
            .with_param("min", "5")
            .with_param("max", "9");

        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), None);
        assert_eq!(error.param_values().collect::<Vec<_>>(), ["5", "9"]);
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("not_empty", "can't be blank");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
