//! Crate error type.
//!
//! Validation failures are never errors: they are booleans, accumulated
//! messages, or [`ValidationError`](crate::foundation::ValidationError)
//! values. This type covers faults in collaborators only.

/// Faults raised by fallible constructors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The pattern engine rejected a regular expression.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern as supplied by the caller.
        pattern: String,
        /// The underlying regex compilation error.
        source: regex::Error,
    },
}

/// Result alias for fallible constructors.
pub type Result<T, E = Error> = std::result::Result<T, E>;
