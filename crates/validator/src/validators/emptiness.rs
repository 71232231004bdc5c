//! Presence validators
//!
//! - [`NotEmpty`] - Validates that a value is not the empty value of its kind
//!
//! ```
//! use fieldcheck::foundation::Validate;
//! use fieldcheck::validators::not_empty;
//!
//! let rule = not_empty::<Option<String>>();
//! assert!(rule.validate(&Some("Taro".to_string())).is_ok());
//! assert!(rule.validate(&Some(String::new())).is_err());
//! assert!(rule.validate(&None).is_err());
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::foundation::{Emptiness, Validate, ValidationError};
use crate::messages::defaults;

/// Validates that a value is not empty per [`Emptiness`].
///
/// `T` may be unsized, so `NotEmpty<str>` and `NotEmpty<[u8]>` work on
/// borrowed input directly.
pub struct NotEmpty<T: ?Sized> {
    _phantom: PhantomData<fn(&T)>,
}

impl<T: ?Sized> NotEmpty<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T: ?Sized> Default for NotEmpty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for NotEmpty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for NotEmpty<T> {}

impl<T: ?Sized> fmt::Debug for NotEmpty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotEmpty").finish()
    }
}

impl<T: Emptiness + ?Sized> Validate for NotEmpty<T> {
    type Input = T;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        if input.is_empty_value() {
            Err(ValidationError::new("not_empty", defaults::NOT_EMPTY))
        } else {
            Ok(())
        }
    }
}

/// Creates a [`NotEmpty`] rule.
#[must_use]
pub const fn not_empty<T: ?Sized>() -> NotEmpty<T> {
    NotEmpty::new()
}
