//! The rule-object trait
//!
//! Predicates are plain functions; rule objects bundle a predicate with its
//! parameters so one value can be stored, shared, and reported through an
//! [`Accumulator`](crate::Accumulator).

use crate::foundation::ValidationError;

/// The trait every rule object implements.
///
/// `Input` may be unsized (`str`, `[T]`) so rules borrow rather than copy.
///
/// # Examples
///
/// ```
/// use fieldcheck::foundation::{Validate, ValidationError};
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), ValidationError> {
///         if input % 2 == 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::new("even", "must be even"))
///         }
///     }
/// }
///
/// assert!(Even.validate(&4).is_ok());
/// assert!(Even.validate(&3).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// Returns `Ok(())` on success, or a [`ValidationError`] carrying the
    /// rule's code, default message, and parameters.
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Boolean view of [`validate`](Self::validate).
    fn is_valid(&self, input: &Self::Input) -> bool {
        self.validate(input).is_ok()
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}
