//! Membership
//!
//! A value is a member of a collection when it deeply equals at least one
//! element. Element types must match: `1_i64` is not a member of `[1.0]`.

use std::borrow::Borrow;
use std::fmt::Display;

use crate::Value;
use crate::foundation::ValidationError;
use crate::messages::{ListDisplay, defaults, render};

/// Returns `true` if `value` equals any element of `collection`.
///
/// Accepts owned or borrowed collections alike; an empty collection contains
/// nothing.
///
/// # Examples
///
/// ```
/// use fieldcheck::contains;
///
/// assert!(contains("foo", ["foo", "bar"]));
/// assert!(!contains("baz", ["foo", "bar"]));
/// assert!(contains(&3_i32, &vec![1, 2, 3]));
/// assert!(!contains(&1_i32, Vec::<i32>::new()));
/// ```
pub fn contains<T, I>(value: &T, collection: I) -> bool
where
    T: PartialEq + ?Sized,
    I: IntoIterator,
    I::Item: Borrow<T>,
{
    collection.into_iter().any(|item| item.borrow() == value)
}

/// Dynamic counterpart of [`contains`].
///
/// Only a [`Value::List`] has members; any other `collection` kind yields
/// `false`.
///
/// # Examples
///
/// ```
/// use fieldcheck::{Value, contains_value};
///
/// let allowed = Value::from(vec!["foo", "bar"]);
/// assert!(contains_value(&Value::from("foo"), &allowed));
/// assert!(!contains_value(&Value::from("foo"), &Value::from("foo")));
/// ```
pub fn contains_value(value: &Value, collection: &Value) -> bool {
    match collection {
        Value::List(items) => contains(value, items),
        _ => false,
    }
}

crate::validator! {
    /// Validates that a value is one of an allowed set.
    #[derive(PartialEq, Eq, Hash)]
    pub OneOf<T: PartialEq + Display> { allowed: Vec<T> } for T;
    rule(self, input) { contains(input, &self.allowed) }
    error(self, input) {
        ValidationError::new(
            "contains",
            render(defaults::CONTAINS, &[&ListDisplay(&self.allowed)]),
        )
        .with_param("allowed", ListDisplay(&self.allowed).to_string())
    }
    fn one_of(allowed: Vec<T>);
}

// ============================================================================
// TESTS
// ============================================================================
