//! # fieldcheck
//!
//! Field-level validation helpers: boolean predicates over ordinary values
//! and an [`Accumulator`] that turns failing checks into keyed,
//! human-readable messages.
//!
//! ## Quick Start
//!
//! ```
//! use fieldcheck::Accumulator;
//!
//! struct SignUp {
//!     name: String,
//!     age: u32,
//!     email: String,
//! }
//!
//! let form = SignUp { name: String::new(), age: 30, email: "taro@example.com".into() };
//!
//! let mut acc = Accumulator::new();
//! acc.not_empty(&form.name, "name", None);
//! acc.in_range(form.age, 50, 100, "age", None);
//! acc.matches(&form.email, r"^[^@\s]+@[^@\s]+$", "email", None);
//!
//! assert_eq!(acc.len(), 2);
//! assert_eq!(acc.error("name"), Some("can't be blank"));
//! assert_eq!(acc.error("age"), Some("must be between 50 and 100"));
//! ```
//!
//! ## Predicates
//!
//! Every check is available as a plain function returning `bool`:
//! [`is_empty`], [`is_not_empty`], [`in_range`], [`text_length_in_range`],
//! [`matches`], [`equal`], [`contains`], [`contains_value`], and
//! [`time_in_range`].
//!
//! Emptiness is decided by the [`Emptiness`](foundation::Emptiness) trait.
//! Derive it for your own records with
//! [`#[derive(Emptiness)]`](derive@Emptiness), which covers every field, and
//! mark handle-like types as never empty with [`impl_emptiness!`].
//!
//! ## Rule objects
//!
//! The [`validators`] module wraps each predicate in a reusable value
//! implementing [`Validate`](foundation::Validate). Declare new ones with
//! the [`validator!`] macro.
//!
//! ## Dynamic values
//!
//! [`Value`] models loosely typed input such as decoded JSON, with the same
//! emptiness and equality semantics.

// ValidationError is returned by value from every rule object.
#![allow(clippy::result_large_err)]

// Lets derive output name `::fieldcheck` from inside this crate too.
extern crate self as fieldcheck;

pub mod accumulator;
pub mod error;
pub mod foundation;
mod macros;
pub mod messages;
pub mod prelude;
pub mod validators;
pub mod value;

pub use accumulator::Accumulator;
pub use error::{Error, Result};
pub use fieldcheck_macros::Emptiness;
pub use foundation::{is_empty, is_not_empty};
pub use messages::MessageTemplates;
pub use validators::{
    contains, contains_value, equal, in_range, matches, text_length_in_range, time_in_range,
    try_matches,
};
pub use value::{Value, ValueKind};
