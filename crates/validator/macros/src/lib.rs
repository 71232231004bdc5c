//! # fieldcheck-macros
//!
//! Derive macros for `fieldcheck`. Use them through the re-exports in
//! `fieldcheck` or `fieldcheck::prelude`, not from this crate directly.
//!
//! | Macro | Description |
//! |-------|-------------|
//! | [`Emptiness`](derive@Emptiness) | Implements `Emptiness` over every field of a struct |

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod diag;
mod emptiness;

/// Derive macro for the `Emptiness` trait.
///
/// The struct is empty iff every one of its fields is empty. Fields are
/// checked in declaration order and the check stops at the first non-empty
/// one. A struct with no fields is empty.
///
/// Works on structs with named fields, tuple structs, and unit structs.
/// Every field type must implement `Emptiness`; generic parameters get the
/// bound through the generated `where` clause.
///
/// # Example
///
/// ```ignore
/// use fieldcheck::{Emptiness, is_empty};
///
/// #[derive(Emptiness)]
/// struct Address {
///     street: String,
///     zip: Option<u32>,
/// }
///
/// assert!(is_empty(&Address { street: String::new(), zip: None }));
/// assert!(!is_empty(&Address { street: String::new(), zip: Some(1) }));
/// ```
#[proc_macro_derive(Emptiness)]
pub fn derive_emptiness(input: TokenStream) -> TokenStream {
    emptiness::derive(input)
}
