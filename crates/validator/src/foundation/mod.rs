//! Core validation types and traits
//!
//! This module contains the building blocks the rest of the crate is made of:
//!
//! - **Emptiness**: the [`Emptiness`] trait and the [`is_empty`] / [`is_not_empty`]
//!   predicates
//! - **Rule objects**: the [`Validate`] trait
//! - **Errors**: [`ValidationError`]
//!
//! # Examples
//!
//! ```
//! use fieldcheck::foundation::{Validate, is_empty};
//! use fieldcheck::validators::range;
//!
//! assert!(is_empty(&(String::new(), 0_u32)));
//! assert!(range(1, 10).validate(&5).is_ok());
//! ```

pub mod emptiness;
pub mod error;
pub mod traits;

pub use emptiness::{Emptiness, is_empty, is_not_empty};
pub use error::ValidationError;
pub use traits::Validate;
