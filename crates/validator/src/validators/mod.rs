//! Built-in predicates and rule objects
//!
//! Each module pairs a free predicate returning `bool` with a rule object
//! implementing [`Validate`](crate::foundation::Validate):
//!
//! | predicate | rule | factory |
//! |---|---|---|
//! | [`is_not_empty`](crate::is_not_empty) | [`NotEmpty`] | [`not_empty`] |
//! | [`in_range`] | [`InRange`] | [`range`] |
//! | [`text_length_in_range`] | [`TextLength`] | [`length`] |
//! | [`matches`] | [`Matches`] | [`matching`] |
//! | [`equal`] | [`EqualTo`] | [`equal_to`] |
//! | [`contains`] | [`OneOf`] | [`one_of`] |
//! | [`time_in_range`] | [`TimeRange`] | [`between`] |
//!
//! # Examples
//!
//! ```
//! use fieldcheck::foundation::Validate;
//! use fieldcheck::validators::{length, one_of, range};
//!
//! assert!(range(18, 100).is_valid(&42));
//! assert!(length(3, 20).is_valid("alice"));
//! assert!(!one_of(vec!["admin", "user"]).is_valid(&"root"));
//! ```

pub mod emptiness;
pub mod equality;
pub mod length;
pub mod membership;
pub mod pattern;
pub mod range;
pub mod time;

pub use emptiness::{NotEmpty, not_empty};
pub use equality::{EqualTo, equal, equal_to};
pub use length::{TextLength, length, text_length_in_range};
pub use membership::{OneOf, contains, contains_value, one_of};
pub use pattern::{Matches, Pattern, compile_pattern, matches, matching, try_matches};
pub use range::{InRange, in_range, range};
pub use time::{TimeRange, between, time_in_range};
