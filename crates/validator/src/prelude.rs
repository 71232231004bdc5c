//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck::prelude::*;` import that brings in the
//! accumulator, the core traits and derive, every predicate, and every rule
//! factory.
//!
//! # Examples
//!
//! ```
//! use fieldcheck::prelude::*;
//!
//! let mut acc = Accumulator::new();
//! acc.validate(&length(3, 20), "al", "username", None);
//!
//! assert!(acc.has_errors());
//! assert!(is_not_empty(acc.errors()));
//! assert!(range(18, 100).is_valid(&42));
//! ```

// ============================================================================
// FOUNDATION: Core traits and errors
// ============================================================================

pub use crate::foundation::{Emptiness, Validate, ValidationError, is_empty, is_not_empty};
pub use fieldcheck_macros::Emptiness;

// ============================================================================
// ACCUMULATION AND MESSAGES
// ============================================================================

pub use crate::accumulator::Accumulator;
pub use crate::messages::{MessageTemplates, render};

// ============================================================================
// VALIDATORS: Predicates, rule objects, and factories
// ============================================================================

pub use crate::validators::*;

// ============================================================================
// DYNAMIC VALUES
// ============================================================================

pub use crate::value::{Value, ValueKind};

pub use crate::{impl_emptiness, validator};
