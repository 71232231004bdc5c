//! Kind-driven emptiness
//!
//! A value is *empty* when it holds no meaningful data. The verdict depends
//! only on the value's kind:
//!
//! | kind | empty when |
//! |---|---|
//! | absent (`None`, null) | always |
//! | boolean | `false` |
//! | text | zero length |
//! | numeric scalar | equal to zero |
//! | time instant | equal to the type's zero instant (the Unix epoch, see below) |
//! | optional / indirect | absent, or the referent is empty |
//! | record (tuple, `#[derive(Emptiness)]`) | every field is empty |
//! | collection | zero elements (contents are not inspected) |
//! | opaque (`impl_emptiness!(opaque ..)`) | never |
//!
//! Time instants use the Unix epoch as their zero: `SystemTime::UNIX_EPOCH`
//! and chrono's `Default` values. A genuine `1970-01-01T00:00:00Z` timestamp
//! is therefore empty. When the epoch is a meaningful value, check presence
//! another way (`Option::is_some` through `Accumulator::check`), or wrap the
//! timestamp in a newtype declared with `impl_emptiness!(opaque ..)`.
//!
//! Dispatch is closed: a type without an [`Emptiness`] impl is rejected at
//! compile time instead of silently classified as "other".

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Types whose emptiness can be decided without caller-supplied logic.
///
/// Derive it for your own records with [`#[derive(Emptiness)]`](derive@crate::Emptiness).
/// Opaque types use [`impl_emptiness!`](crate::impl_emptiness).
pub trait Emptiness {
    /// Returns `true` if the value holds no meaningful data.
    fn is_empty_value(&self) -> bool;
}

/// Returns `true` if `value` is empty according to its kind.
///
/// # Examples
///
/// ```
/// use fieldcheck::is_empty;
///
/// assert!(is_empty(&0_u8));
/// assert!(is_empty(""));
/// assert!(is_empty(&None::<String>));
/// assert!(is_empty(&Some(Box::new(0.0_f64))));
/// assert!(is_empty(&("", 0, false)));
///
/// // collections are judged by cardinality only
/// assert!(!is_empty(&vec![""]));
/// ```
#[inline]
pub fn is_empty<T: Emptiness + ?Sized>(value: &T) -> bool {
    value.is_empty_value()
}

/// Negation of [`is_empty`].
#[inline]
pub fn is_not_empty<T: Emptiness + ?Sized>(value: &T) -> bool {
    !value.is_empty_value()
}

// ============================================================================
// SCALARS
// ============================================================================

macro_rules! zero_is_empty {
    ($zero:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Emptiness for $ty {
                #[inline]
                fn is_empty_value(&self) -> bool {
                    *self == $zero
                }
            }
        )+
    };
}

zero_is_empty!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
// -0.0 compares equal to 0.0; NaN is never empty.
zero_is_empty!(0.0 => f32, f64);
zero_is_empty!('\0' => char);
zero_is_empty!(Duration::ZERO => Duration);

impl Emptiness for bool {
    #[inline]
    fn is_empty_value(&self) -> bool {
        !*self
    }
}

// ============================================================================
// TEXT
// ============================================================================

impl Emptiness for str {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl Emptiness for String {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

// ============================================================================
// TIME INSTANTS
// ============================================================================

impl Emptiness for SystemTime {
    fn is_empty_value(&self) -> bool {
        *self == SystemTime::UNIX_EPOCH
    }
}

/// Empty at chrono's `Default`, the Unix epoch, in any offset.
///
/// `1970-01-01T00:00:00Z` cannot be told apart from "unset": it is empty.
impl<Tz: TimeZone> Emptiness for DateTime<Tz> {
    fn is_empty_value(&self) -> bool {
        self.naive_utc() == NaiveDateTime::default()
    }
}

impl Emptiness for NaiveDateTime {
    fn is_empty_value(&self) -> bool {
        *self == Self::default()
    }
}

impl Emptiness for NaiveDate {
    fn is_empty_value(&self) -> bool {
        *self == Self::default()
    }
}

// ============================================================================
// OPTIONAL AND INDIRECT
// ============================================================================

impl<T: Emptiness> Emptiness for Option<T> {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.as_ref().is_none_or(Emptiness::is_empty_value)
    }
}

macro_rules! deref_is_transparent {
    ($($ptr:ty),+ $(,)?) => {
        $(
            impl<T: Emptiness + ?Sized> Emptiness for $ptr {
                #[inline]
                fn is_empty_value(&self) -> bool {
                    (**self).is_empty_value()
                }
            }
        )+
    };
}

deref_is_transparent!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<B> Emptiness for Cow<'_, B>
where
    B: ToOwned + Emptiness + ?Sized,
{
    #[inline]
    fn is_empty_value(&self) -> bool {
        (**self).is_empty_value()
    }
}

// ============================================================================
// COLLECTIONS (cardinality only)
// ============================================================================

impl<T> Emptiness for [T] {
    #[inline]
    fn is_empty_value(&self) -> bool {
        self.is_empty()
    }
}

impl<T, const N: usize> Emptiness for [T; N] {
    #[inline]
    fn is_empty_value(&self) -> bool {
        N == 0
    }
}

macro_rules! len_is_emptiness {
    ($(<$($gen:ident),+> $coll:ty),+ $(,)?) => {
        $(
            impl<$($gen),+> Emptiness for $coll {
                #[inline]
                fn is_empty_value(&self) -> bool {
                    self.is_empty()
                }
            }
        )+
    };
}

len_is_emptiness!(
    <T> Vec<T>,
    <T> VecDeque<T>,
    <T> LinkedList<T>,
    <T> BinaryHeap<T>,
    <T> BTreeSet<T>,
    <K, V> BTreeMap<K, V>,
    <T, S> HashSet<T, S>,
    <K, V, S> HashMap<K, V, S>,
);

// ============================================================================
// RECORDS
// ============================================================================

impl Emptiness for () {
    #[inline]
    fn is_empty_value(&self) -> bool {
        true
    }
}

macro_rules! tuple_is_record {
    ($(($($name:ident : $idx:tt),+)),+ $(,)?) => {
        $(
            impl<$($name: Emptiness),+> Emptiness for ($($name,)+) {
                #[inline]
                fn is_empty_value(&self) -> bool {
                    $(self.$idx.is_empty_value())&&+
                }
            }
        )+
    };
}

tuple_is_record!(
    (A: 0),
    (A: 0, B: 1),
    (A: 0, B: 1, C: 2),
    (A: 0, B: 1, C: 2, D: 3),
    (A: 0, B: 1, C: 2, D: 3, E: 4),
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5),
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6),
    (A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7),
);

// ============================================================================
// JSON
// ============================================================================

impl Emptiness for serde_json::Value {
    fn is_empty_value(&self) -> bool {
        use serde_json::Value as Json;

        match self {
            Json::Null => true,
            Json::Bool(b) => !b,
            Json::Number(n) => n.as_f64() == Some(0.0),
            Json::String(s) => s.is_empty(),
            Json::Array(items) => items.is_empty(),
            Json::Object(fields) => fields.is_empty(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
