//! Dynamically typed values
//!
//! [`Value`] is the closed tagged union for input whose shape is only known
//! at runtime (decoded request bodies, rows, config trees). Every variant
//! maps onto exactly one [`ValueKind`], and emptiness, equality, and display
//! are exhaustive matches over the variants.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::foundation::Emptiness;
use crate::messages::ListDisplay;

// ============================================================================
// VALUE
// ============================================================================

/// A runtime value of any supported shape.
///
/// # Examples
///
/// ```
/// use fieldcheck::{Value, is_empty};
///
/// let profile = Value::record([
///     ("name", Value::from("")),
///     ("age", Value::from(0)),
///     ("nickname", Value::from(None::<String>)),
/// ]);
/// assert!(is_empty(&profile));
///
/// let tags = Value::from(vec![""]);
/// assert!(!is_empty(&tags));
/// ```
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed integer of any width.
    Int(i64),
    /// Unsigned integer of any width.
    UInt(u64),
    /// Floating point of any width.
    Float(f64),
    /// Text.
    Text(String),
    /// Time instant.
    Time(DateTime<Utc>),
    /// Optional or indirect reference to another value.
    Optional(Option<Box<Value>>),
    /// Named fields in declaration order.
    Record(Vec<(String, Value)>),
    /// Ordered sequence.
    List(Vec<Value>),
    /// Key-value mapping.
    Map(BTreeMap<String, Value>),
    /// A value the toolkit cannot inspect, labelled for display.
    Opaque(String),
}

/// Classification of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `Null`.
    Absent,
    /// `Bool`.
    Boolean,
    /// `Int`, `UInt`, `Float`.
    Numeric,
    /// `Text`.
    Text,
    /// `Time`.
    Time,
    /// `Optional`.
    Optional,
    /// `Record`.
    Record,
    /// `List`, `Map`.
    Collection,
    /// `Opaque`.
    Other,
}

impl Value {
    /// Builds a record from `(name, value)` pairs, keeping their order.
    pub fn record<K, V, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Self::Record(
            fields
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Wraps `value` as a present optional reference.
    pub fn some(value: impl Into<Value>) -> Self {
        Self::Optional(Some(Box::new(value.into())))
    }

    /// An uninspectable value with a display label.
    pub fn opaque(label: impl Into<String>) -> Self {
        Self::Opaque(label.into())
    }

    /// Returns the kind of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Absent,
            Self::Bool(_) => ValueKind::Boolean,
            Self::Int(_) | Self::UInt(_) | Self::Float(_) => ValueKind::Numeric,
            Self::Text(_) => ValueKind::Text,
            Self::Time(_) => ValueKind::Time,
            Self::Optional(_) => ValueKind::Optional,
            Self::Record(_) => ValueKind::Record,
            Self::List(_) | Self::Map(_) => ValueKind::Collection,
            Self::Opaque(_) => ValueKind::Other,
        }
    }

    /// Returns `true` for [`Value::Null`].
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

// ============================================================================
// EMPTINESS
// ============================================================================

impl Emptiness for Value {
    fn is_empty_value(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !b,
            Self::Int(n) => *n == 0,
            Self::UInt(n) => *n == 0,
            Self::Float(n) => *n == 0.0,
            Self::Text(s) => s.is_empty(),
            Self::Time(t) => t.is_empty_value(),
            Self::Optional(inner) => inner.is_empty_value(),
            Self::Record(fields) => fields.iter().all(|(_, v)| v.is_empty_value()),
            Self::List(items) => items.is_empty(),
            Self::Map(entries) => entries.is_empty(),
            Self::Opaque(_) => false,
        }
    }
}

// ============================================================================
// EQUALITY
// ============================================================================

/// Deep structural equality.
///
/// Numeric variants are distinct (`Int(1) != UInt(1)`), `NaN` never equals
/// itself, and opaque values are never equal to anything.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::UInt(a), Self::UInt(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Time(a), Self::Time(b)) => a == b,
            (Self::Optional(a), Self::Optional(b)) => a == b,
            (Self::Record(a), Self::Record(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            _ => false,
        }
    }
}

// ============================================================================
// DISPLAY
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null | Self::Optional(None) => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Time(t) => f.write_str(&t.to_rfc3339()),
            Self::Optional(Some(inner)) => write!(f, "{inner}"),
            Self::Record(fields) => {
                f.write_str("{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                f.write_str("}")
            }
            Self::List(items) => write!(f, "{}", ListDisplay(items)),
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Self::Opaque(label) => write!(f, "<{label}>"),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! from_scalar {
    ($variant:ident($target:ty) <= $($src:ty),+ $(,)?) => {
        $(
            impl From<$src> for Value {
                #[inline]
                fn from(value: $src) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

from_scalar!(Bool(bool) <= bool);
from_scalar!(Int(i64) <= i8, i16, i32, i64);
from_scalar!(UInt(u64) <= u8, u16, u32, u64);
from_scalar!(Float(f64) <= f32, f64);
from_scalar!(Text(String) <= &str, String);
from_scalar!(Time(DateTime<Utc>) <= DateTime<Utc>);

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        Self::Optional(value.map(|v| Box::new(v.into())))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(entries: BTreeMap<String, T>) -> Self {
        Self::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::UInt(u)
                } else {
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Self::Text(s),
            Json::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Json::Object(fields) => {
                Self::Map(fields.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::is_empty;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind() {
        assert_eq!(Value::Null.kind(), ValueKind::Absent);
        assert_eq!(Value::from(1_u8).kind(), ValueKind::Numeric);
        assert_eq!(Value::from(1.5).kind(), ValueKind::Numeric);
        assert_eq!(Value::from("x").kind(), ValueKind::Text);
        assert_eq!(Value::from(Some(1)).kind(), ValueKind::Optional);
        assert_eq!(Value::from(vec![1]).kind(), ValueKind::Collection);
        assert_eq!(Value::record([("a", 1)]).kind(), ValueKind::Record);
        assert_eq!(Value::opaque("fn").kind(), ValueKind::Other);
    }

    #[test]
    fn test_empty_by_kind() {
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&Value::from(false)));
        assert!(is_empty(&Value::from(0_i8)));
        assert!(is_empty(&Value::from(0_u64)));
        assert!(is_empty(&Value::from(0.0_f32)));
        assert!(is_empty(&Value::from("")));
        assert!(is_empty(&Value::Time(DateTime::<Utc>::default())));
        assert!(is_empty(&Value::from(None::<i32>)));
        assert!(is_empty(&Value::some(Value::some(""))));
        assert!(is_empty(&Value::record(Vec::<(String, Value)>::new())));
        assert!(is_empty(&Value::List(Vec::new())));
        assert!(is_empty(&Value::Map(BTreeMap::new())));
    }

    #[test]
    fn test_not_empty_by_kind() {
        assert!(!is_empty(&Value::from(true)));
        assert!(!is_empty(&Value::from(-1)));
        assert!(!is_empty(&Value::from("hoge")));
        assert!(!is_empty(&Value::Time(Utc::now())));
        assert!(!is_empty(&Value::some(1)));
        assert!(!is_empty(&Value::from(vec![Value::Null])));
        assert!(!is_empty(&Value::opaque("channel")));
    }

    #[test]
    fn test_record_short_circuits_on_first_non_empty() {
        let record = Value::record([
            ("str", Value::from("hoge")),
            ("num", Value::from(0)),
        ]);
        assert!(!is_empty(&record));
    }

    #[test]
    fn test_equality() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Null, Value::from(false));
        assert_ne!(Value::from(1_i32), Value::from(1_u32));
        assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert_ne!(Value::opaque("f"), Value::opaque("f"));
        assert_eq!(
            Value::record([("name", "Taro"), ("city", "Tokyo")]),
            Value::record([("name", "Taro"), ("city", "Tokyo")]),
        );
        assert_ne!(
            Value::record([("name", "Taro")]),
            Value::record([("name", "Hanako")]),
        );
    }

    #[test]
    fn test_display() {
        let t = Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap();
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(vec![1, 2]).to_string(), "[1, 2]");
        assert_eq!(Value::record([("a", 1)]).to_string(), "{a: 1}");
        assert_eq!(Value::Time(t).to_string(), "2009-11-10T23:00:00+00:00");
        assert_eq!(Value::opaque("fn").to_string(), "<fn>");
    }

    #[test]
    fn test_from_json_preserves_emptiness() {
        use serde_json::json;

        for json in [
            json!(null),
            json!(0),
            json!(1),
            json!(-3),
            json!(0.0),
            json!(""),
            json!("x"),
            json!([]),
            json!([0]),
            json!({}),
            json!({"k": ""}),
            json!(u64::MAX),
        ] {
            let verdict = is_empty(&json);
            assert_eq!(is_empty(&Value::from(json)), verdict);
        }
    }
}
