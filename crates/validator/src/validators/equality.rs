//! Equality

use std::fmt::Display;

use crate::foundation::ValidationError;
use crate::messages::{defaults, render};

/// Returns `true` if `value` deeply equals `expected`.
///
/// Equality is the types' own `PartialEq`, which is structural for std
/// containers, `Option`, tuples, derived records, and [`Value`](crate::Value).
/// Two absent values are equal; absent never equals a present value.
///
/// # Examples
///
/// ```
/// use fieldcheck::{Value, equal};
///
/// assert!(equal(&None::<bool>, &None));
/// assert!(!equal(&None::<bool>, &Some(false)));
/// assert!(equal(&Value::Null, &Value::Null));
/// assert!(!equal(&Value::Null, &Value::Bool(false)));
/// assert!(equal("abc", &String::from("abc")));
/// ```
#[inline]
pub fn equal<A, B>(value: &A, expected: &B) -> bool
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    value == expected
}

crate::validator! {
    /// Validates that a value equals an expected value.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub EqualTo<T: PartialEq + Display> { expected: T } for T;
    rule(self, input) { equal(input, &self.expected) }
    error(self, input) {
        ValidationError::new("equal", render(defaults::EQUAL, &[&self.expected]))
            .with_param("expected", self.expected.to_string())
    }
    fn equal_to(expected: T);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;
    use crate::foundation::Validate;

    #[derive(Debug, PartialEq)]
    struct Person {
        name: &'static str,
        age: u32,
    }

    #[test]
    fn test_absent_values() {
        assert!(equal(&None::<i32>, &None));
        assert!(!equal(&None::<i32>, &Some(0)));
        assert!(equal(&Value::Null, &Value::Null));
        assert!(!equal(&Value::Null, &Value::from(false)));
    }

    #[test]
    fn test_structural_equality() {
        let taro = Person { name: "Taro", age: 33 };
        assert!(equal(&taro, &Person { name: "Taro", age: 33 }));
        assert!(!equal(&taro, &Person { name: "Taro", age: 34 }));
        assert!(equal(&vec![1_u8, 2, 3], &vec![1_u8, 2, 3]));
        assert!(!equal(&vec![1_u8, 2, 3], &vec![3_u8, 2, 1]));
        assert!(equal(&Box::new(taro), &Box::new(Person { name: "Taro", age: 33 })));
    }

    #[test]
    fn test_cross_type_equality() {
        assert!(equal("abc", &String::from("abc")));
        assert!(equal(&String::from("abc"), "abc"));
    }

    #[test]
    fn test_equal_to_rule() {
        let rule = equal_to(String::from("admin"));
        assert!(rule.validate(&String::from("admin")).is_ok());

        let error = rule.validate(&String::from("guest")).unwrap_err();
        assert_eq!(error.code, "equal");
        assert_eq!(error.message, "must be admin");
    }
}
