//! Macros for declaring rule objects and opaque emptiness impls.
//!
//! # Available Macros
//!
//! - [`validator!`] - Create a rule object (struct + `Validate` impl + factory fn)
//! - [`impl_emptiness!`] - Implement `Emptiness` for opaque types
//!
//! Records derive `Emptiness` with [`#[derive(Emptiness)]`](derive@crate::Emptiness).
//!
//! # Examples
//!
//! ```
//! use fieldcheck::{Emptiness, is_empty};
//!
//! #[derive(Emptiness)]
//! struct Address {
//!     street: String,
//!     zip: Option<u32>,
//! }
//!
//! let blank = Address { street: String::new(), zip: None };
//! assert!(is_empty(&blank));
//! assert!(!is_empty(&Address { street: String::new(), zip: Some(1000) }));
//! ```

// ============================================================================
// VALIDATOR MACRO
// ============================================================================

/// Creates a rule object: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub TextLength { min: usize, max: usize } for str;
///     rule(self, input) { text_length_in_range(input, self.min, self.max) }
///     error(self, input) { ValidationError::new("text_length", "out of bounds") }
///     fn length(min: usize, max: usize);
/// }
/// ```
///
/// **Fallible constructor** (the type after `->` is the constructor's error):
/// ```rust,ignore
/// validator! {
///     pub Matches { pattern: Regex } for str;
///     rule(self, input) { self.pattern.is_match(input) }
///     error(self, input) { ValidationError::new("matches", "no match") }
///     new(pattern: &str) -> Error { Ok(Self { pattern: compile_pattern(pattern)? }) }
///     fn matching(pattern: &str) -> Error;
/// }
/// ```
///
/// **Generic validator** (bounds must be plain identifiers in scope):
/// ```rust,ignore
/// validator! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub InRange<T: PartialOrd + Display + Copy> { min: T, max: T } for T;
///     rule(self, input) { in_range(*input, self.min, self.max) }
///     error(self, input) { ValidationError::new("in_range", "out of range") }
///     fn range(min: T, max: T);
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Struct with fields + fallible new + fallible factory ─────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Generic struct + auto new + factory fn ───────────────────────────
    //
    // Supports a single generic type parameter with one or more trait bounds.
    // Bounds must be simple identifiers (use imports for paths).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $name<$gen> {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Validate for $name<$gen> {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        #[must_use]
        $vis fn $factory<$gen: $first_bound $(+ $rest_bound)*>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };
}

// ============================================================================
// EMPTINESS MACRO
// ============================================================================

/// Implements [`Emptiness`](crate::foundation::Emptiness) as "never empty".
///
/// Use it for handles, callbacks, channels, and other values with no
/// meaningful "zero". Records get their impl from
/// [`#[derive(Emptiness)]`](derive@crate::Emptiness) instead, which always
/// covers every field.
///
/// # Examples
///
/// ```
/// use fieldcheck::{impl_emptiness, is_empty};
///
/// struct Connection;
/// struct Callback(fn());
///
/// impl_emptiness!(opaque Connection, Callback);
///
/// assert!(!is_empty(&Connection));
/// assert!(!is_empty(&Some(Connection)));
/// ```
#[macro_export]
macro_rules! impl_emptiness {
    (opaque $($name:ty),+ $(,)?) => {
        $(
            impl $crate::foundation::Emptiness for $name {
                #[inline]
                fn is_empty_value(&self) -> bool {
                    false
                }
            }
        )+
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{Validate, ValidationError, is_empty};

    crate::validator! {
        #[derive(Copy, PartialEq, Eq)]
        Multiple { of: u32 } for u32;
        rule(self, input) { *input % self.of == 0 }
        error(self, input) {
            ValidationError::new("multiple", format!("{input} is not a multiple of {}", self.of))
        }
        fn multiple_of(of: u32);
    }

    #[derive(Default, crate::Emptiness)]
    struct Inner {
        label: String,
    }

    #[derive(crate::Emptiness)]
    struct Outer {
        inner: Inner,
        items: Vec<u8>,
        flag: Option<bool>,
    }

    #[derive(crate::Emptiness)]
    struct Unit;

    #[derive(crate::Emptiness)]
    struct Pair(u8, &'static str);

    #[derive(crate::Emptiness)]
    struct Wrapper<T> {
        value: T,
        note: &'static str,
    }

    struct Socket;

    crate::impl_emptiness!(opaque Socket);

    #[test]
    fn test_generated_validator() {
        let rule = multiple_of(3);
        assert!(rule.validate(&9).is_ok());
        let error = rule.validate(&10).unwrap_err();
        assert_eq!(error.code, "multiple");
        assert_eq!(error.message, "10 is not a multiple of 3");
    }

    #[test]
    fn test_derived_record_is_recursive() {
        let blank = Outer {
            inner: Inner::default(),
            items: Vec::new(),
            flag: Some(false),
        };
        assert!(is_empty(&blank));
        assert!(is_empty(&Box::new(blank)));

        let named = Outer {
            inner: Inner { label: "x".into() },
            items: Vec::new(),
            flag: None,
        };
        assert!(!is_empty(&named));
    }

    #[test]
    fn test_derived_record_checks_last_field() {
        let flagged = Outer {
            inner: Inner::default(),
            items: Vec::new(),
            flag: Some(true),
        };
        assert!(!is_empty(&flagged));
    }

    #[test]
    fn test_fieldless_record_is_empty() {
        assert!(is_empty(&Unit));
    }

    #[test]
    fn test_derived_tuple_struct() {
        assert!(is_empty(&Pair(0, "")));
        assert!(!is_empty(&Pair(0, "x")));
        assert!(!is_empty(&Pair(1, "")));
    }

    #[test]
    fn test_derived_generic_record() {
        assert!(is_empty(&Wrapper { value: 0_u64, note: "" }));
        assert!(!is_empty(&Wrapper { value: vec![()], note: "" }));
        assert!(!is_empty(&Wrapper { value: None::<u8>, note: "set" }));
    }

    #[test]
    fn test_opaque_is_never_empty() {
        assert!(!is_empty(&Socket));
        assert!(!is_empty(&Wrapper { value: Socket, note: "" }));
    }
}
