//! Keyed error accumulation
//!
//! An [`Accumulator`] runs checks and records one human-readable message per
//! failing key. Every check returns its verdict, so results can be combined
//! with ordinary boolean logic while the accumulator keeps the messages.
//!
//! A later failure on the same key replaces the earlier message; a later
//! success leaves it in place.
//!
//! ```
//! use fieldcheck::Accumulator;
//!
//! let mut acc = Accumulator::new();
//! acc.not_empty("Taro", "name", None);
//! acc.in_range(30, 50, 100, "age", None);
//!
//! assert!(acc.has_errors());
//! assert_eq!(acc.error("age"), Some("must be between 50 and 100"));
//! assert_eq!(acc.error("name"), None);
//! ```

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::sync::Arc;

use chrono::{DateTime, TimeZone};
use tracing::{debug, trace};

use crate::foundation::{Emptiness, Validate};
use crate::messages::{DebugDisplay, ListDisplay, MessageTemplates, render};
use crate::validators::{self, Pattern};

/// Collects keyed validation messages across many checks.
///
/// Rule methods take an optional custom `message`. When it is `None` the
/// rule's template from the accumulator's [`MessageTemplates`] is used. Either
/// way the text is rendered with the rule's parameters, so a custom message
/// may use `{0}`, `{1}` too.
#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    errors: HashMap<String, String>,
    messages: Arc<MessageTemplates>,
}

impl Accumulator {
    /// Creates an accumulator with the built-in English templates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an accumulator with custom templates.
    ///
    /// ```
    /// use fieldcheck::{Accumulator, MessageTemplates};
    ///
    /// let templates = MessageTemplates {
    ///     not_empty: "is required".to_owned(),
    ///     ..MessageTemplates::default()
    /// };
    /// let mut acc = Accumulator::with_messages(templates);
    /// acc.not_empty("", "email", None);
    /// assert_eq!(acc.error("email"), Some("is required"));
    /// ```
    #[must_use]
    pub fn with_messages(messages: impl Into<Arc<MessageTemplates>>) -> Self {
        Self {
            errors: HashMap::new(),
            messages: messages.into(),
        }
    }

    /// Templates used for rules called without a custom message.
    #[must_use]
    pub fn messages(&self) -> &MessageTemplates {
        &self.messages
    }

    // ========================================================================
    // RULES
    // ========================================================================

    /// Fails when `value` is empty per [`Emptiness`].
    pub fn not_empty<T: Emptiness + ?Sized>(
        &mut self,
        value: &T,
        key: &str,
        message: Option<&str>,
    ) -> bool {
        let valid = !value.is_empty_value();
        self.report(valid, key, message, |m| m.not_empty.as_str(), &[])
    }

    /// Fails unless `min <= value <= max`.
    pub fn in_range<T: PartialOrd + Display>(
        &mut self,
        value: T,
        min: T,
        max: T,
        key: &str,
        message: Option<&str>,
    ) -> bool {
        let valid = validators::in_range(&value, &min, &max);
        self.report(valid, key, message, |m| m.in_range.as_str(), &[&min, &max])
    }

    /// Fails unless the character count of `text` is within `min..=max`.
    pub fn text_length(
        &mut self,
        text: &str,
        min: usize,
        max: usize,
        key: &str,
        message: Option<&str>,
    ) -> bool {
        let valid = validators::text_length_in_range(text, min, max);
        self.report(valid, key, message, |m| m.text_length.as_str(), &[&min, &max])
    }

    /// Fails unless `pattern` matches somewhere in `text`.
    ///
    /// # Panics
    ///
    /// If `pattern` is text that is not a valid regular expression.
    pub fn matches<P: Pattern + ?Sized>(
        &mut self,
        text: &str,
        pattern: &P,
        key: &str,
        message: Option<&str>,
    ) -> bool {
        let valid = validators::matches(text, pattern);
        self.report(valid, key, message, |m| m.matches.as_str(), &[&pattern.as_str()])
    }

    /// Fails unless `value` equals `expected`.
    pub fn equal<A, B>(&mut self, value: &A, expected: &B, key: &str, message: Option<&str>) -> bool
    where
        A: PartialEq<B> + ?Sized,
        B: Display + ?Sized,
    {
        let valid = validators::equal(value, expected);
        self.report(valid, key, message, |m| m.equal.as_str(), &[&expected])
    }

    /// Like [`equal`](Self::equal), for expected values that only implement
    /// `Debug`, such as `Option`. The message shows `expected` in its `Debug`
    /// form.
    ///
    /// ```
    /// use fieldcheck::Accumulator;
    ///
    /// let mut acc = Accumulator::new();
    /// assert!(acc.equal_debug(&None::<i32>, &None, "parent", None));
    /// assert!(!acc.equal_debug(&Some(3), &None, "parent", None));
    /// assert_eq!(acc.error("parent"), Some("must be None"));
    /// ```
    pub fn equal_debug<A, B>(&mut self, value: &A, expected: &B, key: &str, message: Option<&str>) -> bool
    where
        A: PartialEq<B> + ?Sized,
        B: Debug + ?Sized,
    {
        let valid = validators::equal(value, expected);
        self.report(valid, key, message, |m| m.equal.as_str(), &[&DebugDisplay(expected)])
    }

    /// Fails unless `value` equals one of `allowed`.
    ///
    /// ```
    /// use fieldcheck::Accumulator;
    ///
    /// let mut acc = Accumulator::new();
    /// acc.contains("hoge", &["foo", "bar"], "kind", None);
    /// assert_eq!(acc.error("kind"), Some("must be one of following values. [foo, bar]"));
    /// ```
    pub fn contains<Q, T>(&mut self, value: &Q, allowed: &[T], key: &str, message: Option<&str>) -> bool
    where
        Q: PartialEq + ?Sized,
        T: Borrow<Q> + Display,
    {
        let valid = validators::contains(value, allowed.iter().map(<T as Borrow<Q>>::borrow));
        self.report(valid, key, message, |m| m.contains.as_str(), &[&ListDisplay(allowed)])
    }

    /// Fails unless `from <= instant <= to`.
    pub fn time_in_range<Tz, Tf, Tt>(
        &mut self,
        instant: &DateTime<Tz>,
        from: &DateTime<Tf>,
        to: &DateTime<Tt>,
        key: &str,
        message: Option<&str>,
    ) -> bool
    where
        Tz: TimeZone,
        Tf: TimeZone,
        Tt: TimeZone,
        Tf::Offset: Display,
        Tt::Offset: Display,
    {
        let valid = validators::time_in_range(instant, from, to);
        self.report(valid, key, message, |m| m.time_in_range.as_str(), &[from as &dyn Display, to])
    }

    /// Runs a rule object and records its message on failure.
    ///
    /// A custom `message` is rendered with the rule's parameter values in
    /// order; without one the rule's own message is recorded.
    ///
    /// ```
    /// use fieldcheck::Accumulator;
    /// use fieldcheck::validators::length;
    ///
    /// let mut acc = Accumulator::new();
    /// acc.validate(&length(3, 20), "al", "username", Some("{0} to {1} characters"));
    /// assert_eq!(acc.error("username"), Some("3 to 20 characters"));
    /// ```
    pub fn validate<V: Validate>(
        &mut self,
        validator: &V,
        input: &V::Input,
        key: &str,
        message: Option<&str>,
    ) -> bool {
        let Err(error) = validator.validate(input) else {
            return true;
        };

        let text = match message {
            Some(template) => {
                let values: Vec<&str> = error.param_values().collect();
                let args: Vec<&dyn Display> = values.iter().map(|v| v as &dyn Display).collect();
                render(template, &args)
            }
            None => error.message.into_owned(),
        };
        self.set_error_if(true, key, text);
        false
    }

    // ========================================================================
    // PRIMITIVES
    // ========================================================================

    /// Records `message` at `key` when `condition` is true.
    ///
    /// Returns `condition` unchanged.
    pub fn set_error_if(&mut self, condition: bool, key: &str, message: impl Into<String>) -> bool {
        if condition {
            self.add_error(key, message);
        }
        condition
    }

    /// Records `message` at `key`, replacing any earlier message.
    pub fn add_error(&mut self, key: &str, message: impl Into<String>) {
        let message = message.into();
        debug!(field = key, message = %message, "validation failed");

        if let Some(previous) = self.errors.insert(key.to_owned(), message) {
            trace!(field = key, previous = %previous, "replaced earlier message");
        }
    }

    /// Runs a custom predicate, recording `message` when it returns `false`.
    pub fn check(&mut self, key: &str, message: &str, f: impl FnOnce() -> bool) -> bool {
        let valid = f();
        self.set_error_if(!valid, key, message);
        valid
    }

    /// Runs a custom predicate that validates with its own accumulator.
    ///
    /// `f` receives a fresh accumulator sharing this one's templates. Only its
    /// return value matters: messages it records are dropped, and `message`
    /// is recorded at `key` when it returns `false`.
    ///
    /// ```
    /// use fieldcheck::Accumulator;
    ///
    /// let mut acc = Accumulator::new();
    /// let ok = acc.check_nested("address", "is invalid", |inner| {
    ///     inner.not_empty("", "street", None)
    /// });
    ///
    /// assert!(!ok);
    /// assert_eq!(acc.error("address"), Some("is invalid"));
    /// assert_eq!(acc.error("street"), None);
    /// ```
    pub fn check_nested(
        &mut self,
        key: &str,
        message: &str,
        f: impl FnOnce(&mut Accumulator) -> bool,
    ) -> bool {
        let mut inner = Self::with_messages(Arc::clone(&self.messages));
        let valid = f(&mut inner);

        if inner.has_errors() {
            debug!(
                field = key,
                discarded = inner.len(),
                "discarding messages from nested validation"
            );
        }

        self.set_error_if(!valid, key, message);
        valid
    }

    // ========================================================================
    // RESULTS
    // ========================================================================

    /// Returns `true` if any key has a message.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// All recorded messages by key.
    #[must_use]
    pub fn errors(&self) -> &HashMap<String, String> {
        &self.errors
    }

    /// The message recorded at `key`, if any.
    #[must_use]
    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }

    /// Number of keys with a message.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns `true` if no key has a message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consumes the accumulator, returning the messages by key.
    #[must_use]
    pub fn into_errors(self) -> HashMap<String, String> {
        self.errors
    }

    fn report(
        &mut self,
        valid: bool,
        key: &str,
        message: Option<&str>,
        template: fn(&MessageTemplates) -> &str,
        args: &[&dyn Display],
    ) -> bool {
        let text = if valid {
            String::new()
        } else {
            render(message.unwrap_or_else(|| template(&self.messages)), args)
        };
        !self.set_error_if(!valid, key, text)
    }
}

// ============================================================================
// TESTS
// ============================================================================
