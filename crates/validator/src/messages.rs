//! Message templates and positional rendering
//!
//! Every rule has a default English template. Templates use positional
//! placeholders filled with the rule's parameters:
//!
//! - `{0}`, `{1}`, ... take the argument at that index;
//! - `{}` takes the next argument in sequence;
//! - `{{` and `}}` are literal braces;
//! - a placeholder with no matching argument is kept verbatim.
//!
//! [`MessageTemplates`] is plain serde data so callers can override any
//! subset of templates from their own configuration.
//!
//! ```
//! use fieldcheck::messages::{MessageTemplates, render};
//!
//! let templates: MessageTemplates =
//!     serde_json::from_str(r#"{ "in_range": "pick {0}..={1}" }"#).unwrap();
//!
//! assert_eq!(render(&templates.in_range, &[&1, &9]), "pick 1..=9");
//! assert_eq!(templates.not_empty, "can't be blank");
//! ```

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Built-in English templates.
pub mod defaults {
    /// Template for emptiness failures. No parameters.
    pub const NOT_EMPTY: &str = "can't be blank";
    /// Template for numeric range failures: `{0}` min, `{1}` max.
    pub const IN_RANGE: &str = "must be between {0} and {1}";
    /// Template for text length failures: `{0}` min, `{1}` max.
    pub const TEXT_LENGTH: &str = "string length must be between {0} and {1}";
    /// Template for pattern failures: `{0}` pattern source.
    pub const MATCHES: &str = "must match with pattern \"{0}\"";
    /// Template for equality failures: `{0}` expected value.
    pub const EQUAL: &str = "must be {0}";
    /// Template for membership failures: `{0}` allowed values.
    pub const CONTAINS: &str = "must be one of following values. {0}";
    /// Template for time range failures: `{0}` from, `{1}` to.
    pub const TIME_IN_RANGE: &str = "must be between {0} and {1}";
}

// ============================================================================
// TEMPLATES
// ============================================================================

/// One template per rule.
///
/// Missing keys fall back to [`defaults`] when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageTemplates {
    /// See [`defaults::NOT_EMPTY`].
    pub not_empty: String,
    /// See [`defaults::IN_RANGE`].
    pub in_range: String,
    /// See [`defaults::TEXT_LENGTH`].
    pub text_length: String,
    /// See [`defaults::MATCHES`].
    pub matches: String,
    /// See [`defaults::EQUAL`].
    pub equal: String,
    /// See [`defaults::CONTAINS`].
    pub contains: String,
    /// See [`defaults::TIME_IN_RANGE`].
    pub time_in_range: String,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            not_empty: defaults::NOT_EMPTY.to_owned(),
            in_range: defaults::IN_RANGE.to_owned(),
            text_length: defaults::TEXT_LENGTH.to_owned(),
            matches: defaults::MATCHES.to_owned(),
            equal: defaults::EQUAL.to_owned(),
            contains: defaults::CONTAINS.to_owned(),
            time_in_range: defaults::TIME_IN_RANGE.to_owned(),
        }
    }
}

// ============================================================================
// RENDERING
// ============================================================================

/// Substitutes positional placeholders in `template` with `args`.
///
/// Never fails: malformed or unmatched placeholders are copied through.
pub fn render(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut next_seq = 0;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }

        if tail.starts_with('}') {
            out.push('}');
            rest = &tail[1..];
            continue;
        }

        let Some(close) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };

        let placeholder = &tail[..=close];
        let inner = &tail[1..close];
        let index = if inner.is_empty() {
            let index = next_seq;
            next_seq += 1;
            Some(index)
        } else {
            inner.parse::<usize>().ok()
        };

        match index.and_then(|i| args.get(i)) {
            Some(arg) => out.push_str(&arg.to_string()),
            None => out.push_str(placeholder),
        }
        rest = &tail[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Displays a slice as `[a, b, c]`.
pub struct ListDisplay<'a, T>(pub &'a [T]);

impl<T: Display> Display for ListDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

/// Displays a value through its `Debug` form.
pub struct DebugDisplay<'a, T: ?Sized>(pub &'a T);

impl<T: fmt::Debug + ?Sized> Display for DebugDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("must be between {0} and {1}", "must be between 50 and 100")]
    #[case("between {} and {}", "between 50 and 100")]
    #[case("{1} is the max, {0} the min", "100 is the max, 50 the min")]
    #[case("{{literal}} {0}", "{literal} 50")]
    #[case("no placeholders", "no placeholders")]
    #[case("{2} stays", "{2} stays")]
    #[case("{name} stays", "{name} stays")]
    #[case("dangling {0", "dangling {0")]
    #[case("stray } brace", "stray } brace")]
    fn test_render(#[case] template: &str, #[case] expected: &str) {
        assert_eq!(render(template, &[&50, &100]), expected);
    }

    #[test]
    fn test_render_without_args() {
        assert_eq!(render(defaults::NOT_EMPTY, &[]), "can't be blank");
        assert_eq!(render("must be {0}", &[]), "must be {0}");
    }

    #[test]
    fn test_render_multibyte() {
        assert_eq!(render("\u{307b}{0}\u{3052}", &[&"-"]), "\u{307b}-\u{3052}");
    }

    #[test]
    fn test_list_display() {
        assert_eq!(ListDisplay(&["foo", "bar"]).to_string(), "[foo, bar]");
        assert_eq!(ListDisplay::<u8>(&[]).to_string(), "[]");
    }

    #[test]
    fn test_debug_display() {
        assert_eq!(DebugDisplay(&None::<i32>).to_string(), "None");
        assert_eq!(DebugDisplay(&Some("x")).to_string(), r#"Some("x")"#);
    }

    #[test]
    fn test_default_templates() {
        let templates = MessageTemplates::default();
        assert_eq!(templates.not_empty, defaults::NOT_EMPTY);
        assert_eq!(templates.time_in_range, defaults::TIME_IN_RANGE);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let templates: MessageTemplates =
            serde_json::from_str(r#"{ "not_empty": "is required" }"#).unwrap();
        assert_eq!(templates.not_empty, "is required");
        assert_eq!(templates.in_range, defaults::IN_RANGE);
    }
}
