//! String schemas.
//!
//! [`StringSchema`] forges string values with length bounds, regex patterns,
//! an email shape check and custom `&str` predicates.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::modal::{NonNull, Nullability, Presence, Required, Sealed};
use super::typed::{Kind, TypedSchema};
use crate::check::{Check, CheckConfig};

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Guard for string values.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringKind;

impl Sealed for StringKind {}

impl Kind for StringKind {
    const NAME: &'static str = "string";

    fn accepts(value: &Value) -> bool {
        value.is_string()
    }
}

/// A schema for string values.
///
/// # Example
///
/// ```rust
/// use forgeval::Schema;
/// use serde_json::json;
///
/// let schema = Schema::string()
///     .min_len(3)
///     .max_len(20)
///     .pattern(r"^[a-z]+$")
///     .unwrap();
///
/// assert!(schema.forge(&json!("forge")).is_success());
///
/// // The chain stops at the first failing check.
/// let issues = schema.forge(&json!("AB")).into_result().unwrap_err();
/// assert_eq!(issues.len(), 1);
/// assert_eq!(issues.first().check, "min_len");
/// ```
pub type StringSchema<O = Required, N = NonNull> = TypedSchema<StringKind, O, N>;

fn char_count(value: &Value) -> Option<usize> {
    value.as_str().map(|s| s.chars().count())
}

impl<O: Presence, N: Nullability> TypedSchema<StringKind, O, N> {
    /// Requires at least `min` characters (Unicode scalar values).
    ///
    /// # Example
    ///
    /// ```rust
    /// use forgeval::Schema;
    /// use serde_json::json;
    ///
    /// let schema = Schema::string().min_len(5);
    ///
    /// assert!(schema.forge(&json!("hello")).is_success());
    /// assert!(schema.forge(&json!("hi")).is_failure());
    /// ```
    pub fn min_len(&self, min: usize) -> Self {
        self.with_check(Check::predicate(
            "min_len",
            move |v| char_count(v).is_some_and(|n| n >= min),
            CheckConfig::new(),
        ))
    }

    /// Allows at most `max` characters.
    pub fn max_len(&self, max: usize) -> Self {
        self.with_check(Check::predicate(
            "max_len",
            move |v| char_count(v).is_some_and(|n| n <= max),
            CheckConfig::new(),
        ))
    }

    /// Requires a match of `pattern` somewhere in the string.
    ///
    /// Returns an error if `pattern` is not a valid regular expression.
    ///
    /// # Example
    ///
    /// ```rust
    /// use forgeval::Schema;
    /// use serde_json::json;
    ///
    /// let schema = Schema::string().pattern(r"^\d{3}-\d{4}$").unwrap();
    /// assert!(schema.forge(&json!("555-1234")).is_success());
    /// assert!(schema.forge(&json!("5551234")).is_failure());
    ///
    /// assert!(Schema::string().pattern(r"[unclosed").is_err());
    /// ```
    pub fn pattern(&self, pattern: &str) -> Result<Self, regex::Error> {
        Ok(self.matches(Regex::new(pattern)?))
    }

    /// Like [`pattern`](Self::pattern), with an already compiled regex.
    pub fn matches(&self, regex: Regex) -> Self {
        self.with_check(Check::predicate(
            "pattern",
            move |v| v.as_str().is_some_and(|s| regex.is_match(s)),
            CheckConfig::new(),
        ))
    }

    /// Requires a plausible email address (`local@domain.tld`).
    pub fn email(&self) -> Self {
        self.with_check(Check::predicate(
            "email",
            |v| v.as_str().is_some_and(|s| EMAIL.is_match(s)),
            CheckConfig::new(),
        ))
    }

    /// Appends a custom predicate over the string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use forgeval::Schema;
    /// use serde_json::json;
    ///
    /// let schema = Schema::string()
    ///     .check(|s| s.chars().all(char::is_uppercase), "must be uppercase");
    ///
    /// let issues = schema.forge(&json!("abc")).into_result().unwrap_err();
    /// assert_eq!(issues.first().check, "check");
    /// assert_eq!(issues.first().message.as_deref(), Some("must be uppercase"));
    /// ```
    pub fn check<F>(&self, predicate: F, config: impl Into<CheckConfig>) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.check_value(move |v| v.as_str().is_some_and(&predicate), config)
    }
}

#[cfg(test)]
mod tests {
    use crate::{IssueCode, Schema};
    use serde_json::json;

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let schema = Schema::string().min_len(3).max_len(3);
        assert!(schema.forge(&json!("héé")).is_success());
        assert!(schema.forge(&json!("日本語")).is_success());
        assert!(schema.forge(&json!("日本")).is_failure());
    }

    #[test]
    fn test_type_error() {
        let issues = Schema::string()
            .forge(&json!(42))
            .into_result()
            .unwrap_err();
        assert_eq!(issues.first().code, IssueCode::ValueError);
        assert_eq!(issues.first().check, "string");
        assert_eq!(issues.first().describe(), "expected string");
    }

    #[test]
    fn test_email() {
        let schema = Schema::string().email();
        assert!(schema.forge(&json!("ada@example.com")).is_success());
        assert!(schema.forge(&json!("first.last+tag@mail.example.org")).is_success());
        assert!(schema.forge(&json!("not-an-email")).is_failure());
        assert!(schema.forge(&json!("a@b")).is_failure());
        assert!(schema.forge(&json!("a b@example.com")).is_failure());
    }

    #[test]
    fn test_error_targets_last_check() {
        let schema = Schema::string()
            .min_len(2)
            .error("too short")
            .max_len(4)
            .error("too long");

        let short = schema.forge(&json!("a")).into_result().unwrap_err();
        assert_eq!(short.first().message.as_deref(), Some("too short"));

        let long = schema.forge(&json!("abcdef")).into_result().unwrap_err();
        assert_eq!(long.first().message.as_deref(), Some("too long"));
        assert_eq!(long.first().check, "max_len");
    }
}
