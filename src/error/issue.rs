//! Issue records and the non-empty issue list.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::path::JsonPath;

/// Category of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueCode {
    /// The type or shape guard failed.
    ValueError,
    /// A constraint or custom predicate failed.
    ValidationError,
    /// An asynchronous check was reached by a synchronous forge.
    AsyncMethodError,
    /// A check returned an error or panicked.
    UnexpectedError,
}

impl IssueCode {
    /// The wire name of the code (`value_error`, `validation_error`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::ValueError => "value_error",
            IssueCode::ValidationError => "validation_error",
            IssueCode::AsyncMethodError => "async_method_error",
            IssueCode::UnexpectedError => "unexpected_error",
        }
    }
}

impl Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failure found while forging a value.
///
/// `path` is relative to the schema that returned the issue: object schemas
/// prefix their key onto the issues of their fields, array schemas wrap the
/// issues of a failing element into one issue carrying `array_index` and the
/// element's issues in `issues`.
///
/// # Example
///
/// ```rust
/// use forgeval::{Issue, IssueCode};
///
/// let issue = Issue::new(IssueCode::ValidationError, "min_len")
///     .with_message("too short")
///     .with_path(["user", "name"]);
///
/// assert_eq!(issue.to_string(), "user.name: too short (min_len, validation_error)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    /// Failure category.
    pub code: IssueCode,
    /// Name of the check that failed (`string`, `min_len`, `check`, ...).
    pub check: String,
    /// Caller-supplied message, if any.
    pub message: Option<String>,
    /// Object keys from the reporting schema down to the failure.
    pub path: Vec<String>,
    /// Index of the failing element when the issue wraps an array element.
    pub array_index: Option<usize>,
    /// Issues of the wrapped array element.
    pub issues: Option<Vec<Issue>>,
}

impl Issue {
    /// Creates an issue with no message, path, index or nested issues.
    pub fn new(code: IssueCode, check: impl Into<String>) -> Self {
        Self {
            code,
            check: check.into(),
            message: None,
            path: Vec::new(),
            array_index: None,
            issues: None,
        }
    }

    /// Sets the message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Replaces the path.
    pub fn with_path<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path = path.into_iter().map(Into::into).collect();
        self
    }

    /// Returns the issue with `key` placed in front of its path.
    ///
    /// Nested issues are left alone: they are relative to this issue.
    pub fn prefixed(mut self, key: &str) -> Self {
        self.path.insert(0, key.to_string());
        self
    }

    /// Wraps the issues of array element `index`.
    pub fn element(index: usize, issues: Vec<Issue>) -> Self {
        Self {
            array_index: Some(index),
            issues: Some(issues),
            ..Self::new(IssueCode::ValidationError, "array")
        }
    }

    /// Message to show a user, falling back to a generic description.
    pub fn describe(&self) -> String {
        match (&self.message, self.code) {
            (Some(message), _) => message.clone(),
            (None, IssueCode::ValueError) => format!("expected {}", self.check),
            (None, IssueCode::AsyncMethodError) => {
                format!("`{}` is asynchronous; use forge_async", self.check)
            }
            (None, _) if self.array_index.is_some() => "invalid element".to_string(),
            (None, _) => format!("failed `{}`", self.check),
        }
    }

    fn location(&self, base: &JsonPath) -> JsonPath {
        let path = base.extend_keys(self.path.iter().cloned());
        match self.array_index {
            Some(index) => path.push_index(index),
            None => path,
        }
    }

    fn collect_leaves<'a>(&'a self, base: &JsonPath, out: &mut Vec<(JsonPath, &'a Issue)>) {
        let location = self.location(base);
        match &self.issues {
            Some(nested) if !nested.is_empty() => {
                for issue in nested {
                    issue.collect_leaves(&location, out);
                }
            }
            _ => out.push((location, self)),
        }
    }
}

impl Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let location = self.location(&JsonPath::root());
        if location.is_root() {
            write!(f, "(root)")?;
        } else {
            write!(f, "{}", location)?;
        }
        write!(f, ": {} ({}, {})", self.describe(), self.check, self.code)
    }
}

impl std::error::Error for Issue {}

/// The non-empty list of issues carried by a failed forge.
///
/// # Example
///
/// ```rust
/// use forgeval::{ForgeIssues, Issue, IssueCode};
/// use stillwater::prelude::*;
///
/// let a = ForgeIssues::single(Issue::new(IssueCode::ValueError, "string"));
/// let b = ForgeIssues::single(Issue::new(IssueCode::ValidationError, "check"));
///
/// assert_eq!(a.combine(b).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ForgeIssues(NonEmptyVec<Issue>);

impl ForgeIssues {
    /// A list holding one issue.
    pub fn single(issue: Issue) -> Self {
        Self(NonEmptyVec::singleton(issue))
    }

    /// Wraps a `NonEmptyVec`.
    pub fn from_non_empty(issues: NonEmptyVec<Issue>) -> Self {
        Self(issues)
    }

    /// Returns `None` when `issues` is empty.
    pub fn from_vec(issues: Vec<Issue>) -> Option<Self> {
        NonEmptyVec::from_vec(issues).map(Self)
    }

    /// Number of top-level issues.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates the top-level issues.
    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.0.iter()
    }

    /// The first issue.
    pub fn first(&self) -> &Issue {
        self.0.head()
    }

    /// Top-level issues with the given code.
    pub fn with_code(&self, code: IssueCode) -> Vec<&Issue> {
        self.0.iter().filter(|i| i.code == code).collect()
    }

    /// Top-level issues whose path equals `path`.
    pub fn at_path(&self, path: &[&str]) -> Vec<&Issue> {
        self.0
            .iter()
            .filter(|i| i.path.iter().map(String::as_str).eq(path.iter().copied()))
            .collect()
    }

    /// Every issue that does not wrap other issues, with its absolute location.
    ///
    /// ```rust
    /// use forgeval::Schema;
    /// use serde_json::json;
    ///
    /// let schema = Schema::object().field("tags", Schema::array(Schema::string()));
    /// let result = schema.forge(&json!({"tags": ["a", 1]}));
    /// let issues = result.into_result().unwrap_err();
    ///
    /// let leaves = issues.leaves();
    /// assert_eq!(leaves.len(), 1);
    /// assert_eq!(leaves[0].0.to_string(), "tags[1]");
    /// ```
    pub fn leaves(&self) -> Vec<(JsonPath, &Issue)> {
        let mut out = Vec::new();
        for issue in self.0.iter() {
            issue.collect_leaves(&JsonPath::root(), &mut out);
        }
        out
    }

    /// Converts into a plain vector.
    pub fn into_vec(self) -> Vec<Issue> {
        self.0.into_vec()
    }
}

impl Semigroup for ForgeIssues {
    fn combine(self, other: Self) -> Self {
        ForgeIssues(self.0.combine(other.0))
    }
}

impl Display for ForgeIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "forge failed with {} issue(s):", self.len())?;
        for (i, (path, issue)) in self.leaves().into_iter().enumerate() {
            let at = if path.is_root() {
                "(root)".to_string()
            } else {
                path.to_string()
            };
            writeln!(f, "  {}. {}: {} [{}]", i + 1, at, issue.describe(), issue.code)?;
        }
        Ok(())
    }
}

impl std::error::Error for ForgeIssues {}

impl IntoIterator for ForgeIssues {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ForgeIssues>();
    assert_sync::<ForgeIssues>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn issues(list: Vec<Issue>) -> ForgeIssues {
        ForgeIssues::from_vec(list).unwrap()
    }

    #[test]
    fn test_code_names() {
        assert_eq!(IssueCode::ValueError.as_str(), "value_error");
        assert_eq!(IssueCode::ValidationError.to_string(), "validation_error");
        assert_eq!(IssueCode::AsyncMethodError.as_str(), "async_method_error");
        assert_eq!(IssueCode::UnexpectedError.as_str(), "unexpected_error");
    }

    #[test]
    fn test_from_vec_rejects_empty() {
        assert!(ForgeIssues::from_vec(Vec::new()).is_none());
    }

    #[test]
    fn test_prefixed_only_touches_own_path() {
        let nested = Issue::new(IssueCode::ValueError, "string").with_path(["label"]);
        let issue = Issue::element(2, vec![nested.clone()]).prefixed("tags");

        assert_eq!(issue.path, vec!["tags".to_string()]);
        assert_eq!(issue.issues, Some(vec![nested]));
    }

    #[test]
    fn test_describe_fallbacks() {
        assert_eq!(
            Issue::new(IssueCode::ValueError, "number").describe(),
            "expected number"
        );
        assert_eq!(
            Issue::new(IssueCode::ValidationError, "gt").describe(),
            "failed `gt`"
        );
        assert_eq!(Issue::element(0, vec![]).describe(), "invalid element");
        assert!(Issue::new(IssueCode::AsyncMethodError, "check")
            .describe()
            .contains("forge_async"));
    }

    #[test]
    fn test_leaves_three_levels() {
        // users[1].emails[0].domain
        let leaf = Issue::new(IssueCode::ValidationError, "pattern").with_path(["domain"]);
        let inner = Issue::element(0, vec![leaf]).prefixed("emails");
        let outer = Issue::element(1, vec![inner]).prefixed("users");

        let all = issues(vec![outer]);
        let leaves = all.leaves();
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves[0].0.to_string(), "users[1].emails[0].domain");
        assert_eq!(leaves[0].1.check, "pattern");
    }

    #[test]
    fn test_at_path_and_with_code() {
        let all = issues(vec![
            Issue::new(IssueCode::ValueError, "number").with_path(["age"]),
            Issue::new(IssueCode::ValidationError, "min_len").with_path(["name"]),
            Issue::new(IssueCode::ValidationError, "check").with_path(["name"]),
        ]);

        assert_eq!(all.at_path(&["name"]).len(), 2);
        assert_eq!(all.at_path(&["age"]).len(), 1);
        assert!(all.at_path(&[]).is_empty());
        assert_eq!(all.with_code(IssueCode::ValidationError).len(), 2);
    }

    #[test]
    fn test_display_lists_leaves() {
        let all = issues(vec![
            Issue::new(IssueCode::ValueError, "string"),
            Issue::element(3, vec![Issue::new(IssueCode::ValueError, "number")]),
        ]);
        let display = all.to_string();

        assert!(display.contains("2 issue(s)"));
        assert!(display.contains("(root): expected string [value_error]"));
        assert!(display.contains("[3]: expected number [value_error]"));
    }

    #[test]
    fn test_combine_keeps_order() {
        let a = ForgeIssues::single(Issue::new(IssueCode::ValueError, "a"));
        let b = ForgeIssues::single(Issue::new(IssueCode::ValueError, "b"));
        let c = ForgeIssues::single(Issue::new(IssueCode::ValueError, "c"));

        let names: Vec<_> = a
            .combine(b.combine(c))
            .into_iter()
            .map(|i| i.check)
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
