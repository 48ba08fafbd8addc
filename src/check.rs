//! Checks: the steps a schema's chain is made of.
//!
//! A [`Check`] is tagged with what it does ([`CheckOp`]), so the executor
//! dispatches on the tag instead of inspecting what a closure returned. An
//! asynchronous check is known to be asynchronous before it ever runs.

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::Value;

use crate::error::{CheckError, Issue, IssueCode};

pub(crate) type PredicateFn = Arc<dyn Fn(&Value) -> Result<bool, CheckError> + Send + Sync>;
pub(crate) type TransformFn = Arc<dyn Fn(&Value) -> Result<Value, CheckError> + Send + Sync>;
pub(crate) type AsyncPredicateFn =
    Arc<dyn Fn(Value) -> BoxFuture<'static, Result<bool, CheckError>> + Send + Sync>;

/// What a check does with the current value.
#[derive(Clone)]
pub enum CheckOp {
    /// Accepts or rejects the value.
    Predicate(PredicateFn),
    /// Replaces the value for the rest of the chain.
    Transform(TransformFn),
    /// Accepts or rejects the value asynchronously.
    Async(AsyncPredicateFn),
}

impl fmt::Debug for CheckOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOp::Predicate(_) => f.write_str("Predicate"),
            CheckOp::Transform(_) => f.write_str("Transform"),
            CheckOp::Async(_) => f.write_str("Async"),
        }
    }
}

/// Reporting options for a check.
///
/// A plain string converts into a config carrying just that message, so
/// `.check(pred, "must be uppercase")` reads naturally.
///
/// # Example
///
/// ```rust
/// use forgeval::CheckConfig;
///
/// let config = CheckConfig::message("passwords differ")
///     .path(["confirm"])
///     .loose();
///
/// assert!(config.is_loose());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckConfig {
    pub(crate) message: Option<String>,
    pub(crate) path: Vec<String>,
    pub(crate) loose: bool,
}

impl CheckConfig {
    /// A config with no message, no path, stopping the chain on failure.
    pub fn new() -> Self {
        Self::default()
    }

    /// A config carrying `message`.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new().with_message(message)
    }

    /// Sets the message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the path reported on failure (relative to the schema).
    pub fn path<I, S>(mut self, path: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.path = path.into_iter().map(Into::into).collect();
        self
    }

    /// Keeps the chain running when this check fails.
    pub fn loose(mut self) -> Self {
        self.loose = true;
        self
    }

    /// Whether a failure lets the chain continue.
    pub fn is_loose(&self) -> bool {
        self.loose
    }
}

impl From<&str> for CheckConfig {
    fn from(message: &str) -> Self {
        CheckConfig::message(message)
    }
}

impl From<String> for CheckConfig {
    fn from(message: String) -> Self {
        CheckConfig::message(message)
    }
}

/// One step of a schema's chain.
#[derive(Clone, Debug)]
pub struct Check {
    pub(crate) name: String,
    pub(crate) op: CheckOp,
    pub(crate) code: IssueCode,
    pub(crate) config: CheckConfig,
}

impl Check {
    /// A type guard: code `value_error`, never loose.
    pub(crate) fn guard(name: &str, accepts: fn(&Value) -> bool) -> Self {
        Self {
            name: name.to_string(),
            op: CheckOp::Predicate(Arc::new(move |v: &Value| Ok(accepts(v)))),
            code: IssueCode::ValueError,
            config: CheckConfig::default(),
        }
    }

    /// A predicate check reporting `validation_error`.
    pub fn predicate<F>(name: impl Into<String>, f: F, config: impl Into<CheckConfig>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::try_predicate(name, move |v: &Value| Ok(f(v)), config)
    }

    /// A predicate check that may fail to decide.
    pub fn try_predicate<F>(name: impl Into<String>, f: F, config: impl Into<CheckConfig>) -> Self
    where
        F: Fn(&Value) -> Result<bool, CheckError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            op: CheckOp::Predicate(Arc::new(f)),
            code: IssueCode::ValidationError,
            config: config.into(),
        }
    }

    /// A transform check.
    pub fn transform<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            op: CheckOp::Transform(Arc::new(move |v: &Value| Ok(f(v)))),
            code: IssueCode::ValidationError,
            config: CheckConfig::default(),
        }
    }

    /// An asynchronous predicate check.
    pub fn async_predicate<F, Fut>(name: impl Into<String>, f: F, config: impl Into<CheckConfig>) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        Self {
            name: name.into(),
            op: CheckOp::Async(Arc::new(move |v: Value| {
                f(v).map(Ok::<bool, CheckError>).boxed()
            })),
            code: IssueCode::ValidationError,
            config: config.into(),
        }
    }

    /// Name recorded on issues.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The operation.
    pub fn op(&self) -> &CheckOp {
        &self.op
    }

    /// Code reported when the check rejects a value.
    pub fn code(&self) -> IssueCode {
        self.code
    }

    pub(crate) fn is_loose(&self) -> bool {
        self.config.loose
    }

    /// The issue raised when this check rejects a value with `code`.
    pub(crate) fn reject(&self, code: IssueCode) -> Issue {
        Issue {
            message: self.config.message.clone(),
            path: self.config.path.clone(),
            ..Issue::new(code, self.name.clone())
        }
    }

    /// The issue raised when this check errors out.
    pub(crate) fn unexpected(&self, error: &CheckError) -> Issue {
        Issue::new(IssueCode::UnexpectedError, self.name.clone()).with_message(error.to_string())
    }

    pub(crate) fn with_message(mut self, message: String) -> Self {
        self.config.message = Some(message);
        self
    }

    pub(crate) fn into_loose(mut self) -> Self {
        self.config.loose = true;
        self
    }
}
