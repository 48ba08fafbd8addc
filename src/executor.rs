//! Runs a chain of checks against one value.
//!
//! The synchronous and asynchronous runners share [`Verdict`] and
//! [`Outcome::apply`], so they only differ in how an async check is treated:
//! [`run`] reports it as `async_method_error` without creating the future,
//! [`run_async`] awaits it.

use std::borrow::Cow;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;
use serde_json::Value;
use stillwater::Validation;
use tracing::{debug, trace, warn};

use crate::check::{Check, CheckOp};
use crate::error::{CheckError, ForgeIssues, Issue, IssueCode};
use crate::input::Input;
use crate::ForgeResult;

/// The value being forged plus the issues found so far.
pub struct Outcome<'v> {
    pub(crate) value: Option<Cow<'v, Value>>,
    pub(crate) issues: Vec<Issue>,
}

impl<'v> Outcome<'v> {
    /// An outcome holding the input as-is and no issues.
    pub(crate) fn start(input: Input<'v>) -> Self {
        Self {
            value: input.value().map(Cow::Borrowed),
            issues: Vec::new(),
        }
    }

    pub(crate) fn passthrough(value: &'v Value) -> Self {
        Self::start(Input::Present(value))
    }

    pub(crate) fn assembled(value: Value, issues: Vec<Issue>) -> Self {
        Self {
            value: Some(Cow::Owned(value)),
            issues,
        }
    }

    pub(crate) fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Success with the final value, or every issue collected.
    pub(crate) fn finish(self, schema: &'static str) -> ForgeResult {
        match ForgeIssues::from_vec(self.issues) {
            None => Validation::Success(self.value.map(Cow::into_owned)),
            Some(issues) => {
                debug!(schema, issues = issues.len(), "forge failed");
                Validation::Failure(issues)
            }
        }
    }

    /// Records a verdict. Returns false when the chain must stop.
    fn apply(&mut self, check: &Check, verdict: Verdict) -> bool {
        match verdict {
            Verdict::Pass => true,
            Verdict::Replace(next) => {
                self.value = Some(Cow::Owned(next));
                true
            }
            Verdict::Reject(code) => {
                trace!(check = check.name(), code = %code, "check rejected value");
                self.issues.push(check.reject(code));
                check.is_loose()
            }
            Verdict::Abort(error) => {
                warn!(check = check.name(), error = %error, "check could not run");
                self.issues.push(check.unexpected(&error));
                false
            }
        }
    }
}

enum Verdict {
    Pass,
    Replace(Value),
    Reject(IssueCode),
    Abort(CheckError),
}

fn guarded<T>(f: impl FnOnce() -> Result<T, CheckError>) -> Result<T, CheckError> {
    panic::catch_unwind(AssertUnwindSafe(f))
        .unwrap_or_else(|payload| Err(CheckError::from_panic(payload)))
}

fn judge(check: &Check, value: Option<&Value>) -> Verdict {
    match (check.op(), value) {
        (CheckOp::Async(_), _) => Verdict::Reject(IssueCode::AsyncMethodError),
        (_, None) => Verdict::Reject(check.code()),
        (CheckOp::Predicate(f), Some(value)) => match guarded(|| f(value)) {
            Ok(true) => Verdict::Pass,
            Ok(false) => Verdict::Reject(check.code()),
            Err(error) => Verdict::Abort(error),
        },
        (CheckOp::Transform(f), Some(value)) => match guarded(|| f(value)) {
            Ok(next) => Verdict::Replace(next),
            Err(error) => Verdict::Abort(error),
        },
    }
}

/// Runs `checks` in order, appending to `outcome`.
pub(crate) fn run<'v>(checks: &[&Check], mut outcome: Outcome<'v>) -> Outcome<'v> {
    for check in checks {
        let verdict = judge(check, outcome.value.as_deref());
        if !outcome.apply(check, verdict) {
            break;
        }
    }
    outcome
}

/// Runs `checks` in order, awaiting async checks one at a time.
pub(crate) async fn run_async<'v>(checks: &[&Check], mut outcome: Outcome<'v>) -> Outcome<'v> {
    for check in checks {
        let verdict = match (check.op(), outcome.value.as_deref()) {
            (CheckOp::Async(f), Some(value)) => {
                let value = value.clone();
                match guarded(|| Ok(f(value))) {
                    Ok(fut) => match AssertUnwindSafe(fut).catch_unwind().await {
                        Ok(Ok(true)) => Verdict::Pass,
                        Ok(Ok(false)) => Verdict::Reject(check.code()),
                        Ok(Err(error)) => Verdict::Abort(error),
                        Err(payload) => Verdict::Abort(CheckError::from_panic(payload)),
                    },
                    Err(error) => Verdict::Abort(error),
                }
            }
            (CheckOp::Async(_), None) => Verdict::Reject(check.code()),
            (_, value) => judge(check, value),
        };
        if !outcome.apply(check, verdict) {
            break;
        }
    }
    outcome
}

/// Where a child result sits inside its composite.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Segment<'k> {
    Key(&'k str),
    Index(usize),
}

/// Folds a child's result into its parent's issue list.
///
/// Issues under a key get the key prefixed onto their path; issues of an
/// array element are wrapped into one issue carrying the index. Returns the
/// forged child value on success and `None` on failure (or when an absent
/// optional child was admitted), in which case the caller keeps the original.
pub(crate) fn collect(result: ForgeResult, at: Segment<'_>, issues: &mut Vec<Issue>) -> Option<Value> {
    match result {
        Validation::Success(value) => value,
        Validation::Failure(failed) => {
            match at {
                Segment::Key(key) => issues.extend(failed.into_iter().map(|i| i.prefixed(key))),
                Segment::Index(index) => issues.push(Issue::element(index, failed.into_vec())),
            }
            None
        }
    }
}
