//! The one generic schema type every builder returns.
//!
//! A [`TypedSchema`] pairs a [`Kind`] (what the guard accepts and, for
//! composites, how children are forged) with a persistent check list and two
//! zero-sized markers for its modal flags. Builder methods take `&self` and
//! return a new schema sharing the existing checks, so a schema never changes
//! after it has been returned.

use std::fmt;
use std::future::Future;
use std::marker::PhantomData;

use futures::future::{self, BoxFuture};
use futures::FutureExt;
use serde_json::Value;
use stillwater::Validation;

use super::modal::{NonNull, Nullability, Nullable, Optional, Presence, Required, Sealed};
use super::traits::SchemaLike;
use crate::chain::Checks;
use crate::check::{Check, CheckConfig};
use crate::error::CheckError;
use crate::executor::{self, Outcome};
use crate::input::Input;
use crate::ForgeResult;

/// What a schema accepts, and how it forges its children.
///
/// Implemented by the kinds this crate ships (string, number, boolean, any,
/// object, array); it cannot be implemented outside the crate.
pub trait Kind: Sealed + Clone + Send + Sync + 'static {
    /// Name of the type guard, reported on `value_error` issues.
    const NAME: &'static str;

    /// The type guard.
    fn accepts(value: &Value) -> bool;

    /// Forges child values of a guarded value.
    fn forge_children<'v>(&self, value: &'v Value) -> Outcome<'v> {
        Outcome::passthrough(value)
    }

    /// Forges child values of a guarded value, awaiting async checks.
    fn forge_children_async<'v>(&'v self, value: &'v Value) -> BoxFuture<'v, Outcome<'v>> {
        future::ready(self.forge_children(value)).boxed()
    }
}

/// A schema of kind `K` with presence `O` and nullability `N`.
///
/// Use the aliases ([`StringSchema`](crate::StringSchema),
/// [`ObjectSchema`](crate::ObjectSchema), ...) to name concrete schemas.
pub struct TypedSchema<K, O = Required, N = NonNull> {
    pub(crate) kind: K,
    checks: Checks,
    _modal: PhantomData<fn() -> (O, N)>,
}

impl<K: Clone, O, N> Clone for TypedSchema<K, O, N> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind.clone(),
            checks: self.checks.clone(),
            _modal: PhantomData,
        }
    }
}

impl<K: Kind, O: Presence, N: Nullability> fmt::Debug for TypedSchema<K, O, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedSchema")
            .field("kind", &K::NAME)
            .field("optional", &O::OPTIONAL)
            .field("nullable", &N::NULLABLE)
            .field("checks", &self.checks)
            .finish()
    }
}

impl<K: Kind> TypedSchema<K> {
    /// A required, non-null schema holding only the type guard.
    pub(crate) fn new(kind: K) -> Self {
        Self {
            kind,
            checks: Checks::with(Check::guard(K::NAME, K::accepts)),
            _modal: PhantomData,
        }
    }
}

impl<K: Kind, O: Presence, N: Nullability> TypedSchema<K, O, N> {
    fn derive<O2, N2>(&self, kind: K, checks: Checks) -> TypedSchema<K, O2, N2> {
        TypedSchema {
            kind,
            checks,
            _modal: PhantomData,
        }
    }

    /// Returns a schema with `check` appended.
    pub(crate) fn with_check(&self, check: Check) -> Self {
        self.derive(self.kind.clone(), self.checks.push(check))
    }

    /// Returns a schema with a different kind and the same checks.
    pub(crate) fn with_kind(&self, kind: K) -> Self {
        self.derive(kind, self.checks.clone())
    }

    /// Whether an absent value is admitted.
    pub fn is_optional(&self) -> bool {
        O::OPTIONAL
    }

    /// Whether `null` is admitted.
    pub fn is_nullable(&self) -> bool {
        N::NULLABLE
    }

    /// Number of checks, the type guard included.
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    /// Sets the message of the most recently added check.
    ///
    /// Right after construction that is the type guard, so the message
    /// replaces the default "expected ..." description.
    ///
    /// # Example
    ///
    /// ```rust
    /// use forgeval::Schema;
    /// use serde_json::json;
    ///
    /// let schema = Schema::string().error("name must be text")
    ///     .min_len(2).error("name is too short");
    ///
    /// let issues = schema.forge(&json!(7)).into_result().unwrap_err();
    /// assert_eq!(issues.first().message.as_deref(), Some("name must be text"));
    ///
    /// let issues = schema.forge(&json!("A")).into_result().unwrap_err();
    /// assert_eq!(issues.first().message.as_deref(), Some("name is too short"));
    /// ```
    pub fn error(&self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.derive(
            self.kind.clone(),
            self.checks.map_last(|check| check.with_message(message)),
        )
    }

    /// Marks the most recently added check as loose: its failure is
    /// reported but the chain keeps running. The type guard is never loose.
    pub fn loose(&self) -> Self {
        if self.checks.len() < 2 {
            return self.clone();
        }
        self.derive(self.kind.clone(), self.checks.map_last(Check::into_loose))
    }

    /// Appends a predicate over the raw value.
    pub fn check_value<F>(&self, predicate: F, config: impl Into<CheckConfig>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.with_check(Check::predicate("check", predicate, config))
    }

    /// Appends a fallible predicate. An `Err` aborts the chain with an
    /// `unexpected_error` issue carrying the error text.
    pub fn try_check<F, E>(&self, predicate: F, config: impl Into<CheckConfig>) -> Self
    where
        F: Fn(&Value) -> Result<bool, E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        self.with_check(Check::try_predicate(
            "check",
            move |value| predicate(value).map_err(CheckError::raised),
            config,
        ))
    }

    /// Appends an asynchronous predicate.
    ///
    /// Only [`forge_async`](Self::forge_async) awaits it; a synchronous
    /// [`forge`](Self::forge) reports `async_method_error` when it gets there.
    pub fn check_async<F, Fut>(&self, predicate: F, config: impl Into<CheckConfig>) -> Self
    where
        F: Fn(Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        self.with_check(Check::async_predicate("check", predicate, config))
    }

    /// Appends a transform: later checks, and the success value, see its output.
    ///
    /// # Example
    ///
    /// ```rust
    /// use forgeval::Schema;
    /// use serde_json::{json, Value};
    ///
    /// let schema = Schema::string()
    ///     .transform(|v| Value::from(v.as_str().unwrap_or_default().trim()))
    ///     .min_len(1);
    ///
    /// assert_eq!(schema.forge(&json!("  ok ")).into_result(), Ok(Some(json!("ok"))));
    /// assert!(schema.forge(&json!("   ")).is_failure());
    /// ```
    pub fn transform<F>(&self, f: F) -> Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.with_check(Check::transform("transform", f))
    }

    /// Forges `input` synchronously.
    pub fn forge<'a>(&self, input: impl Into<Input<'a>>) -> ForgeResult {
        self.forge_with(input.into())
    }

    /// Forges `input`, awaiting asynchronous checks one at a time.
    pub fn forge_async<'a>(&'a self, input: impl Into<Input<'a>>) -> BoxFuture<'a, ForgeResult> {
        self.forge_with_async(input.into())
    }

    fn admits(input: Input<'_>) -> bool {
        (O::OPTIONAL && input.is_absent()) || (N::NULLABLE && input.is_null())
    }

    fn forge_with(&self, input: Input<'_>) -> ForgeResult {
        if Self::admits(input) {
            return Validation::Success(input.to_owned_value());
        }
        let checks = self.checks.to_vec();
        let Some((guard, rest)) = checks.split_first() else {
            return Outcome::start(input).finish(K::NAME);
        };
        let guarded = executor::run(&[*guard], Outcome::start(input));
        let value = match input.value() {
            Some(value) if guarded.is_clean() => value,
            _ => return guarded.finish(K::NAME),
        };
        let children = self.kind.forge_children(value);
        executor::run(rest, children).finish(K::NAME)
    }

    fn forge_with_async<'a>(&'a self, input: Input<'a>) -> BoxFuture<'a, ForgeResult> {
        async move {
            if Self::admits(input) {
                return Validation::Success(input.to_owned_value());
            }
            let checks = self.checks.to_vec();
            let Some((guard, rest)) = checks.split_first() else {
                return Outcome::start(input).finish(K::NAME);
            };
            let guarded = executor::run(&[*guard], Outcome::start(input));
            let value = match input.value() {
                Some(value) if guarded.is_clean() => value,
                _ => return guarded.finish(K::NAME),
            };
            let children = self.kind.forge_children_async(value).await;
            executor::run_async(rest, children).await.finish(K::NAME)
        }
        .boxed()
    }
}

impl<K: Kind, N: Nullability> TypedSchema<K, Required, N> {
    /// Returns a schema that admits an absent value without running any check.
    ///
    /// # Example
    ///
    /// ```rust
    /// use forgeval::{Input, Schema};
    ///
    /// let base = Schema::number();
    /// let optional = base.optional();
    ///
    /// assert!(optional.forge(Input::Absent).is_success());
    /// assert!(base.forge(Input::Absent).is_failure());
    /// ```
    ///
    /// Applying it twice does not compile:
    ///
    /// ```compile_fail
    /// let twice = forgeval::Schema::string().optional().optional();
    /// ```
    pub fn optional(&self) -> TypedSchema<K, Optional, N> {
        self.derive(self.kind.clone(), self.checks.clone())
    }
}

impl<K: Kind, O: Presence> TypedSchema<K, O, NonNull> {
    /// Returns a schema that admits `null` without running any check.
    ///
    /// ```compile_fail
    /// let twice = forgeval::Schema::number().nullable().optional().nullable();
    /// ```
    pub fn nullable(&self) -> TypedSchema<K, O, Nullable> {
        self.derive(self.kind.clone(), self.checks.clone())
    }
}

impl<K: Kind, O: Presence, N: Nullability> SchemaLike for TypedSchema<K, O, N> {
    fn forge_input(&self, input: Input<'_>) -> ForgeResult {
        self.forge_with(input)
    }

    fn forge_input_async<'a>(&'a self, input: Input<'a>) -> BoxFuture<'a, ForgeResult> {
        self.forge_with_async(input)
    }

    fn is_optional(&self) -> bool {
        O::OPTIONAL
    }

    fn is_nullable(&self) -> bool {
        N::NULLABLE
    }
}
