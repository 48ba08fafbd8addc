//! Array schemas.
//!
//! [`ArraySchema`] forges every element against one element schema. A failing
//! element contributes a single issue carrying its `array_index`, with the
//! element's own issues nested inside.

use std::sync::Arc;

use futures::future::{join_all, BoxFuture};
use futures::FutureExt;
use serde_json::Value;

use super::modal::{NonNull, Nullability, Presence, Required, Sealed};
use super::traits::SchemaLike;
use super::typed::{Kind, TypedSchema};
use crate::check::{Check, CheckConfig};
use crate::executor::{collect, Outcome, Segment};
use crate::input::Input;
use crate::ForgeResult;

/// Guard and element schema for arrays.
#[derive(Clone)]
pub struct ArrayKind {
    element: Arc<dyn SchemaLike>,
}

impl Sealed for ArrayKind {}

impl ArrayKind {
    pub(crate) fn new(element: impl SchemaLike + 'static) -> Self {
        Self {
            element: Arc::new(element),
        }
    }

    fn assemble<'v>(
        items: &[Value],
        results: impl IntoIterator<Item = ForgeResult>,
    ) -> Outcome<'v> {
        let mut issues = Vec::new();
        let forged = items
            .iter()
            .zip(results)
            .enumerate()
            .map(|(index, (item, result))| {
                collect(result, Segment::Index(index), &mut issues).unwrap_or_else(|| item.clone())
            })
            .collect();
        Outcome::assembled(Value::Array(forged), issues)
    }
}

impl Kind for ArrayKind {
    const NAME: &'static str = "array";

    fn accepts(value: &Value) -> bool {
        value.is_array()
    }

    fn forge_children<'v>(&self, value: &'v Value) -> Outcome<'v> {
        let Some(items) = value.as_array() else {
            return Outcome::passthrough(value);
        };
        let results = items
            .iter()
            .map(|item| self.element.forge_input(Input::Present(item)));
        Self::assemble(items, results)
    }

    fn forge_children_async<'v>(&'v self, value: &'v Value) -> BoxFuture<'v, Outcome<'v>> {
        async move {
            let Some(items) = value.as_array() else {
                return Outcome::passthrough(value);
            };
            let results = join_all(
                items
                    .iter()
                    .map(|item| self.element.forge_input_async(Input::Present(item))),
            )
            .await;
            Self::assemble(items, results)
        }
        .boxed()
    }
}

/// A schema for JSON arrays.
///
/// # Example
///
/// ```rust
/// use forgeval::Schema;
/// use serde_json::json;
///
/// let tags = Schema::array(Schema::string().min_len(1)).min_len(1).max_len(5);
///
/// assert!(tags.forge(&json!(["rust", "json"])).is_success());
///
/// let issues = tags.forge(&json!(["rust", ""])).into_result().unwrap_err();
/// assert_eq!(issues.len(), 1);
/// assert_eq!(issues.first().array_index, Some(1));
/// ```
pub type ArraySchema<O = Required, N = NonNull> = TypedSchema<ArrayKind, O, N>;

fn item_count(value: &Value) -> Option<usize> {
    value.as_array().map(Vec::len)
}

impl<O: Presence, N: Nullability> TypedSchema<ArrayKind, O, N> {
    /// Requires at least `min` elements.
    pub fn min_len(&self, min: usize) -> Self {
        self.with_check(Check::predicate(
            "min_len",
            move |v| item_count(v).is_some_and(|n| n >= min),
            CheckConfig::new(),
        ))
    }

    /// Allows at most `max` elements.
    pub fn max_len(&self, max: usize) -> Self {
        self.with_check(Check::predicate(
            "max_len",
            move |v| item_count(v).is_some_and(|n| n <= max),
            CheckConfig::new(),
        ))
    }

    /// Requires at least one element.
    pub fn non_empty(&self) -> Self {
        self.with_check(Check::predicate(
            "non_empty",
            |v| item_count(v).is_some_and(|n| n > 0),
            CheckConfig::new(),
        ))
    }

    /// Appends a predicate over the forged elements.
    ///
    /// # Example
    ///
    /// ```rust
    /// use forgeval::Schema;
    /// use serde_json::json;
    ///
    /// let unique = Schema::array(Schema::number())
    ///     .check(|items| items.windows(2).all(|w| w[0] != w[1]), "no repeats");
    ///
    /// assert!(unique.forge(&json!([1, 2, 1])).is_success());
    /// assert!(unique.forge(&json!([1, 1, 2])).is_failure());
    /// ```
    pub fn check<F>(&self, predicate: F, config: impl Into<CheckConfig>) -> Self
    where
        F: Fn(&[Value]) -> bool + Send + Sync + 'static,
    {
        self.check_value(
            move |v| v.as_array().is_some_and(|items| predicate(items)),
            config,
        )
    }
}
