//! Object schemas.
//!
//! [`ObjectSchema`] forges JSON objects field by field. Every field in the
//! model is forged, failures included, before the object's own checks run on
//! the assembled value, so one forge reports every bad field at once.

use std::sync::Arc;

use futures::future::{join_all, BoxFuture};
use futures::FutureExt;
use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::modal::{NonNull, Nullability, Presence, Required, Sealed};
use super::traits::SchemaLike;
use super::typed::{Kind, TypedSchema};
use crate::check::CheckConfig;
use crate::error::{Issue, IssueCode};
use crate::executor::{collect, Outcome, Segment};
use crate::input::Input;
use crate::ForgeResult;

/// Guard and field model for objects.
#[derive(Clone, Default)]
pub struct ObjectKind {
    model: Arc<IndexMap<String, Arc<dyn SchemaLike>>>,
    strict: bool,
}

impl Sealed for ObjectKind {}

impl ObjectKind {
    fn assemble<'v>(
        &self,
        object: &Map<String, Value>,
        results: impl IntoIterator<Item = ForgeResult>,
    ) -> Outcome<'v> {
        let mut issues = Vec::new();
        let mut forged = Map::new();

        for (key, result) in self.model.keys().zip(results) {
            let value = collect(result, Segment::Key(key), &mut issues)
                .or_else(|| object.get(key).cloned());
            if let Some(value) = value {
                forged.insert(key.clone(), value);
            }
        }

        for (key, value) in object {
            if self.model.contains_key(key) {
                continue;
            }
            if self.strict {
                issues.push(
                    Issue::new(IssueCode::ValidationError, "strict")
                        .with_message(format!("unknown field `{}`", key))
                        .with_path([key.as_str()]),
                );
            }
            forged.insert(key.clone(), value.clone());
        }

        Outcome::assembled(Value::Object(forged), issues)
    }
}

impl Kind for ObjectKind {
    const NAME: &'static str = "object";

    fn accepts(value: &Value) -> bool {
        value.is_object()
    }

    fn forge_children<'v>(&self, value: &'v Value) -> Outcome<'v> {
        let Some(object) = value.as_object() else {
            return Outcome::passthrough(value);
        };
        let results = self
            .model
            .iter()
            .map(|(key, schema)| schema.forge_input(Input::from(object.get(key))));
        self.assemble(object, results)
    }

    fn forge_children_async<'v>(&'v self, value: &'v Value) -> BoxFuture<'v, Outcome<'v>> {
        async move {
            let Some(object) = value.as_object() else {
                return Outcome::passthrough(value);
            };
            let results = join_all(
                self.model
                    .iter()
                    .map(|(key, schema)| schema.forge_input_async(Input::from(object.get(key)))),
            )
            .await;
            self.assemble(object, results)
        }
        .boxed()
    }
}

/// A schema for JSON objects.
///
/// Missing keys are forged as [`Input::Absent`], so a field passes only if
/// its schema is optional. Keys outside the model pass through untouched
/// unless [`strict`](TypedSchema::strict) is set.
///
/// # Example
///
/// ```rust
/// use forgeval::Schema;
/// use serde_json::json;
///
/// let schema = Schema::object()
///     .field("name", Schema::string().min_len(1))
///     .field("age", Schema::number().integer().positive())
///     .field("email", Schema::string().email().optional());
///
/// assert!(schema.forge(&json!({"name": "Ada", "age": 36})).is_success());
///
/// let issues = schema
///     .forge(&json!({"name": "", "age": "x"}))
///     .into_result()
///     .unwrap_err();
/// assert_eq!(issues.len(), 2);
/// assert_eq!(issues.at_path(&["age"]).len(), 1);
/// ```
pub type ObjectSchema<O = Required, N = NonNull> = TypedSchema<ObjectKind, O, N>;

impl<O: Presence, N: Nullability> TypedSchema<ObjectKind, O, N> {
    /// Adds (or replaces) a field. Field order is kept for issue reporting.
    pub fn field<S>(&self, name: impl Into<String>, schema: S) -> Self
    where
        S: SchemaLike + 'static,
    {
        let mut model = (*self.kind.model).clone();
        model.insert(name.into(), Arc::new(schema));
        self.with_kind(ObjectKind {
            model: Arc::new(model),
            strict: self.kind.strict,
        })
    }

    /// Rejects keys that are not in the model, one issue per key.
    pub fn strict(&self) -> Self {
        self.with_kind(ObjectKind {
            model: Arc::clone(&self.kind.model),
            strict: true,
        })
    }

    /// Field names in model order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.kind.model.keys().map(String::as_str)
    }

    /// Appends a predicate over the whole object, run after every field was
    /// forged. Use [`CheckConfig::path`] to attach the issue to a field.
    ///
    /// # Example
    ///
    /// ```rust
    /// use forgeval::{CheckConfig, Schema};
    /// use serde_json::json;
    ///
    /// let signup = Schema::object()
    ///     .field("password", Schema::string().min_len(8))
    ///     .field("confirm", Schema::string())
    ///     .check(
    ///         |o| o.get("password") == o.get("confirm"),
    ///         CheckConfig::message("passwords differ").path(["confirm"]),
    ///     );
    ///
    /// let issues = signup
    ///     .forge(&json!({"password": "hunter22", "confirm": "hunter23"}))
    ///     .into_result()
    ///     .unwrap_err();
    /// assert_eq!(issues.first().path, vec!["confirm".to_string()]);
    /// ```
    pub fn check<F>(&self, predicate: F, config: impl Into<CheckConfig>) -> Self
    where
        F: Fn(&Map<String, Value>) -> bool + Send + Sync + 'static,
    {
        self.check_value(move |v| v.as_object().is_some_and(&predicate), config)
    }
}
