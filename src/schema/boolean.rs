//! Boolean schemas.

use serde_json::Value;

use super::modal::{NonNull, Nullability, Presence, Required, Sealed};
use super::typed::{Kind, TypedSchema};
use crate::check::CheckConfig;

/// Guard for `true` / `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanKind;

impl Sealed for BooleanKind {}

impl Kind for BooleanKind {
    const NAME: &'static str = "boolean";

    fn accepts(value: &Value) -> bool {
        value.is_boolean()
    }
}

/// A schema for boolean values.
///
/// # Example
///
/// ```rust
/// use forgeval::{Input, Schema};
/// use serde_json::json;
///
/// let flag = Schema::boolean().optional().nullable();
///
/// assert!(flag.forge(Input::Absent).is_success());
/// assert!(flag.forge(&json!(null)).is_success());
/// assert!(flag.forge(&json!(1)).is_failure());
/// ```
pub type BooleanSchema<O = Required, N = NonNull> = TypedSchema<BooleanKind, O, N>;

impl<O: Presence, N: Nullability> TypedSchema<BooleanKind, O, N> {
    /// Appends a custom predicate over the boolean.
    pub fn check<F>(&self, predicate: F, config: impl Into<CheckConfig>) -> Self
    where
        F: Fn(bool) -> bool + Send + Sync + 'static,
    {
        self.check_value(move |v| v.as_bool().is_some_and(&predicate), config)
    }
}
