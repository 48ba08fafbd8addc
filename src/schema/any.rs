//! Schemas that accept every value.
//!
//! [`Schema::any`](crate::Schema::any) and
//! [`Schema::unknown`](crate::Schema::unknown) both start out optional and
//! nullable, so only the checks added to them can reject a value.

use serde_json::Value;

use super::modal::{Nullability, Nullable, Optional, Presence, Sealed};
use super::typed::{Kind, TypedSchema};
use crate::check::CheckConfig;

/// A guard that accepts everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyKind;

impl Sealed for AnyKind {}

impl Kind for AnyKind {
    const NAME: &'static str = "any";

    fn accepts(_: &Value) -> bool {
        true
    }
}

/// A schema for any value.
///
/// # Example
///
/// ```rust
/// use forgeval::{Input, Schema};
/// use serde_json::json;
///
/// let payload = Schema::any();
/// assert!(payload.forge(&json!({"free": "form"})).is_success());
/// assert!(payload.forge(Input::Absent).is_success());
///
/// let not_empty = Schema::unknown().check(|v| !v.is_null(), "required");
/// assert!(not_empty.forge(&json!(0)).is_success());
/// ```
pub type AnySchema<O = Optional, N = Nullable> = TypedSchema<AnyKind, O, N>;

impl<O: Presence, N: Nullability> TypedSchema<AnyKind, O, N> {
    /// Appends a custom predicate over the raw value.
    pub fn check<F>(&self, predicate: F, config: impl Into<CheckConfig>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        self.check_value(predicate, config)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Input, Schema};
    use serde_json::json;

    #[test]
    fn test_accepts_everything() {
        let schema = Schema::any();
        assert!(schema.is_optional());
        assert!(schema.is_nullable());
        for value in [json!(null), json!(1), json!("s"), json!([1, 2]), json!({"a": 1})] {
            assert_eq!(schema.forge(&value).into_result(), Ok(Some(value.clone())));
        }
        assert_eq!(schema.forge(Input::Absent).into_result(), Ok(None));
    }

    #[test]
    fn test_checks_still_run() {
        let schema = Schema::unknown().check(|v| v.is_string(), "text only");
        assert!(schema.forge(&json!("x")).is_success());
        assert!(schema.forge(&json!(1)).is_failure());
        // Absent short-circuits before the check.
        assert!(schema.forge(Input::Absent).is_success());
    }
}
