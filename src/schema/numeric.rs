//! Number schemas.
//!
//! [`NumberSchema`] forges JSON numbers. Bounds are compared as `f64`, so
//! integers and floats mix freely; [`integer`](TypedSchema::integer) rejects
//! values with a fractional part.

use std::ops::RangeInclusive;

use serde_json::Value;

use super::modal::{NonNull, Nullability, Presence, Required, Sealed};
use super::typed::{Kind, TypedSchema};
use crate::check::{Check, CheckConfig};

/// Guard for numeric values.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberKind;

impl Sealed for NumberKind {}

impl Kind for NumberKind {
    const NAME: &'static str = "number";

    fn accepts(value: &Value) -> bool {
        value.is_number()
    }
}

/// A schema for numeric values.
///
/// # Example
///
/// ```rust
/// use forgeval::Schema;
/// use serde_json::json;
///
/// let schema = Schema::number().gt(0).lt(10).integer();
///
/// assert!(schema.forge(&json!(5)).is_success());
///
/// let issues = schema.forge(&json!(10)).into_result().unwrap_err();
/// assert_eq!(issues.len(), 1);
/// assert_eq!(issues.first().check, "lt");
/// ```
pub type NumberSchema<O = Required, N = NonNull> = TypedSchema<NumberKind, O, N>;

fn is_whole(value: &Value) -> bool {
    value.is_i64() || value.is_u64() || value.as_f64().is_some_and(|f| f.fract() == 0.0)
}

impl<O: Presence, N: Nullability> TypedSchema<NumberKind, O, N> {
    fn bound(&self, name: &'static str, test: impl Fn(f64) -> bool + Send + Sync + 'static) -> Self {
        self.with_check(Check::predicate(
            name,
            move |v| v.as_f64().is_some_and(&test),
            CheckConfig::new(),
        ))
    }

    /// Requires a value strictly less than `bound`.
    pub fn lt(&self, bound: impl Into<f64>) -> Self {
        let bound = bound.into();
        self.bound("lt", move |n| n < bound)
    }

    /// Requires a value less than or equal to `bound`.
    pub fn lte(&self, bound: impl Into<f64>) -> Self {
        let bound = bound.into();
        self.bound("lte", move |n| n <= bound)
    }

    /// Requires a value strictly greater than `bound`.
    pub fn gt(&self, bound: impl Into<f64>) -> Self {
        let bound = bound.into();
        self.bound("gt", move |n| n > bound)
    }

    /// Requires a value greater than or equal to `bound`.
    pub fn gte(&self, bound: impl Into<f64>) -> Self {
        let bound = bound.into();
        self.bound("gte", move |n| n >= bound)
    }

    /// Requires a value inside `range` (both ends included).
    ///
    /// # Example
    ///
    /// ```rust
    /// use forgeval::Schema;
    /// use serde_json::json;
    ///
    /// let percent = Schema::number().range(0.0..=100.0);
    /// assert!(percent.forge(&json!(100)).is_success());
    /// assert!(percent.forge(&json!(100.5)).is_failure());
    /// ```
    pub fn range(&self, range: RangeInclusive<f64>) -> Self {
        self.bound("range", move |n| range.contains(&n))
    }

    /// Requires a value greater than zero.
    pub fn positive(&self) -> Self {
        self.bound("positive", |n| n > 0.0)
    }

    /// Requires a value of zero or more.
    pub fn non_negative(&self) -> Self {
        self.bound("non_negative", |n| n >= 0.0)
    }

    /// Requires a value less than zero.
    pub fn negative(&self) -> Self {
        self.bound("negative", |n| n < 0.0)
    }

    /// Requires a value without a fractional part. `10.0` counts as whole.
    pub fn integer(&self) -> Self {
        self.with_check(Check::predicate("integer", is_whole, CheckConfig::new()))
    }

    /// Appends a custom predicate over the number.
    pub fn check<F>(&self, predicate: F, config: impl Into<CheckConfig>) -> Self
    where
        F: Fn(f64) -> bool + Send + Sync + 'static,
    {
        self.check_value(move |v| v.as_f64().is_some_and(&predicate), config)
    }
}

#[cfg(test)]
mod tests {
    use crate::{IssueCode, Schema};
    use serde_json::json;

    #[test]
    fn test_zero_is_neither_sign() {
        assert!(Schema::number().positive().forge(&json!(0)).is_failure());
        assert!(Schema::number().negative().forge(&json!(0)).is_failure());
        assert!(Schema::number().non_negative().forge(&json!(0)).is_success());
    }

    #[test]
    fn test_integer() {
        let schema = Schema::number().integer();
        assert!(schema.forge(&json!(3)).is_success());
        assert!(schema.forge(&json!(-3)).is_success());
        assert!(schema.forge(&json!(3.0)).is_success());
        assert!(schema.forge(&json!(u64::MAX)).is_success());

        let issues = schema.forge(&json!(3.5)).into_result().unwrap_err();
        assert_eq!(issues.first().check, "integer");
        assert_eq!(issues.first().code, IssueCode::ValidationError);
    }

    #[test]
    fn test_inclusive_and_exclusive_bounds() {
        assert!(Schema::number().gte(1).forge(&json!(1)).is_success());
        assert!(Schema::number().gt(1).forge(&json!(1)).is_failure());
        assert!(Schema::number().lte(2.5).forge(&json!(2.5)).is_success());
        assert!(Schema::number().lt(2.5).forge(&json!(2.5)).is_failure());
    }

    #[test]
    fn test_numeric_strings_are_rejected() {
        let issues = Schema::number()
            .forge(&json!("5"))
            .into_result()
            .unwrap_err();
        assert_eq!(issues.first().code, IssueCode::ValueError);
        assert_eq!(issues.first().check, "number");
    }

    #[test]
    fn test_typed_check() {
        let even = Schema::number().check(|n| n % 2.0 == 0.0, "must be even");
        assert!(even.forge(&json!(4)).is_success());
        let issues = even.forge(&json!(5)).into_result().unwrap_err();
        assert_eq!(issues.first().message.as_deref(), Some("must be even"));
    }
}
