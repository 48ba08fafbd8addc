//! The value handed to a forge call.

use serde_json::Value;

/// A value that may be absent.
///
/// JSON has `null` but no "missing" value, so an object field that is not
/// present is forged as [`Input::Absent`]. `optional()` schemas admit
/// `Absent`; `nullable()` schemas admit `Present(Value::Null)`.
///
/// `&Value` and `Option<&Value>` convert into `Input`, so both
/// `schema.forge(&value)` and `schema.forge(map.get("key"))` work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a> {
    /// No value at all.
    Absent,
    /// A present value, possibly `null`.
    Present(&'a Value),
}

impl<'a> Input<'a> {
    /// Returns true for [`Input::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Input::Absent)
    }

    /// Returns true for a present `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Input::Present(Value::Null))
    }

    /// The present value, if any.
    pub fn value(&self) -> Option<&'a Value> {
        match self {
            Input::Absent => None,
            Input::Present(value) => Some(value),
        }
    }

    pub(crate) fn to_owned_value(self) -> Option<Value> {
        self.value().cloned()
    }
}

impl<'a> From<&'a Value> for Input<'a> {
    fn from(value: &'a Value) -> Self {
        Input::Present(value)
    }
}

impl<'a> From<Option<&'a Value>> for Input<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        match value {
            Some(value) => Input::Present(value),
            None => Input::Absent,
        }
    }
}
