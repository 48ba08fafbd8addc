//! Schema definitions.
//!
//! Every builder returns a [`TypedSchema`] parameterised by its kind and its
//! modal flags. Builder methods never modify a schema in place: each call
//! returns a new schema that shares the existing checks.
//!
//! # Example
//!
//! ```rust
//! use forgeval::Schema;
//! use serde_json::json;
//!
//! let schema = Schema::string().min_len(1).max_len(100);
//!
//! let result = schema.forge(&json!("hello"));
//! assert!(result.is_success());
//! ```

mod any;
mod array;
mod boolean;
mod modal;
mod numeric;
mod object;
mod string;
mod traits;
mod typed;

pub use any::{AnyKind, AnySchema};
pub use array::{ArrayKind, ArraySchema};
pub use boolean::{BooleanKind, BooleanSchema};
pub use modal::{NonNull, Nullability, Nullable, Optional, Presence, Required};
pub use numeric::{NumberKind, NumberSchema};
pub use object::{ObjectKind, ObjectSchema};
pub use string::{StringKind, StringSchema};
pub use traits::SchemaLike;
pub use typed::{Kind, TypedSchema};

/// Entry point for creating schemas.
///
/// # Example
///
/// ```rust
/// use forgeval::Schema;
///
/// let user = Schema::object()
///     .field("name", Schema::string().min_len(1))
///     .field("age", Schema::number().integer().gte(0))
///     .field("tags", Schema::array(Schema::string()).optional())
///     .field("admin", Schema::boolean().nullable());
/// ```
pub struct Schema;

impl Schema {
    /// Creates a string schema.
    pub fn string() -> StringSchema {
        TypedSchema::new(StringKind)
    }

    /// Creates a number schema.
    ///
    /// # Example
    ///
    /// ```rust
    /// use forgeval::Schema;
    /// use serde_json::json;
    ///
    /// let schema = Schema::number().gte(0).lte(100);
    ///
    /// assert!(schema.forge(&json!(50)).is_success());
    /// assert!(schema.forge(&json!(-5)).is_failure());
    /// assert!(schema.forge(&json!("50")).is_failure());
    /// ```
    pub fn number() -> NumberSchema {
        TypedSchema::new(NumberKind)
    }

    /// Creates a boolean schema.
    pub fn boolean() -> BooleanSchema {
        TypedSchema::new(BooleanKind)
    }

    /// Creates a schema accepting any value, absent and `null` included.
    pub fn any() -> AnySchema {
        TypedSchema::new(AnyKind).optional().nullable()
    }

    /// Same as [`Schema::any`]; reads better where the value is inspected
    /// by later checks.
    pub fn unknown() -> AnySchema {
        Self::any()
    }

    /// Creates an object schema with no fields.
    pub fn object() -> ObjectSchema {
        TypedSchema::new(ObjectKind::default())
    }

    /// Creates an array schema whose elements are forged by `element`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use forgeval::Schema;
    /// use serde_json::json;
    ///
    /// let scores = Schema::array(Schema::number().gte(0));
    ///
    /// let issues = scores.forge(&json!([3, -1, 7])).into_result().unwrap_err();
    /// assert_eq!(issues.first().array_index, Some(1));
    /// ```
    pub fn array<S>(element: S) -> ArraySchema
    where
        S: SchemaLike + 'static,
    {
        TypedSchema::new(ArrayKind::new(element))
    }
}
