//! Traits for schema polymorphism.
//!
//! [`SchemaLike`] lets schemas of different kinds and modal states nest
//! inside objects and arrays behind one trait object.

use futures::future::BoxFuture;

use crate::input::Input;
use crate::ForgeResult;

/// A schema that can forge a value, synchronously or asynchronously.
///
/// Every [`TypedSchema`](crate::TypedSchema) implements this trait. The
/// `Send + Sync` bounds let schemas be shared across threads and stored as
/// `Arc<dyn SchemaLike>` inside composite schemas.
///
/// # Example
///
/// ```rust
/// use forgeval::{Input, Schema, SchemaLike};
/// use serde_json::json;
///
/// let schemas: Vec<Box<dyn SchemaLike>> = vec![
///     Box::new(Schema::string().min_len(1)),
///     Box::new(Schema::number().positive().optional()),
/// ];
///
/// let value = json!("hello");
/// assert!(schemas[0].forge_input(Input::Present(&value)).is_success());
/// assert!(schemas[1].forge_input(Input::Absent).is_success());
/// ```
pub trait SchemaLike: Send + Sync {
    /// Forges `input` through the schema's chain.
    fn forge_input(&self, input: Input<'_>) -> ForgeResult;

    /// Forges `input`, awaiting asynchronous checks.
    fn forge_input_async<'a>(&'a self, input: Input<'a>) -> BoxFuture<'a, ForgeResult>;

    /// Whether an absent value is admitted.
    fn is_optional(&self) -> bool;

    /// Whether `null` is admitted.
    fn is_nullable(&self) -> bool;
}
