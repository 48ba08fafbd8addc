//! # Forgeval
//!
//! A fluent schema validation library. Build a schema once from chainable,
//! immutable builders, then *forge* runtime values through it to get either
//! the (possibly transformed) value or every issue found, each located by
//! field path and array index.
//!
//! ## Overview
//!
//! A schema is an ordered chain of checks: a type guard, then constraints and
//! custom predicates in the order they were added. The chain stops at the
//! first failing check unless that check is marked [`loose`](TypedSchema::loose).
//! Object and array schemas forge every child before running their own
//! checks, so nested failures are all reported together.
//!
//! ## Core Types
//!
//! - [`Schema`]: entry point for creating schemas
//! - [`TypedSchema`]: the schema type every builder returns
//! - [`Input`]: a value that may be absent
//! - [`Issue`] / [`ForgeIssues`]: one failure / the non-empty list of failures
//! - [`JsonPath`]: absolute location of a failure (e.g. `users[0].email`)
//!
//! ## Example
//!
//! ```rust
//! use forgeval::{IssueCode, Schema};
//! use serde_json::json;
//!
//! let user = Schema::object()
//!     .field("name", Schema::string().min_len(1))
//!     .field("age", Schema::number().integer().gte(0));
//!
//! assert!(user.forge(&json!({"name": "Ada", "age": 36})).is_success());
//!
//! let issues = user
//!     .forge(&json!({"name": "Ada", "age": "x"}))
//!     .into_result()
//!     .unwrap_err();
//! assert_eq!(issues.first().path, vec!["age".to_string()]);
//! assert_eq!(issues.first().code, IssueCode::ValueError);
//! ```
//!
//! ## Async checks
//!
//! [`check_async`](TypedSchema::check_async) adds a predicate returning a
//! future. [`forge_async`](TypedSchema::forge_async) awaits such checks in
//! order and forges object fields and array elements concurrently; a plain
//! [`forge`](TypedSchema::forge) reports them as
//! [`IssueCode::AsyncMethodError`].

mod chain;
mod check;
pub mod error;
mod executor;
pub mod input;
pub mod path;
pub mod schema;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use check::CheckConfig;
pub use error::{CheckError, ForgeIssues, Issue, IssueCode};
pub use input::Input;
pub use path::{JsonPath, PathSegment};
pub use schema::{
    AnySchema, ArraySchema, BooleanSchema, Kind, NonNull, Nullability, Nullable, NumberSchema,
    ObjectSchema, Optional, Presence, Required, Schema, SchemaLike, StringSchema, TypedSchema,
};

#[cfg(feature = "parallel")]
pub use parallel::ForgeParallel;

/// The result of a forge: the forged value (`None` when an absent input was
/// admitted) or every issue found.
pub type ForgeResult = stillwater::Validation<Option<serde_json::Value>, ForgeIssues>;
