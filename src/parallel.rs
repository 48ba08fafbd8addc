//! Batch forging on rayon's thread pool.
//!
//! Schemas are immutable and `Send + Sync`, so one schema can forge many
//! values at once. Results come back in input order.

use rayon::prelude::*;
use serde_json::Value;

use crate::input::Input;
use crate::schema::SchemaLike;
use crate::ForgeResult;

/// Forges a batch of values in parallel.
///
/// Implemented for every [`SchemaLike`], trait objects included.
///
/// # Example
///
/// ```rust
/// use forgeval::{ForgeParallel, Schema};
/// use serde_json::json;
///
/// let schema = Schema::number().integer();
/// let results = schema.forge_par(&[json!(1), json!(1.5), json!(2)]);
///
/// assert!(results[0].is_success());
/// assert!(results[1].is_failure());
/// assert!(results[2].is_success());
/// ```
pub trait ForgeParallel: SchemaLike {
    /// Forges each of `values`, returning one result per value, in order.
    fn forge_par(&self, values: &[Value]) -> Vec<ForgeResult> {
        values
            .par_iter()
            .map(|value| self.forge_input(Input::Present(value)))
            .collect()
    }
}

impl<S: SchemaLike + ?Sized> ForgeParallel for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Schema;
    use serde_json::json;

    #[test]
    fn test_order_is_preserved() {
        let schema = Schema::string().min_len(2);
        let values: Vec<Value> = (0..200)
            .map(|i| if i % 3 == 0 { json!("x") } else { json!(format!("item-{}", i)) })
            .collect();

        let results = schema.forge_par(&values);
        assert_eq!(results.len(), values.len());
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.is_failure(), i % 3 == 0, "index {}", i);
        }
    }

    #[test]
    fn test_trait_object() {
        let schema: Box<dyn SchemaLike> = Box::new(Schema::boolean());
        let results = schema.forge_par(&[json!(true), json!("no")]);
        assert!(results[0].is_success());
        assert!(results[1].is_failure());
    }
}
