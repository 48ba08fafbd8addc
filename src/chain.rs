//! Persistent check list.
//!
//! Deriving a schema appends to a shared list instead of copying it: the new
//! schema points at a fresh node whose `prev` is the old head. Older schemas
//! keep their own head and never see checks added after them.

use std::sync::Arc;

use crate::check::Check;

struct Node {
    check: Check,
    prev: Option<Arc<Node>>,
}

/// An immutable, append-only list of checks in registration order.
#[derive(Clone, Default)]
pub(crate) struct Checks {
    head: Option<Arc<Node>>,
    len: usize,
}

impl Checks {
    /// A list holding just `first`.
    pub(crate) fn with(first: Check) -> Self {
        Self::default().push(first)
    }

    /// Returns a list with `check` appended; `self` is unchanged.
    pub(crate) fn push(&self, check: Check) -> Self {
        Self {
            head: Some(Arc::new(Node {
                check,
                prev: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    /// Returns a list whose most recent check is `f(last)`.
    ///
    /// Only the last node is rebuilt; everything before it stays shared.
    pub(crate) fn map_last(&self, f: impl FnOnce(Check) -> Check) -> Self {
        match &self.head {
            Some(node) => Self {
                head: Some(Arc::new(Node {
                    check: f(node.check.clone()),
                    prev: node.prev.clone(),
                })),
                len: self.len,
            },
            None => self.clone(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    fn last(&self) -> Option<&Check> {
        self.head.as_ref().map(|node| &node.check)
    }

    /// Checks in registration order.
    pub(crate) fn to_vec(&self) -> Vec<&Check> {
        let mut out = Vec::with_capacity(self.len);
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            out.push(&node.check);
            cursor = node.prev.as_deref();
        }
        out.reverse();
        out
    }

    #[cfg(test)]
    fn shares_tail_with(&self, other: &Checks) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => match &a.prev {
                Some(prev) => Arc::ptr_eq(prev, b),
                None => false,
            },
            _ => false,
        }
    }
}

impl Drop for Checks {
    // Unlink iteratively so long chains don't overflow the stack on drop.
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(node) = cursor {
            match Arc::try_unwrap(node) {
                Ok(mut node) => cursor = node.prev.take(),
                Err(_) => break,
            }
        }
    }
}

impl std::fmt::Debug for Checks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.to_vec().iter().map(|c| c.name()))
            .finish()
    }
}
