//! The result vocabulary shared by every schema.
//!
//! [`Issue`] records one failure, [`ForgeIssues`] is the non-empty list a
//! failed forge returns, and [`CheckError`] is what a fallible check reports
//! when it cannot decide.

mod check_error;
mod issue;

pub use check_error::CheckError;
pub use issue::{ForgeIssues, Issue, IssueCode};
