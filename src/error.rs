//! Error type for tree queries with a caller precondition.

use thiserror::Error;

/// Errors returned by [`Tree`](crate::Tree) operations.
///
/// Lookups and removals of missing values are not errors; they report absence
/// through `Option` / `bool`. Only queries that require the value to be
/// present fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeError {
    #[error("value is not present in the tree")]
    NotFound,
}

/// Result type for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;
