//! Storage error types.
//!
//! Used by store implementations and callers of storage APIs.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("User not found: {0}")]
    UserNotFound(i64),
    #[error("Storage backend error: {0}")]
    Backend(String),
}
