//! User store error types.

use thiserror::Error;

/// Errors that can occur during user store operations.
///
/// A missing user is not an error at this level; lookups return `None`.
#[derive(Debug, Error)]
pub enum UserStoreError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for user store operations.
pub type UserStoreResult<T> = Result<T, UserStoreError>;
