//! Store Layer - Error Types

use crate::domain::DomainError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors produced by a task store backend
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store has no task with this id (HTTP 404)
    #[error("task {0} not found in store")]
    NotFound(u32),

    /// The store answered with a non-success status
    #[error("store returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never completed (connection refused, timeout, bad body)
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => DomainError::NotFound(format!("task {}", id)),
            other => DomainError::Store(other.to_string()),
        }
    }
}
