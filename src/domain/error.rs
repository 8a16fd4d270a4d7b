//! Domain Layer - Error Types
//!
//! User-facing error taxonomy for task operations.

use serde::{Deserialize, Serialize};

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    /// Task name was empty or blank; rejected before any store call
    InvalidName(String),
    /// No task with the requested id, locally or in the remote store
    NotFound(String),
    /// The remote store call failed (transport error or non-success status)
    Store(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::InvalidName(msg) => write!(f, "Invalid name: {}", msg),
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::Store(msg) => write!(f, "Store error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
