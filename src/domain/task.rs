//! Task Entity
//!
//! A to-do item with identity, label, and completion flag. Field names match
//! the remote store's JSON wire format exactly (`id`, `name`, `completion`).

use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};

/// A to-do item as stored by the remote store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the remote store
    pub id: u32,
    /// Non-empty text label
    pub name: String,
    /// Completion status
    pub completion: bool,
}

impl Task {
    /// Create a new, not-yet-completed task
    pub fn new(id: u32, name: String) -> Self {
        Self {
            id,
            name,
            completion: false,
        }
    }

    /// Return a copy with the completion flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            completion: !self.completion,
            ..self.clone()
        }
    }

    /// Return a copy with a new name merged into the existing record
    pub fn renamed(&self, name: String) -> Self {
        Self {
            name,
            ..self.clone()
        }
    }

    /// Validate a user-supplied task name.
    ///
    /// Blank names are rejected with a typed error instead of a blocking
    /// dialog, so callers can surface the failure however they render.
    pub fn validate_name(raw: &str) -> DomainResult<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidName(
                "task name must not be empty".to_string(),
            ));
        }
        Ok(trimmed.to_string())
    }
}
