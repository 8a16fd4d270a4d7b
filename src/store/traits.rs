//! Store Layer - Core Trait
//!
//! Defines the abstract interface for task persistence.
//! Implementations can use HTTP, in-memory, etc.

use async_trait::async_trait;

use super::error::StoreResult;
use crate::domain::Task;

/// Core store trait for task CRUD operations
///
/// All operations are async to support remote backends. Implementations are
/// the source of truth: callers discard local copies in favor of what these
/// methods return.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// List all tasks in store order
    async fn list(&self) -> StoreResult<Vec<Task>>;

    /// Create a new task; the returned record carries the confirmed id
    async fn create(&self, task: &Task) -> StoreResult<Task>;

    /// Find a task by id
    async fn find_by_id(&self, id: u32) -> StoreResult<Option<Task>>;

    /// Replace an existing task's fields
    async fn update(&self, task: &Task) -> StoreResult<Task>;

    /// Delete a task by id
    async fn delete(&self, id: u32) -> StoreResult<()>;
}
