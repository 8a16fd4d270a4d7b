//! Task List Controller
//!
//! Owns the local task collection and keeps it consistent with a remote
//! store. Two synchronization disciplines are in play:
//!
//! - **Reload-after-write** (add / edit / delete): the mutation is sent,
//!   then the full collection is refetched so the store-confirmed state
//!   wins.
//! - **Optimistic toggle**: the completion flag is flipped locally before
//!   the update call; if the call fails the flip is rolled back.
//!
//! Every store call is awaited before the operation returns. The controller
//! takes `&mut self` on mutations, so operations cannot interleave.

use tracing::{debug, info, warn};

use crate::domain::{DomainError, DomainResult, Task};
use crate::store::TaskStore;

/// Controller for a task list backed by a remote store
pub struct TaskListController<S: TaskStore> {
    store: S,
    tasks: Vec<Task>,
}

impl<S: TaskStore> TaskListController<S> {
    /// Create a controller with an empty local collection
    pub fn new(store: S) -> Self {
        Self {
            store,
            tasks: Vec::new(),
        }
    }

    /// The current local collection, in store order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Fetch the full collection and replace local state unconditionally.
    ///
    /// On failure local state is left unchanged and the error is returned.
    pub async fn load(&mut self) -> DomainResult<()> {
        let fetched = self.store.list().await?;
        info!(count = fetched.len(), "task collection loaded");
        self.tasks = fetched;
        Ok(())
    }

    /// Validate the name, create the task, then reload.
    ///
    /// The client-chosen id (max existing id + 1) is a candidate only; the
    /// reload adopts whatever the store confirmed.
    pub async fn add_task(&mut self, name: &str) -> DomainResult<Task> {
        let name = Task::validate_name(name)?;
        let candidate = Task::new(self.next_id(), name);
        debug!(id = candidate.id, name = %candidate.name, "adding task");
        let created = self.store.create(&candidate).await?;
        self.load().await?;
        Ok(created)
    }

    /// Flip completion locally, then push the updated record to the store.
    ///
    /// The local flip is optimistic; it is rolled back if the store
    /// rejects the update.
    pub async fn toggle_completion(&mut self, id: u32) -> DomainResult<Task> {
        let pos = self.position_of(id)?;
        let before = self.tasks[pos].clone();
        let flipped = before.toggled();
        self.tasks[pos] = flipped.clone();
        match self.store.update(&flipped).await {
            Ok(confirmed) => {
                self.tasks[pos] = confirmed.clone();
                Ok(confirmed)
            }
            Err(err) => {
                warn!(id, error = %err, "toggle rejected by store, rolling back");
                self.tasks[pos] = before;
                Err(err.into())
            }
        }
    }

    /// Validate the new name, push it merged into the existing record,
    /// then reload.
    pub async fn edit_task(&mut self, id: u32, new_name: &str) -> DomainResult<Task> {
        let name = Task::validate_name(new_name)?;
        let pos = self.position_of(id)?;
        let updated = self.tasks[pos].renamed(name);
        debug!(id, name = %updated.name, "editing task");
        let confirmed = self.store.update(&updated).await?;
        self.load().await?;
        Ok(confirmed)
    }

    /// Delete the task from the store, then reload
    pub async fn delete_task(&mut self, id: u32) -> DomainResult<()> {
        self.position_of(id)?;
        debug!(id, "deleting task");
        self.store.delete(id).await?;
        self.load().await?;
        Ok(())
    }

    fn position_of(&self, id: u32) -> DomainResult<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("task {}", id)))
    }

    fn next_id(&self) -> u32 {
        self.tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1
    }
}
