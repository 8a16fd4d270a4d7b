//! In-Memory Task Store
//!
//! Mirrors the remote store's semantics without the network: client-supplied
//! ids on create are honored as-is (the server appends whatever it is sent),
//! update and delete answer not-found for unknown ids.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::error::{StoreError, StoreResult};
use super::traits::TaskStore;
use crate::domain::Task;

/// In-memory implementation of the task store
#[derive(Clone, Default)]
pub struct InMemoryTaskStore {
    tasks: Arc<Mutex<Vec<Task>>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Arc::new(Mutex::new(tasks)),
        }
    }

    /// The remote store's seed collection, useful for demos and tests
    pub fn seeded() -> Self {
        Self::from_tasks(vec![
            Task::new(1, "You can create tasks".to_string()),
            Task::new(2, "You can read tasks".to_string()),
            Task {
                id: 3,
                name: "You can update tasks".to_string(),
                completion: true,
            },
            Task::new(4, "You can delete tasks".to_string()),
        ])
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn list(&self) -> StoreResult<Vec<Task>> {
        Ok(self.tasks.lock().await.clone())
    }

    async fn create(&self, task: &Task) -> StoreResult<Task> {
        let mut tasks = self.tasks.lock().await;
        tasks.push(task.clone());
        Ok(task.clone())
    }

    async fn find_by_id(&self, id: u32) -> StoreResult<Option<Task>> {
        let tasks = self.tasks.lock().await;
        Ok(tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn update(&self, task: &Task) -> StoreResult<Task> {
        let mut tasks = self.tasks.lock().await;
        match tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => {
                *slot = task.clone();
                Ok(task.clone())
            }
            None => Err(StoreError::NotFound(task.id)),
        }
    }

    async fn delete(&self, id: u32) -> StoreResult<()> {
        let mut tasks = self.tasks.lock().await;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
