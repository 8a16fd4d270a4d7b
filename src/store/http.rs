//! HTTP Task Store
//!
//! reqwest-backed implementation of [`TaskStore`] against the remote REST
//! surface: `GET/POST /tasks`, `GET/PUT/DELETE /tasks/{id}`. All bodies are
//! JSON. Response statuses are checked and mapped to typed errors; a 404
//! becomes [`StoreError::NotFound`].

use async_trait::async_trait;
use tracing::debug;

use super::error::{StoreError, StoreResult};
use super::traits::TaskStore;
use crate::domain::Task;

/// Default base URL of the remote store
pub const DEFAULT_BASE_URL: &str = "http://localhost:1239";

/// HTTP implementation of the task store
pub struct HttpTaskStore {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTaskStore {
    /// Create a store client against the given base URL (no trailing slash)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn task_url(&self, id: u32) -> String {
        format!("{}/tasks/{}", self.base_url, id)
    }

    /// Map a non-success response to the appropriate store error
    async fn map_failure(id: Option<u32>, response: reqwest::Response) -> StoreError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        debug!(status, %body, "store request rejected");
        match (status, id) {
            (404, Some(id)) => StoreError::NotFound(id),
            _ => StoreError::Status { status, body },
        }
    }
}

impl Default for HttpTaskStore {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl TaskStore for HttpTaskStore {
    async fn list(&self) -> StoreResult<Vec<Task>> {
        debug!(url = %self.collection_url(), "GET task collection");
        let response = self.client.get(self.collection_url()).send().await?;
        if !response.status().is_success() {
            return Err(Self::map_failure(None, response).await);
        }
        Ok(response.json().await?)
    }

    async fn create(&self, task: &Task) -> StoreResult<Task> {
        debug!(id = task.id, name = %task.name, "POST new task");
        let response = self
            .client
            .post(self.collection_url())
            .json(task)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::map_failure(None, response).await);
        }
        Ok(response.json().await?)
    }

    async fn find_by_id(&self, id: u32) -> StoreResult<Option<Task>> {
        debug!(id, "GET task by id");
        let response = self.client.get(self.task_url(id)).send().await?;
        if response.status().as_u16() == 404 {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(Self::map_failure(Some(id), response).await);
        }
        Ok(Some(response.json().await?))
    }

    async fn update(&self, task: &Task) -> StoreResult<Task> {
        debug!(id = task.id, "PUT task");
        let response = self
            .client
            .put(self.task_url(task.id))
            .json(task)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(Self::map_failure(Some(task.id), response).await);
        }
        Ok(response.json().await?)
    }

    async fn delete(&self, id: u32) -> StoreResult<()> {
        debug!(id, "DELETE task");
        let response = self.client.delete(self.task_url(id)).send().await?;
        if !response.status().is_success() {
            return Err(Self::map_failure(Some(id), response).await);
        }
        Ok(())
    }
}
