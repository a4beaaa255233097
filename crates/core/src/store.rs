//! The persistence capability the task service runs against.
//!
//! Implementations own their connection handling and must be safe to share
//! across concurrently executing requests. Row-count results let the service
//! detect a missing task from the mutating statement itself, without a
//! separate existence read.

use async_trait::async_trait;

use crate::task::Task;
use crate::types::TaskId;

/// Boxed error produced by a store backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failure reported by a [`TaskStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend rejected or failed the operation for a reason the service
    /// cannot act on (connection loss, SQL error, ...).
    #[error("Store backend error: {0}")]
    Backend(#[source] BoxError),

    /// A primary key collision on insert.
    #[error("Store conflict: {0}")]
    Conflict(String),
}

impl StoreError {
    /// Wrap any backend error.
    pub fn backend(err: impl Into<BoxError>) -> Self {
        Self::Backend(err.into())
    }
}

/// Insert/select/update/delete by primary key on the `tasks` table.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Persist a new task.
    async fn insert(&self, task: &Task) -> Result<(), StoreError>;

    /// All tasks, in the store's own order.
    async fn select_all(&self) -> Result<Vec<Task>, StoreError>;

    /// The task with `id`, or `None` if absent.
    async fn select_one(&self, id: TaskId) -> Result<Option<Task>, StoreError>;

    /// Replace `title` and `done` of the task with `id`. Returns rows affected.
    async fn update_by_id(&self, id: TaskId, title: &str, done: bool) -> Result<u64, StoreError>;

    /// Remove the task with `id`. Returns rows affected.
    async fn delete_by_id(&self, id: TaskId) -> Result<u64, StoreError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
