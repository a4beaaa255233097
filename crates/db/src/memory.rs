//! In-process [`TaskStore`] for local development and tests.

use async_trait::async_trait;
use taskboard_core::store::{StoreError, TaskStore};
use taskboard_core::task::Task;
use taskboard_core::types::TaskId;
use tokio::sync::RwLock;

/// Keeps tasks in insertion order behind an async `RwLock`.
///
/// Designed to be wrapped in `Arc` and shared across the application. Data
/// lives only as long as the process.
#[derive(Default)]
pub struct MemoryTaskStore {
    tasks: RwLock<Vec<Task>>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tasks.
    pub async fn len(&self) -> usize {
        self.tasks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tasks.read().await.is_empty()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn insert(&self, task: &Task) -> Result<(), StoreError> {
        let mut tasks = self.tasks.write().await;
        if tasks.iter().any(|t| t.id == task.id) {
            return Err(StoreError::Conflict(format!(
                "task {} already exists",
                task.id
            )));
        }
        tasks.push(task.clone());
        Ok(())
    }

    async fn select_all(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.tasks.read().await.clone())
    }

    async fn select_one(&self, id: TaskId) -> Result<Option<Task>, StoreError> {
        Ok(self.tasks.read().await.iter().find(|t| t.id == id).cloned())
    }

    async fn update_by_id(&self, id: TaskId, title: &str, done: bool) -> Result<u64, StoreError> {
        let mut tasks = self.tasks.write().await;
        let Some(task) = tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(0);
        };
        task.title = title.to_string();
        task.done = done;
        Ok(1)
    }

    async fn delete_by_id(&self, id: TaskId) -> Result<u64, StoreError> {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        Ok((before - tasks.len()) as u64)
    }
}
