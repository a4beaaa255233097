//! Task operations and their invariants.
//!
//! [`TaskService`] is the only place that decides whether a request is
//! acceptable: titles must be non-empty, ids are generated here and never
//! taken from the client, and a missing task is detected from the row count
//! of the mutating statement.

use std::sync::Arc;

use crate::error::CoreError;
use crate::store::TaskStore;
use crate::task::{validate_title, CreateTask, Task, UpdateTask};
use crate::types::{new_task_id, TaskId};

const ENTITY: &str = "Task";

/// Executes task operations against an injected [`TaskStore`].
///
/// Cheap to clone; all clones share the same store handle.
#[derive(Clone)]
pub struct TaskService {
    store: Arc<dyn TaskStore>,
}

impl TaskService {
    pub fn new(store: Arc<dyn TaskStore>) -> Self {
        Self { store }
    }

    /// The store this service runs against.
    pub fn store(&self) -> &Arc<dyn TaskStore> {
        &self.store
    }

    /// All tasks in store order. An empty store yields an empty list.
    pub async fn list(&self) -> Result<Vec<Task>, CoreError> {
        let tasks = self.store.select_all().await?;
        tracing::debug!(count = tasks.len(), "Listed tasks");
        Ok(tasks)
    }

    /// Create a task with a fresh id. `done` always starts out `false`.
    pub async fn create(&self, input: CreateTask) -> Result<Task, CoreError> {
        let title = validate_title(input.title.as_deref())?;

        let task = Task {
            id: new_task_id(),
            title: title.to_string(),
            done: false,
        };
        self.store.insert(&task).await?;

        tracing::info!(task_id = %task.id, "Task created");
        Ok(task)
    }

    /// The task with `id`.
    pub async fn get_one(&self, id: TaskId) -> Result<Task, CoreError> {
        let task = self
            .store
            .select_one(id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        tracing::debug!(task_id = %id, "Fetched task");
        Ok(task)
    }

    /// Replace title and completion flag of the task with `id`.
    pub async fn update(&self, id: TaskId, input: UpdateTask) -> Result<Task, CoreError> {
        let title = validate_title(input.title.as_deref())?;

        let affected = self.store.update_by_id(id, title, input.done).await?;
        if affected == 0 {
            return Err(CoreError::NotFound { entity: ENTITY, id });
        }

        tracing::info!(task_id = %id, done = input.done, "Task updated");
        Ok(Task {
            id,
            title: title.to_string(),
            done: input.done,
        })
    }

    /// Remove the task with `id`.
    pub async fn delete(&self, id: TaskId) -> Result<(), CoreError> {
        let affected = self.store.delete_by_id(id).await?;
        if affected == 0 {
            return Err(CoreError::NotFound { entity: ENTITY, id });
        }

        tracing::info!(task_id = %id, "Task deleted");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
