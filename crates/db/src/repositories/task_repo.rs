//! Repository for the `tasks` table.

use sqlx::PgPool;
use taskboard_core::task::Task;
use taskboard_core::types::TaskId;

use crate::models::task::TaskRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, done";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task row.
    pub async fn insert(pool: &PgPool, task: &Task) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO tasks (id, title, done) VALUES ($1, $2, $3)")
            .bind(task.id)
            .bind(&task.title)
            .bind(task.done)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// List all tasks, oldest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<TaskRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY created_at, id");
        sqlx::query_as::<_, TaskRow>(&query).fetch_all(pool).await
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &PgPool, id: TaskId) -> Result<Option<TaskRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, TaskRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Replace title and done flag. Returns the number of rows updated.
    pub async fn update(
        pool: &PgPool,
        id: TaskId,
        title: &str,
        done: bool,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE tasks SET title = $2, done = $3 WHERE id = $1")
            .bind(id)
            .bind(title)
            .bind(done)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Permanently delete a task. Returns the number of rows removed.
    pub async fn delete(pool: &PgPool, id: TaskId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
