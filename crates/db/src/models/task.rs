//! Row mapping for the `tasks` table.

use sqlx::FromRow;
use taskboard_core::task::Task;
use taskboard_core::types::TaskId;

/// A row from the `tasks` table (bookkeeping columns excluded).
#[derive(Debug, Clone, FromRow)]
pub struct TaskRow {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            done: row.done,
        }
    }
}
