//! [`TaskStore`] backed by PostgreSQL.

use async_trait::async_trait;
use taskboard_core::store::{StoreError, TaskStore};
use taskboard_core::task::Task;
use taskboard_core::types::TaskId;

use crate::repositories::TaskRepo;
use crate::DbPool;

/// PostgreSQL unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

/// Task store over a shared connection pool. The pool handles concurrent use.
#[derive(Clone)]
pub struct PgTaskStore {
    pool: DbPool,
}

impl PgTaskStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Map a sqlx error onto the store taxonomy.
///
/// - Unique violations (SQLSTATE 23505) become [`StoreError::Conflict`].
/// - Everything else is an opaque backend error.
fn classify(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            let constraint = db_err.constraint().unwrap_or("unknown");
            return StoreError::Conflict(format!(
                "Duplicate value violates unique constraint: {constraint}"
            ));
        }
    }
    StoreError::backend(err)
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn insert(&self, task: &Task) -> Result<(), StoreError> {
        TaskRepo::insert(&self.pool, task).await.map_err(classify)
    }

    async fn select_all(&self) -> Result<Vec<Task>, StoreError> {
        let rows = TaskRepo::list(&self.pool).await.map_err(classify)?;
        Ok(rows.into_iter().map(Task::from).collect())
    }

    async fn select_one(&self, id: TaskId) -> Result<Option<Task>, StoreError> {
        let row = TaskRepo::find_by_id(&self.pool, id)
            .await
            .map_err(classify)?;
        Ok(row.map(Task::from))
    }

    async fn update_by_id(&self, id: TaskId, title: &str, done: bool) -> Result<u64, StoreError> {
        TaskRepo::update(&self.pool, id, title, done)
            .await
            .map_err(classify)
    }

    async fn delete_by_id(&self, id: TaskId) -> Result<u64, StoreError> {
        TaskRepo::delete(&self.pool, id).await.map_err(classify)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await.map_err(classify)
    }
}
