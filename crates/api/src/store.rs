//! Store bootstrap: connect, verify and migrate the configured backend.

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use taskboard_core::store::TaskStore;
use taskboard_db::{DbConfig, DbPool, MemoryTaskStore, PgTaskStore};

use crate::config::{ServerConfig, StoreBackend};

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] MigrateError),
}

/// Create the connection pool and verify the database answers.
pub async fn connect_pool(db: &DbConfig) -> Result<DbPool, StartupError> {
    let pool = taskboard_db::create_pool(db).await?;
    tracing::info!(max_connections = db.max_connections, "Database connection pool created");

    taskboard_db::health_check(&pool).await?;
    tracing::info!("Database health check passed");

    Ok(pool)
}

/// Build the task store selected by `config.store_backend`.
///
/// The PostgreSQL backend applies pending migrations before it is handed out.
pub async fn connect_store(config: &ServerConfig) -> Result<Arc<dyn TaskStore>, StartupError> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory task store; data is lost on restart");
            Ok(Arc::new(MemoryTaskStore::new()))
        }
        StoreBackend::Postgres => {
            let pool = connect_pool(&config.db).await?;

            taskboard_db::run_migrations(&pool).await?;
            tracing::info!("Database migrations applied");

            Ok(Arc::new(PgTaskStore::new(pool)))
        }
    }
}
