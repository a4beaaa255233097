//! Command-line entry points besides serving HTTP.
//!
//! ```text
//! taskboard-api                  run the HTTP server
//! taskboard-api migrate-up       apply pending migrations
//! taskboard-api migrate-down     revert the latest applied migration
//! taskboard-api migrate-status   show applied/pending migrations
//! taskboard-api migrate-create <name>
//!                                write an empty up/down pair to `MIGRATIONS_DIR`
//! ```

use std::path::Path;

use taskboard_db::{CreateMigrationError, DbConfig};

use crate::store::{connect_pool, StartupError};

/// Usage lines logged for an unknown command.
pub const USAGE: &[&str] = &[
    "  migrate-up     - apply all pending migrations",
    "  migrate-down   - revert the latest applied migration",
    "  migrate-status - show migration status",
    "  migrate-create <name> - create a new migration",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Serve,
    Migrate(MigrateCommand),
    CreateMigration { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateCommand {
    Up,
    Down,
    Status,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("migrate-create needs a migration name: migrate-create <name>")]
    MissingMigrationName,
}

impl Command {
    /// Parse the process arguments; no argument means [`Command::Serve`].
    ///
    /// Only `migrate-create` reads a second argument, the rest are ignored.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, CommandError> {
        let Some(command) = args.next() else {
            return Ok(Self::Serve);
        };

        match command.as_str() {
            "serve" => Ok(Self::Serve),
            "migrate-up" => Ok(Self::Migrate(MigrateCommand::Up)),
            "migrate-down" => Ok(Self::Migrate(MigrateCommand::Down)),
            "migrate-status" => Ok(Self::Migrate(MigrateCommand::Status)),
            "migrate-create" => args
                .next()
                .map(|name| Self::CreateMigration { name })
                .ok_or(CommandError::MissingMigrationName),
            _ => Err(CommandError::Unknown(command)),
        }
    }
}

/// Write a new empty migration pair named `name` into `dir`.
pub async fn run_create_migration(dir: &Path, name: &str) -> Result<(), CreateMigrationError> {
    let files = taskboard_db::create_migration(dir, name, chrono::Utc::now()).await?;
    tracing::info!(up = %files.up.display(), "Fill in the up migration");
    tracing::info!(down = %files.down.display(), "Fill in the down migration");
    Ok(())
}

/// Run a migration command against the configured database.
pub async fn run_migration_command(
    command: MigrateCommand,
    db: &DbConfig,
) -> Result<(), StartupError> {
    let pool = connect_pool(db).await?;

    match command {
        MigrateCommand::Up => {
            taskboard_db::run_migrations(&pool).await?;
            tracing::info!("Migrations applied");
        }
        MigrateCommand::Down => match taskboard_db::rollback_latest(&pool).await? {
            Some(version) => tracing::info!(version, "Reverted latest migration"),
            None => tracing::info!("No applied migrations to revert"),
        },
        MigrateCommand::Status => {
            for status in taskboard_db::migration_status(&pool).await? {
                let state = if status.applied { "applied" } else { "pending" };
                tracing::info!(
                    version = status.version,
                    description = %status.description,
                    state,
                    "Migration",
                );
            }
        }
    }

    pool.close().await;
    Ok(())
}
