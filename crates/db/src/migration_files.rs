//! Scaffolding for new reversible migrations.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Directory holding the migrations embedded in [`crate::MIGRATOR`],
/// relative to the workspace root.
pub const DEFAULT_MIGRATIONS_DIR: &str = "db/migrations";

#[derive(Debug, thiserror::Error)]
pub enum CreateMigrationError {
    #[error("Invalid migration name: {0:?}")]
    InvalidName(String),

    #[error("Failed to write migration file: {0}")]
    Io(#[from] std::io::Error),
}

/// The `.up.sql`/`.down.sql` pair written for one migration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationFiles {
    pub up: PathBuf,
    pub down: PathBuf,
}

/// Turn a free-form name into the `snake_case` file name part.
///
/// Returns `None` when nothing alphanumeric is left.
pub fn migration_slug(name: &str) -> Option<String> {
    let mut slug = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.ends_with('_') {
            slug.push('_');
        }
    }
    let slug = slug.trim_matches('_');
    (!slug.is_empty()).then(|| slug.to_string())
}

/// Write an empty `<version>_<slug>.up.sql`/`.down.sql` pair into `dir`.
///
/// The version is `now` as `YYYYMMDDHHMMSS`. Existing files are never
/// overwritten.
pub async fn create_migration(
    dir: &Path,
    name: &str,
    now: DateTime<Utc>,
) -> Result<MigrationFiles, CreateMigrationError> {
    let slug = migration_slug(name).ok_or_else(|| CreateMigrationError::InvalidName(name.into()))?;
    let stamp = now.format("%Y%m%d%H%M%S");

    tokio::fs::create_dir_all(dir).await?;
    let up = dir.join(format!("{stamp}_{slug}.up.sql"));
    let down = dir.join(format!("{stamp}_{slug}.down.sql"));

    write_new(&up, &format!("-- {slug}\n")).await?;
    write_new(&down, &format!("-- Revert {slug}\n")).await?;

    tracing::info!(up = %up.display(), down = %down.display(), "Migration files created");
    Ok(MigrationFiles { up, down })
}

async fn write_new(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;
    file.write_all(contents.as_bytes()).await?;
    file.flush().await
}
