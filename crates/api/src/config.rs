use std::path::PathBuf;
use std::str::FromStr;

use taskboard_db::{DbConfig, DEFAULT_MIGRATIONS_DIR};

/// Default `RUST_LOG` filter when none is set.
pub const DEFAULT_LOG_FILTER: &str = "taskboard_api=debug,taskboard_db=debug,tower_http=debug";

/// Which [`taskboard_core::store::TaskStore`] implementation to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(format!("expected `postgres` or `memory`, got `{other}`")),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `pretty` or `json`, got `{other}`")),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid value for {var}: {reason}")]
pub struct ConfigError {
    pub var: &'static str,
    pub reason: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub store_backend: StoreBackend,
    pub db: DbConfig,
    pub log_format: LogFormat,
    /// Target directory of `migrate-create` (default: `db/migrations`).
    pub migrations_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8080`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORE_BACKEND`        | `postgres`                 |
    /// | `DATABASE_URL`         | unset                      |
    /// | `DB_HOST`              | `localhost`                |
    /// | `DB_PORT`              | `5432`                     |
    /// | `DB_USER`              | `postgres`                 |
    /// | `DB_PASSWORD`          | empty                      |
    /// | `DB_NAME`              | `postgres`                 |
    /// | `DB_SSLMODE`           | `disable`                  |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    /// | `LOG_FORMAT`           | `pretty`                   |
    /// | `MIGRATIONS_DIR`       | `db/migrations`            |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let string = |var: &str, default: &str| lookup(var).unwrap_or_else(|| default.to_string());

        let cors_origins: Vec<String> = string("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let defaults = DbConfig::default();
        let db = DbConfig {
            url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            host: string("DB_HOST", &defaults.host),
            port: parse(&lookup, "DB_PORT", defaults.port)?,
            user: string("DB_USER", &defaults.user),
            password: string("DB_PASSWORD", &defaults.password),
            database: string("DB_NAME", &defaults.database),
            ssl_mode: string("DB_SSLMODE", &defaults.ssl_mode),
            max_connections: parse(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
        };

        Ok(Self {
            host: string("HOST", "0.0.0.0"),
            port: parse(&lookup, "PORT", 8080)?,
            cors_origins,
            request_timeout_secs: parse(&lookup, "REQUEST_TIMEOUT_SECS", 30)?,
            store_backend: parse(&lookup, "STORE_BACKEND", StoreBackend::Postgres)?,
            db,
            log_format: parse(&lookup, "LOG_FORMAT", LogFormat::Pretty)?,
            migrations_dir: PathBuf::from(string("MIGRATIONS_DIR", DEFAULT_MIGRATIONS_DIR)),
        })
    }
}

/// Parse `var` if set, otherwise fall back to `default`.
fn parse<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError {
            var,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}
