use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use taskboard_api::cli::{self, Command};
use taskboard_api::config::{LogFormat, ServerConfig, DEFAULT_LOG_FILTER};
use taskboard_api::router::build_app_router;
use taskboard_api::state::AppState;
use taskboard_api::store::connect_store;
use taskboard_core::service::TaskService;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid configuration");

    // --- Tracing ---
    init_tracing(config.log_format);
    tracing::info!(
        host = %config.host,
        port = config.port,
        store = ?config.store_backend,
        "Loaded server configuration"
    );

    // --- Command ---
    let command = match Command::from_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            tracing::error!("{err}");
            tracing::info!("Available commands:");
            for line in cli::USAGE {
                tracing::info!("{line}");
            }
            std::process::exit(2);
        }
    };

    match command {
        Command::Serve => {}
        Command::Migrate(migrate) => {
            cli::run_migration_command(migrate, &config.db)
                .await
                .expect("Migration command failed");
            return;
        }
        Command::CreateMigration { name } => {
            cli::run_create_migration(&config.migrations_dir, &name)
                .await
                .expect("Failed to create migration");
            return;
        }
    }

    // --- Store ---
    let store = connect_store(&config)
        .await
        .expect("Failed to initialise task store");

    // --- App state ---
    let state = AppState {
        service: TaskService::new(store),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");
    tracing::info!("  GET    /tasks       - list tasks");
    tracing::info!("  POST   /tasks       - create a task");
    tracing::info!("  GET    /tasks/{{id}}  - get a task");
    tracing::info!("  PUT    /tasks/{{id}}  - update a task");
    tracing::info!("  DELETE /tasks/{{id}}  - delete a task");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Install the global subscriber in the configured output format.
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
