pub mod health;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                 service and store health
///
/// /tasks                  list, create
/// /tasks/{id}             get, update, delete
/// ```
///
/// Anything else reaches the fallback in [`crate::router`], which runs the
/// same task resolution and reports `/tasks/` as a bad path and everything
/// else as not found.
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(tasks::router())
}
