//! Taskboard API server library.
//!
//! Exposes the building blocks (config, state, error handling, routing,
//! store bootstrap, migration commands) so integration tests and the binary
//! entrypoint can both access them.

pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
pub mod store;
