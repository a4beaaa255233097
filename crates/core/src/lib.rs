//! Domain layer for the task service.
//!
//! Holds the task entity, its validation rules, the store capability the
//! service runs against, and [`service::TaskService`] which implements the
//! five task operations. Nothing here knows about HTTP or SQL.

pub mod error;
pub mod service;
pub mod store;
pub mod task;
pub mod types;
