#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use taskboard_core::service::TaskService;
use taskboard_core::store::{StoreError, TaskStore};
use taskboard_core::task::Task;
use taskboard_core::types::TaskId;
use taskboard_db::{DbConfig, MemoryTaskStore};
use tower::ServiceExt;

use taskboard_api::config::{LogFormat, ServerConfig, StoreBackend};
use taskboard_api::router::build_app_router;
use taskboard_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        db: DbConfig::default(),
        log_format: LogFormat::Pretty,
        migrations_dir: taskboard_db::DEFAULT_MIGRATIONS_DIR.into(),
    }
}

/// Store whose backend is always unreachable.
pub struct UnreachableStore;

#[async_trait]
impl TaskStore for UnreachableStore {
    async fn insert(&self, _task: &Task) -> Result<(), StoreError> {
        Err(StoreError::backend("connection refused"))
    }

    async fn select_all(&self) -> Result<Vec<Task>, StoreError> {
        Err(StoreError::backend("connection refused"))
    }

    async fn select_one(&self, _id: TaskId) -> Result<Option<Task>, StoreError> {
        Err(StoreError::backend("connection refused"))
    }

    async fn update_by_id(&self, _id: TaskId, _title: &str, _done: bool) -> Result<u64, StoreError> {
        Err(StoreError::backend("connection refused"))
    }

    async fn delete_by_id(&self, _id: TaskId) -> Result<u64, StoreError> {
        Err(StoreError::backend("connection refused"))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::backend("connection refused"))
    }
}

/// Build the full application router over the given store.
pub fn build_app_with_store(store: Arc<dyn TaskStore>) -> Router {
    let state = AppState {
        service: TaskService::new(store),
    };
    build_app_router(state, &test_config())
}

/// Build the full application router over a fresh in-memory store.
///
/// Returns the store too so a test can reuse it across several apps.
pub fn build_test_app() -> (Router, Arc<MemoryTaskStore>) {
    let store = Arc::new(MemoryTaskStore::new());
    (build_app_with_store(store.clone()), store)
}

pub async fn send(app: Router, method: Method, uri: &str, body: Body) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty()).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty()).await
}

pub async fn post_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Body::from(json.to_string())).await
}

pub async fn put_json(app: Router, uri: &str, json: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Body::from(json.to_string())).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
