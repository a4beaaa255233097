//! Handlers for the `/tasks` resource.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::Value;
use taskboard_core::service::TaskService;
use taskboard_core::task::{CreateTask, Task, UpdateTask};
use taskboard_core::types::TaskId;

use crate::error::{AppError, AppResult};
use crate::routes::tasks::{resolve, TaskRoute};
use crate::state::AppState;

/// Entry point for every task request and the application fallback.
///
/// Resolves the route first; the body is only decoded for create and update.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> AppResult<Response> {
    let route = resolve(&method, uri.path())?;
    let service = &state.service;

    let response = match route {
        TaskRoute::List => list(service).await?.into_response(),
        TaskRoute::Create => create(service, decode_body(&body)?).await?.into_response(),
        TaskRoute::Get(id) => get_by_id(service, id).await?.into_response(),
        TaskRoute::Update(id) => update(service, id, decode_body(&body)?)
            .await?
            .into_response(),
        TaskRoute::Delete(id) => delete(service, id).await?.into_response(),
    };
    Ok(response)
}

/// Decode a JSON object request body, reporting decoder errors as 400.
///
/// Arrays are rejected up front; serde would otherwise fill the DTO fields
/// by position.
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> AppResult<T> {
    let value: Value = serde_json::from_slice(body).map_err(invalid_body)?;
    if !value.is_object() {
        return Err(AppError::BadRequest(
            "Invalid request body: expected a JSON object".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(invalid_body)
}

fn invalid_body(err: serde_json::Error) -> AppError {
    AppError::BadRequest(format!("Invalid request body: {err}"))
}

/// GET /tasks
pub async fn list(service: &TaskService) -> AppResult<Json<Vec<Task>>> {
    let tasks = service.list().await?;
    Ok(Json(tasks))
}

/// POST /tasks
pub async fn create(
    service: &TaskService,
    input: CreateTask,
) -> AppResult<(StatusCode, Json<Task>)> {
    let task = service.create(input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /tasks/{id}
pub async fn get_by_id(service: &TaskService, id: TaskId) -> AppResult<Json<Task>> {
    let task = service.get_one(id).await?;
    Ok(Json(task))
}

/// PUT /tasks/{id}
pub async fn update(
    service: &TaskService,
    id: TaskId,
    input: UpdateTask,
) -> AppResult<Json<Task>> {
    let task = service.update(id, input).await?;
    Ok(Json(task))
}

/// DELETE /tasks/{id}
pub async fn delete(service: &TaskService, id: TaskId) -> AppResult<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
