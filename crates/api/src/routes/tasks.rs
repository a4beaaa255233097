//! Route resolution for the `/tasks` resource.
//!
//! [`resolve`] maps a method and path to a [`TaskRoute`] with an already
//! parsed identifier, so handlers never see a malformed id. It is pure and
//! touches no state.

use axum::http::Method;
use axum::routing::any;
use axum::Router;
use taskboard_core::types::TaskId;

use crate::handlers::tasks;
use crate::state::AppState;

const COLLECTION: &str = "/tasks";
const ITEM_PREFIX: &str = "/tasks/";

/// Length of the hyphenated 8-4-4-4-12 UUID form.
const HYPHENATED_UUID_LEN: usize = 36;

const COLLECTION_METHODS: &str = "GET, POST";
const ITEM_METHODS: &str = "GET, PUT, DELETE";

/// A resolved task operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskRoute {
    List,
    Create,
    Get(TaskId),
    Update(TaskId),
    Delete(TaskId),
}

/// Why a request could not be mapped to a [`TaskRoute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("route not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed { allow: &'static str },

    #[error("invalid path")]
    InvalidPath,

    #[error("invalid identifier")]
    InvalidId,
}

/// Map `(method, path)` to a task operation.
///
/// ```text
/// GET    /tasks        -> List
/// POST   /tasks        -> Create
/// GET    /tasks/{id}   -> Get
/// PUT    /tasks/{id}   -> Update
/// DELETE /tasks/{id}   -> Delete
/// ```
///
/// The item path must split into exactly `["", "tasks", id]` with a
/// non-empty `id`; the shape and the identifier are checked before the
/// method.
pub fn resolve(method: &Method, path: &str) -> Result<TaskRoute, RouteError> {
    if path == COLLECTION {
        return match *method {
            Method::GET => Ok(TaskRoute::List),
            Method::POST => Ok(TaskRoute::Create),
            _ => Err(RouteError::MethodNotAllowed {
                allow: COLLECTION_METHODS,
            }),
        };
    }

    if !path.starts_with(ITEM_PREFIX) {
        return Err(RouteError::NotFound);
    }

    let segments: Vec<&str> = path.split('/').collect();
    let ["", "tasks", raw_id] = segments.as_slice() else {
        return Err(RouteError::InvalidPath);
    };
    if raw_id.is_empty() {
        return Err(RouteError::InvalidPath);
    }
    let id = parse_task_id(raw_id)?;

    match *method {
        Method::GET => Ok(TaskRoute::Get(id)),
        Method::PUT => Ok(TaskRoute::Update(id)),
        Method::DELETE => Ok(TaskRoute::Delete(id)),
        _ => Err(RouteError::MethodNotAllowed {
            allow: ITEM_METHODS,
        }),
    }
}

/// Parse a hyphenated, case-insensitive UUID.
///
/// `uuid` also accepts simple, braced and URN forms; those are rejected.
pub fn parse_task_id(raw: &str) -> Result<TaskId, RouteError> {
    if raw.len() != HYPHENATED_UUID_LEN {
        return Err(RouteError::InvalidId);
    }
    TaskId::parse_str(raw).map_err(|_| RouteError::InvalidId)
}

/// Task routes.
///
/// Every method is accepted at the axum level and classified by
/// [`resolve`], so malformed ids and unsupported methods get the same JSON
/// error shape as everything else. `/tasks/` does not match the catch-all
/// and is handled by the application fallback.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(COLLECTION, any(tasks::dispatch))
        .route("/tasks/{*rest}", any(tasks::dispatch))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "6f1c2b0e-3d4a-4b5c-9d8e-7f6a5b4c3d2e";

    fn id() -> TaskId {
        TaskId::parse_str(ID).unwrap()
    }

    #[test]
    fn collection_routes() {
        assert_eq!(resolve(&Method::GET, "/tasks"), Ok(TaskRoute::List));
        assert_eq!(resolve(&Method::POST, "/tasks"), Ok(TaskRoute::Create));
    }

    #[test]
    fn item_routes() {
        let path = format!("/tasks/{ID}");
        assert_eq!(resolve(&Method::GET, &path), Ok(TaskRoute::Get(id())));
        assert_eq!(resolve(&Method::PUT, &path), Ok(TaskRoute::Update(id())));
        assert_eq!(resolve(&Method::DELETE, &path), Ok(TaskRoute::Delete(id())));
    }

    #[test]
    fn unsupported_methods_are_not_allowed() {
        assert_eq!(
            resolve(&Method::DELETE, "/tasks"),
            Err(RouteError::MethodNotAllowed { allow: "GET, POST" })
        );
        assert_eq!(
            resolve(&Method::POST, &format!("/tasks/{ID}")),
            Err(RouteError::MethodNotAllowed {
                allow: "GET, PUT, DELETE"
            })
        );
        assert_eq!(
            resolve(&Method::PATCH, &format!("/tasks/{ID}")),
            Err(RouteError::MethodNotAllowed {
                allow: "GET, PUT, DELETE"
            })
        );
    }

    #[test]
    fn uppercase_uuid_is_accepted() {
        let path = format!("/tasks/{}", ID.to_uppercase());
        assert_eq!(resolve(&Method::GET, &path), Ok(TaskRoute::Get(id())));
    }

    #[test]
    fn malformed_ids_are_rejected() {
        for raw in [
            "abc",
            "6f1c2b0e3d4a4b5c9d8e7f6a5b4c3d2e",
            "{6f1c2b0e-3d4a-4b5c-9d8e-7f6a5b4c3d2e}",
            "urn:uuid:6f1c2b0e-3d4a-4b5c-9d8e-7f6a5b4c3d2e",
            "6f1c2b0e-3d4a-4b5c-9d8e-7f6a5b4c3d2g",
            "6f1c2b0e%2F3d4a-4b5c-9d8e-7f6a5b4c3d2",
        ] {
            assert_eq!(
                resolve(&Method::GET, &format!("/tasks/{raw}")),
                Err(RouteError::InvalidId),
                "{raw} should be an invalid identifier"
            );
        }
    }

    #[test]
    fn wrong_shapes_are_invalid_paths() {
        let paths = [
            "/tasks/".to_string(),
            "/tasks//".to_string(),
            format!("/tasks/{ID}/"),
            format!("/tasks/{ID}/extra"),
        ];
        for path in &paths {
            assert_eq!(
                resolve(&Method::GET, path),
                Err(RouteError::InvalidPath),
                "{path} should be an invalid path"
            );
        }
    }

    #[test]
    fn shape_is_checked_before_method() {
        assert_eq!(
            resolve(&Method::PATCH, "/tasks/abc"),
            Err(RouteError::InvalidId)
        );
        assert_eq!(resolve(&Method::PATCH, "/tasks/"), Err(RouteError::InvalidPath));
    }

    #[test]
    fn other_paths_are_not_found() {
        for path in ["/", "/task", "/tasksx", "/api/tasks", "/TASKS"] {
            assert_eq!(resolve(&Method::GET, path), Err(RouteError::NotFound), "{path}");
        }
    }

    #[test]
    fn route_error_messages() {
        assert_eq!(RouteError::InvalidPath.to_string(), "invalid path");
        assert_eq!(RouteError::InvalidId.to_string(), "invalid identifier");
    }
}
