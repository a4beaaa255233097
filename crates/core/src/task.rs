//! Task entity, request DTOs and field validation.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::types::TaskId;

/// Message returned whenever a task title is missing or empty.
pub const TITLE_REQUIRED: &str = "title required";

/// A task as stored and as rendered on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
}

/// DTO for creating a task.
///
/// `done` is accepted so clients sending a full task object are not rejected,
/// but new tasks always start out not done.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTask {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
}

/// DTO for replacing a task's title and completion flag.
///
/// An `id` field in the body is not part of the DTO; the path identifier is
/// authoritative.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTask {
    #[serde(default)]
    pub title: Option<String>,
    /// Missing and `null` both mean `false`.
    #[serde(default, deserialize_with = "null_as_false")]
    pub done: bool,
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Return the title if present and non-empty.
pub fn validate_title(title: Option<&str>) -> Result<&str, CoreError> {
    match title {
        Some(title) if !title.is_empty() => Ok(title),
        _ => Err(CoreError::Validation(TITLE_REQUIRED.to_string())),
    }
}
