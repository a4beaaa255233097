/// Task primary keys are UUIDs generated by the service.
pub type TaskId = uuid::Uuid;

/// Generate a fresh random (v4) task identifier.
pub fn new_task_id() -> TaskId {
    uuid::Uuid::new_v4()
}
