//! Success response bodies for the task endpoints.

use serde::Serialize;
use tasktracker_core::types::DbId;

/// `{ "message": ... }` acknowledgement for updates and deletes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// `{ "message": ..., "TaskID": ... }` returned by task creation.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: &'static str,
    #[serde(rename = "TaskID")]
    pub task_id: DbId,
}
