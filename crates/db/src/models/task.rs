//! Task rows, the joined list view, and create/update DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tasktracker_core::deadline::parse_deadline;
use tasktracker_core::error::CoreError;
use tasktracker_core::types::{DbId, Deadline};
use validator::Validate;

// ---------------------------------------------------------------------------
// Read models
// ---------------------------------------------------------------------------

/// A task joined with the names of its user, category and status.
///
/// The three names are `None` when the referenced row is missing. Field names
/// on the wire follow the public API (`TaskID`, `Title`, ...).
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskWithNames {
    #[serde(rename = "TaskID")]
    pub task_id: DbId,
    pub title: String,
    pub description: String,
    pub deadline: Option<Deadline>,
    pub user_name: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Request body for creating or replacing a task.
///
/// Every field except `title` is optional; lookups fall back to their
/// defaults and `description` to the empty string.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    #[validate(
        required(message = "Title is required"),
        length(min = 1, message = "Title is required")
    )]
    pub title: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub deadline: Option<String>,
    pub status: Option<String>,
    pub user_name: Option<String>,
}

impl TaskInput {
    /// Validate the input and convert it into a [`TaskDraft`].
    ///
    /// Fails before any storage access when the title is missing or empty or
    /// the deadline cannot be parsed.
    pub fn into_draft(self) -> Result<TaskDraft, CoreError> {
        self.validate()?;
        let deadline = parse_deadline(self.deadline.as_deref())?;

        Ok(TaskDraft {
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            deadline,
            user_name: self.user_name,
            category: self.category,
            status: self.status,
        })
    }
}

/// Validated task content with lookup names still unresolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub deadline: Option<Deadline>,
    pub user_name: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
}

/// Column values for an insert or full update of a `tasks` row.
#[derive(Debug, Clone)]
pub struct TaskRecord<'a> {
    pub user_id: DbId,
    pub category_id: DbId,
    pub status_id: DbId,
    pub title: &'a str,
    pub description: &'a str,
    pub deadline: Option<Deadline>,
}
