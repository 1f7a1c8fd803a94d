//! Handlers for the `/api/tasks` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tasktracker_db::models::task::{TaskInput, TaskWithNames};

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, TaskId};
use crate::response::{CreatedResponse, MessageResponse};
use crate::state::AppState;

/// GET /api/tasks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TaskWithNames>>> {
    let tasks = state.tasks.list().await?;
    Ok(Json(tasks))
}

/// POST /api/tasks
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<TaskInput>,
) -> AppResult<(StatusCode, Json<CreatedResponse>)> {
    let task_id = state.tasks.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Task created",
            task_id,
        }),
    ))
}

/// PUT /api/tasks/{id}
///
/// Replaces every field; omitted lookups and description fall back to defaults.
/// The body is validated before the id, so a bad body is a 400 on any path.
pub async fn update(
    State(state): State<AppState>,
    id: Result<TaskId, AppError>,
    JsonBody(input): JsonBody<TaskInput>,
) -> AppResult<Json<MessageResponse>> {
    let draft = input.into_draft()?;
    let TaskId(id) = id?;
    state.tasks.update(id, draft).await?;
    Ok(Json(MessageResponse {
        message: "Task updated",
    }))
}

/// DELETE /api/tasks/{id}
pub async fn delete(
    State(state): State<AppState>,
    TaskId(id): TaskId,
) -> AppResult<Json<MessageResponse>> {
    state.tasks.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Task deleted",
    }))
}
