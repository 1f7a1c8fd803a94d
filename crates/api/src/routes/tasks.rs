//! Route definitions for tasks.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::tasks;
use crate::state::AppState;

/// Task routes, relative to `/api`.
///
/// ```text
/// GET    /tasks          -> list
/// POST   /tasks          -> create
/// PUT    /tasks/{id}     -> update
/// DELETE /tasks/{id}     -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(tasks::list).post(tasks::create))
        .route("/tasks/{id}", put(tasks::update).delete(tasks::delete))
}
