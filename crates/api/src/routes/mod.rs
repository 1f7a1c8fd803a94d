pub mod health;
pub mod tasks;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /tasks                list, create
/// /tasks/{id}           update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(tasks::router())
}
