//! Liveness endpoint, mounted beside `/api` rather than under it.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` while the task store answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthReport {
    fn from_store_ping(db_healthy: bool) -> Self {
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

/// GET /health. Always 200; an unreachable store only degrades the report.
async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport::from_store_ping(state.tasks.is_healthy().await))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
