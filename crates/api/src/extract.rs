//! Extractors that reject with [`AppError`] so every failure body is JSON.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use tasktracker_core::error::CoreError;
use tasktracker_core::types::DbId;

use crate::error::AppError;

/// JSON request body. Malformed or mistyped bodies become a validation error.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::Core(CoreError::Validation(rejection.body_text()))),
        }
    }
}

/// The `{id}` segment of a `/tasks/{id}` route.
///
/// A segment that is not an integer cannot match any task and is reported as
/// not found.
#[derive(Debug, Clone, Copy)]
pub struct TaskId(pub DbId);

impl<S> FromRequestParts<S> for TaskId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Core(CoreError::Validation(rejection.body_text())))?;

        let parsed = raw.trim().parse::<DbId>();
        parsed
            .map(TaskId)
            .map_err(|_| AppError::UnknownId { entity: "Task", raw })
    }
}
