use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tasktracker_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `tasktracker_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage failure. `message` is shown to the caller; `source` is only logged.
    #[error("{message}: {source}")]
    Persistence {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    /// A path id that cannot name any row (e.g. not an integer).
    #[error("Unknown {entity} id '{raw}'")]
    UnknownId { entity: &'static str, raw: String },

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build a closure mapping a storage error to [`AppError::Persistence`].
    pub fn persistence(message: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
        move |source| AppError::Persistence { message, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    tracing::debug!(entity, id, "Entity not found");
                    (
                        StatusCode::NOT_FOUND,
                        "NOT_FOUND",
                        format!("{entity} not found"),
                    )
                }
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            // --- Storage errors ---
            AppError::Persistence { message, source } => {
                tracing::error!(error = %source, "{message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    (*message).to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::UnknownId { entity, raw } => {
                tracing::debug!(entity, raw = %raw, "Unparsable id in path");
                (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found"),
                )
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
