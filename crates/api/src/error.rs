use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use songdex_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for validation failures and `sqlx::Error` for
/// infrastructure failures. Implements [`IntoResponse`] to produce the
/// `{success, ...}` JSON envelopes used by all endpoints.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain validation error from `songdex-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request detected at the HTTP boundary (e.g. malformed body).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler and service return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            // Validation failures carry a caller-facing message.
            AppError::Core(CoreError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({ "success": false, "message": msg })),
            )
                .into_response(),

            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({ "success": false, "message": msg })),
            )
                .into_response(),

            // Infrastructure failures: log the detail, return an opaque
            // message (no raw SQL reaches the client).
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(json!({
                        "success": false,
                        "error": "An internal error occurred",
                    })),
                )
                    .into_response()
            }
        }
    }
}
