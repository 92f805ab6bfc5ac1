use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use usuarios_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] so every failure becomes a non-2xx response.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `usuarios_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx (connectivity or statement).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request could not be decoded (body, JSON, path).
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                tracing::debug!(%entity, id, "Entity not found");
                return StatusCode::NOT_FOUND.into_response();
            }
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        // Not-found responses carry no body.
        if status == StatusCode::NOT_FOUND {
            return status.into_response();
        }

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Failures to obtain a live connection map to 503.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::Configuration(_) => unavailable(err),
        sqlx::Error::Database(db_err) => {
            // SQLSTATE class 08: connection exception.
            if db_err.code().is_some_and(|code| code.starts_with("08")) {
                return unavailable(err);
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}

fn unavailable(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %err, "Could not connect to the database");
    (
        StatusCode::SERVICE_UNAVAILABLE,
        "SERVICE_UNAVAILABLE",
        "Could not connect to the database".to_string(),
    )
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
