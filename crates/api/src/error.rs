use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kinoteka_core::error::CoreError;
use kinoteka_core::lookup::LookupError;
use serde_json::json;

use crate::response::Pretty;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for storage
/// failures. Not-found outcomes render as a bare JSON string message, the
/// rest as a `{ "error", "code" }` object.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `kinoteka_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request the handler could not interpret, such as a malformed
    /// query string.
    #[error("{0}")]
    BadRequest(String),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<LookupError> for AppError {
    fn from(err: LookupError) -> Self {
        AppError::Core(CoreError::Lookup(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(core) => match core {
                CoreError::MovieNotFound { id } => {
                    tracing::debug!(movie_id = id, "Movie not found");
                    (StatusCode::NOT_FOUND, Pretty::new(core.to_string())).into_response()
                }
                CoreError::Lookup(err) => {
                    (StatusCode::NOT_FOUND, Pretty::new(err.to_string())).into_response()
                }
                CoreError::MissingFields { ref fields } => {
                    let keys: Vec<&str> = fields.iter().map(|f| f.key()).collect();
                    let body = json!({
                        "error": core.to_string(),
                        "code": "VALIDATION_ERROR",
                        "fields": keys,
                    });
                    (StatusCode::BAD_REQUEST, Pretty::new(body)).into_response()
                }
            },

            AppError::BadRequest(message) => {
                let body = json!({
                    "error": message,
                    "code": "VALIDATION_ERROR",
                });
                (StatusCode::BAD_REQUEST, Pretty::new(body)).into_response()
            }

            AppError::Database(err) => {
                let (status, code, message) = classify_sqlx_error(&err);
                let body = json!({
                    "error": message,
                    "code": code,
                });
                (status, Pretty::new(body)).into_response()
            }
        }
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else, constraint violations included, maps to 500 with a
///   sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            if db_err.is_foreign_key_violation() {
                tracing::error!(error = %db_err, "Foreign key violation");
            } else {
                tracing::error!(error = %db_err, "Database error");
            }
            internal_error()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal_error()
        }
    }
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
