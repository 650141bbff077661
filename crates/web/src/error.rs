use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use taskboard_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors plus the storage and rendering
/// failure cases. Implements [`IntoResponse`] to produce consistent HTML
/// error pages.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `taskboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A template rendering error from askama.
    #[error("Template error: {0}")]
    Render(#[from] askama::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                format!("{entity} with id {id} not found"),
            ),

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Template errors ---
            AppError::Render(err) => {
                tracing::error!(error = %err, "Template rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, error_page(status, &message)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and user-facing message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key violations map to 409 (the referenced record is gone).
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Record not found".to_string()),
        sqlx::Error::Database(db_err) if db_err.message().contains("FOREIGN KEY") => (
            StatusCode::CONFLICT,
            "The referenced record no longer exists".to_string(),
        ),
        _ => {
            tracing::error!(error = %err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Render a minimal standalone error page. Deliberately template-free so a
/// rendering failure cannot recurse into another rendering failure.
fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let reason = status.canonical_reason().unwrap_or("Error");
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\">\
         <title>{code} {reason}</title></head>\n<body>\n<h1>{code} {reason}</h1>\n\
         <p>{message}</p>\n<p><a href=\"/tasks\">Back to tasks</a></p>\n</body>\n</html>\n",
        code = status.as_u16(),
    ))
}
