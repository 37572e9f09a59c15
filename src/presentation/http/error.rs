use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::application::error::AppError;

/// Maps the typed error model to status codes. This is the only place the
/// mapping happens; handlers and use cases never pick status codes
/// themselves. Data-access detail is logged here and never leaks to the
/// caller.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, (*msg).to_string()),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "access denied".to_string()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "authentication required".to_string(),
            ),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(err) => classify_internal(err),
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn classify_internal(err: &anyhow::Error) -> (StatusCode, String) {
    if let Some(db_err) = err.downcast_ref::<sqlx::Error>() {
        return classify_sqlx_error(db_err);
    }
    tracing::error!(error = %err, "internal error");
    (StatusCode::INTERNAL_SERVER_ERROR, oops())
}

/// Classify a sqlx error into an HTTP status and caller-facing phrase.
///
/// - `RowNotFound` maps to 404.
/// - Unique violations (23505) and foreign-key violations (23503) map to
///   409.
/// - Everything else maps to 500 with a fixed phrase.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "resource not found".to_string()),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23505") => (StatusCode::CONFLICT, "resource already exists".to_string()),
            Some("23503") => (
                StatusCode::CONFLICT,
                "operation conflicts with related data".to_string(),
            ),
            _ => {
                tracing::error!(error = %db_err, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, oops())
            }
        },
        other => {
            tracing::error!(error = %other, "database error");
            (StatusCode::INTERNAL_SERVER_ERROR, oops())
        }
    }
}

// The legacy API's one user-visible 500 phrase, kept for compatibility.
fn oops() -> String {
    "Oops... our bad.".to_string()
}
