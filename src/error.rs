//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses. Every error leaves the process as the same JSON
//! envelope: `{"success": false, "message": ..., "code": ...}`. Raw store
//! error text is logged server-side and never echoed to callers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from database operations,
///   including uniqueness violations on registration
/// - **Validation Errors**: Input rejected by the declarative registration
///   schema
/// - **Bad Requests**: Missing or malformed fields
/// - **Unauthorized**: Unknown principal or credential mismatch
/// - **Not Found**: No row matched/affected for an id-scoped operation
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (connection error, query error,
    /// constraint violation). Wraps any sqlx::Error via `#[from]`.
    ///
    /// Returns HTTP 500 with a generic message; the underlying error is
    /// only logged.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request body or parameters are missing or malformed.
    ///
    /// Returns HTTP 400 Bad Request. The String names what was wrong.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Input rejected by a declarative schema (registration shape checks).
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Credential mismatch or unknown principal.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// No row matched or was affected for the given identifier.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Password hashing or verification failed internally.
    ///
    /// Returns HTTP 500 with a generic message.
    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

/// Convert AppError into an HTTP response.
///
/// This implementation lets handlers return `Result<T, AppError>` and have
/// errors automatically converted to proper HTTP responses.
///
/// # Status Code Mapping
///
/// - `InvalidRequest` → 400 Bad Request (`invalid_request`)
/// - `Validation` → 400 Bad Request (`validation_error`)
/// - `Unauthorized` → 401 Unauthorized (`unauthorized`)
/// - `NotFound` → 404 Not Found (`not_found`)
/// - `Database` / `PasswordHash` → 500 Internal Server Error
///   (`internal_error`, details hidden from the client)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map each error variant to (HTTP status, error code, message)
        let (status, code, message) = match self {
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, "invalid_request", msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            AppError::Database(err) => {
                tracing::error!("database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            AppError::PasswordHash(err) => {
                tracing::error!("password hashing error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        // Uniform error envelope
        let body = Json(json!({
            "success": false,
            "message": message,
            "code": code
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn envelope(err: AppError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn not_found_maps_to_404_with_uniform_envelope() {
        let (status, body) = envelope(AppError::NotFound("Order not found".to_string())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("Order not found"));
        assert_eq!(body["code"], json!("not_found"));
    }

    #[tokio::test]
    async fn bad_request_carries_the_detail_message() {
        let (status, body) =
            envelope(AppError::InvalidRequest("All fields are required".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], json!("invalid_request"));
        assert_eq!(body["message"], json!("All fields are required"));
    }

    #[tokio::test]
    async fn unauthorized_maps_to_401() {
        let (status, body) =
            envelope(AppError::Unauthorized("users not found".to_string())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], json!("unauthorized"));
    }

    #[tokio::test]
    async fn database_errors_never_leak_detail() {
        let (status, body) = envelope(AppError::Database(sqlx::Error::RowNotFound)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], json!("An internal error occurred"));
        assert_eq!(body["code"], json!("internal_error"));
    }
}
