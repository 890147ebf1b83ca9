//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Kasir API                              │
//! │                                                                         │
//! │  Client                      Rust Backend                               │
//! │  ──────                      ────────────                               │
//! │                                                                         │
//! │  GET /products/999                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Handler                                                         │  │
//! │  │  Result<Json<T>, ApiError>                                       │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad JSON? ──────── ApiError::invalid_body() ─────────┐         │  │
//! │  │         │                                             │         │  │
//! │  │         ▼                                             ▼         │  │
//! │  │  Database Error? ── DbError::NotFound{..} ──────── ApiError ───►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄──── 404 text/plain "Product not found: 999"                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kasir_db::DbError;

/// Message for request bodies that are not valid JSON for the resource.
pub const INVALID_REQUEST_BODY: &str = "Invalid Request Body";

/// Generic message for failures whose detail stays in the logs.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Error returned from HTTP handlers.
///
/// Sent as a plain-text body holding `message`; `code` only picks the
/// status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

/// Failure classes, one per status the API sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// 404
    NotFound,
    /// 400: malformed body, bad path id, rejected input
    InvalidRequest,
    /// 405
    MethodNotAllowed,
    /// 500, store side
    DatabaseError,
    /// 500
    Internal,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ErrorCode::DatabaseError | ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidRequest, message)
    }

    /// The error for a body that failed to decode.
    pub fn invalid_body() -> Self {
        ApiError::invalid_request(INVALID_REQUEST_BODY)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::NotFound, message)
    }

    /// The error for a method the matched path does not serve.
    pub fn method_not_allowed() -> Self {
        ApiError::new(ErrorCode::MethodNotAllowed, "Method Not Allowed")
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

/// Maps store errors onto statuses.
///
/// ```text
/// NotFound            → 404, message kept ("Product not found: 999")
/// ForeignKeyViolation → 400, message kept
/// anything else       → 500, generic message, detail logged
/// ```
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match &err {
            DbError::NotFound { .. } => ApiError::not_found(err.to_string()),
            DbError::ForeignKeyViolation { detail } => {
                tracing::debug!(detail = %detail, "Foreign key violation");
                ApiError::invalid_request(err.to_string())
            }
            _ => {
                tracing::error!(error = %err, "Database operation failed");
                ApiError::new(ErrorCode::DatabaseError, INTERNAL_SERVER_ERROR)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.message).into_response()
    }
}

/// Result type for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use axum::http::header;
    use kasir_db::error::MISSING_CATEGORY;

    use super::*;

    #[test]
    fn test_not_found_keeps_db_message() {
        let err: ApiError = DbError::not_found("Product", "999").into();

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Product not found: 999");
    }

    #[test]
    fn test_foreign_key_is_bad_request() {
        let err: ApiError = DbError::ForeignKeyViolation {
            detail: "FOREIGN KEY constraint failed".to_string(),
        }
        .into();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message, MISSING_CATEGORY);
    }

    #[test]
    fn test_store_failures_hide_detail() {
        let err: ApiError = DbError::QueryFailed("no such table: products".to_string()).into();

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_response_is_plain_text_message() {
        let response = ApiError::method_not_allowed().into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/plain"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Method Not Allowed");
    }
}
