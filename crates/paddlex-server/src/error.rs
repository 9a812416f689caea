//! HTTP error envelope

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use paddlex_core::errors::{ExError, ExErrorKind};
use serde::Serialize;

/// A failed request: status plus the message the client sees
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: &'a str,
    code: u16,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Map a storage error to a response
    ///
    /// Client-correctable kinds keep their message. Infrastructure failures
    /// are logged in full and the client gets `failure` instead.
    pub fn from_store(err: ExError, failure: &str) -> Self {
        match err.kind() {
            ExErrorKind::InvalidInput => Self::bad_request(err.message()),
            ExErrorKind::NotFound => Self::new(StatusCode::NOT_FOUND, "Paddle not found"),
            ExErrorKind::AlreadyExists => Self::new(StatusCode::CONFLICT, err.message()),
            ExErrorKind::Timeout => {
                tracing::warn!(error = %err, "storage deadline exceeded");
                Self::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Database operation timed out",
                )
            }
            ExErrorKind::Persistence
            | ExErrorKind::Serialization
            | ExErrorKind::Io
            | ExErrorKind::Internal => {
                tracing::error!(error = %err, err_code = err.code(), "storage failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, failure)
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.status.canonical_reason().unwrap_or("Error"),
            message: &self.message,
            code: self.status.as_u16(),
        };
        (self.status, Json(body)).into_response()
    }
}
