//! Error types and the error response body

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error with a structured error code
///
/// Handlers return this through [`AppResult`]; the axum integration below
/// turns it into the JSON error body clients see.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message (never shown to clients for 5xx)
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, format!("{} not found", resource.into()))
    }

    /// Create the employee not found error
    pub fn employee_not_found() -> Self {
        Self::new(ErrorCode::EmployeeNotFound)
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Message that is safe to hand to a client
    ///
    /// Server-side failures never leak their cause.
    pub fn public_message(&self) -> &str {
        if self.http_status().is_server_error() {
            ErrorCode::InternalError.message()
        } else {
            &self.message
        }
    }
}

/// Error response body: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&AppError> for ErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            error: err.public_message().to_string(),
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();

        if status.is_server_error() {
            tracing::error!(
                code = %self.code,
                category = ?self.code.category(),
                message = %self.message,
                "Request failed"
            );
        }

        (status, Json(ErrorBody::from(&self))).into_response()
    }
}
