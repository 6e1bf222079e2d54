//! Unified error system
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error type with code and message
//! - [`ErrorBody`]: The `{"error": "..."}` body every failed request gets
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::employee_not_found();
//! assert_eq!(err.code, ErrorCode::EmployeeNotFound);
//!
//! // Server-side failures are reported with a generic message
//! let err = AppError::database("connection reset");
//! assert_eq!(err.public_message(), "Internal server error");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult, ErrorBody};
