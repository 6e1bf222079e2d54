//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::NotFound | Self::EmployeeNotFound => StatusCode::NOT_FOUND,

            // Malformed input has no dedicated kind in the public contract:
            // it is answered like any other unhandled failure.
            Self::InvalidRequest | Self::InternalError | Self::DatabaseError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::EmployeeNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_failures_collapse_to_500() {
        for code in [
            ErrorCode::InvalidRequest,
            ErrorCode::InternalError,
            ErrorCode::DatabaseError,
        ] {
            assert_eq!(code.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
