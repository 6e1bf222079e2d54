//! Repository Module
//!
//! Store operations for the `employees` and `contacts` tables. Each method is
//! a single round-trip; composing them (population, cascades) is the
//! service layer's job.

pub mod contact;
pub mod employee;

pub use contact::ContactRepository;
pub use employee::EmployeeRepository;

use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::not_found(msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Base repository with database reference
#[derive(Clone, Debug)]
pub struct BaseRepository {
    db: Surreal<Any>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Any> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[test]
    fn test_repo_error_maps_to_app_error() {
        let err: AppError = RepoError::Database("connection reset".into()).into();
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.public_message(), "Internal server error");

        let err: AppError = RepoError::NotFound("Contact".into()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
