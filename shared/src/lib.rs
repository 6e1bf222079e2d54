//! Shared types for the staff directory service
//!
//! Wire models exchanged over the HTTP API and the unified error system
//! used by the server crate.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
