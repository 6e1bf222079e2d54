//! Database Module
//!
//! Connects to the SurrealDB document store. The connection string picks
//! the engine (`ws://`, `http://`, `mem://`), so the same code runs against
//! a remote server in production and an in-memory store in tests.

pub mod models;
pub mod repository;

use crate::core::Config;
use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

/// Database service, owns the store connection
///
/// Cloning is cheap: `Surreal<Any>` is a handle onto one shared connection.
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Any>,
}

impl DbService {
    /// Connect, sign in if credentials are configured, and select ns/db
    pub async fn connect(config: &Config) -> Result<Self, AppError> {
        let db = any::connect(config.database_url.as_str())
            .await
            .map_err(|e| AppError::database(format!("Failed to connect to store: {e}")))?;

        if let Some(credentials) = &config.credentials {
            db.signin(Root {
                username: &credentials.username,
                password: &credentials.password,
            })
            .await
            .map_err(|e| AppError::database(format!("Store sign-in failed: {e}")))?;
        }

        db.use_ns(config.namespace.as_str())
            .use_db(config.database.as_str())
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!(
            namespace = %config.namespace,
            database = %config.database,
            "Connected to document store"
        );

        Ok(Self { db })
    }
}
