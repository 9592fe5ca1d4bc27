use std::env;
use std::time::Duration;

use serde::Deserialize;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::core::error::{AppError, Result};

/// Connection settings for the SQL backend.
///
/// The pool built here is caller-owned and passed to repository
/// constructors; nothing in the crate holds a shared global connection.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        Ok(DatabaseConfig {
            url: env::var("DATABASE_URL")
                .map_err(|_| AppError::configuration("DATABASE_URL not set"))?,
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .map_err(|_| AppError::configuration("Invalid DATABASE_MAX_CONNECTIONS"))?,
        })
    }

    /// Create a SQLite connection pool
    pub async fn create_pool(&self) -> Result<SqlitePool> {
        SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(30))
            .connect(&self.url)
            .await
            .map_err(AppError::Database)
    }
}
