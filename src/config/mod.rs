pub mod database;
pub mod storage;

pub use database::DatabaseConfig;
pub use storage::StorageConfig;

use crate::core::error::Result;

/// Top-level configuration for repository construction.
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            database: DatabaseConfig::from_env()?,
            storage: StorageConfig::from_env()?,
        })
    }

    /// Load `.env` if present, then read configuration from the
    /// environment.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }
}
