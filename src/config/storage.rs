use std::env;
use std::path::PathBuf;

use crate::core::error::{AppError, Result};
use crate::modules::customers::repositories::{FileCustomerRepository, FileFormat};

/// Settings for the file-persisted list backend.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_file: PathBuf,
    pub format: FileFormat,
}

impl StorageConfig {
    pub fn from_env() -> Result<Self> {
        let data_file = env::var("CUSTOMER_DATA_FILE")
            .unwrap_or_else(|_| "customers.json".to_string())
            .into();
        let format = env::var("CUSTOMER_DATA_FORMAT")
            .unwrap_or_else(|_| "json".to_string())
            .parse()
            .map_err(AppError::configuration)?;
        Ok(StorageConfig { data_file, format })
    }

    pub fn open_repository(&self) -> FileCustomerRepository {
        FileCustomerRepository::new(self.data_file.clone(), self.format)
    }
}
