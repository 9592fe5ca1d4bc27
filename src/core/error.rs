/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// The repository layer distinguishes entity validation failures
/// (`Validation`, raised at construction/setter time), structural misuse of
/// an API (`Usage`), backend failures (`Database`/`Io`/serialization, which
/// backends log and degrade to sentinel results rather than propagate), and
/// configuration problems. "Not found" is never an error; it surfaces as
/// `None`/`false`/empty.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Entity field failed a constraint
    #[error("Validation error: {0}")]
    Validation(String),

    /// Caller violated a structural precondition
    #[error("Usage error: {0}")]
    Usage(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Filesystem errors from the file-persisted backend
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn usage(msg: impl Into<String>) -> Self {
        AppError::Usage(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
