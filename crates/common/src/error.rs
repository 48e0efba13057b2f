//! Error types for groupwise

use thiserror::Error;

/// Result type alias using groupwise Error
pub type Result<T> = std::result::Result<T, Error>;

/// groupwise error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid number: {token:?}")]
    InvalidNumber { token: String },

    #[error("Case failed: {name} - {reason}")]
    CaseFailed { name: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Group size precondition failure
    pub fn group_size(k: i64) -> Self {
        Error::InvalidArgument(format!("K must be a positive number, got {}", k))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}
