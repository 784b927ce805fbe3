// file: src/error.rs
// version: 1.2.0
// guid: 3f8c2a17-9b4d-4e6a-8c21-5d7e90f1a2b3

use thiserror::Error;

/// Result type alias for the driver
pub type Result<T> = std::result::Result<T, DriverError>;

/// Error types for the Terraform driver
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Install error: {0}")]
    Install(String),

    #[error("Checksum error: {0}")]
    Checksum(String),

    #[error("Download failed: {0}")]
    Download(String),

    #[error("Command execution error: {0}")]
    Execution(String),
}

impl DriverError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new install error
    pub fn install(msg: impl Into<String>) -> Self {
        Self::Install(msg.into())
    }

    /// Create a new checksum error
    pub fn checksum(msg: impl Into<String>) -> Self {
        Self::Checksum(msg.into())
    }

    /// Create a new download error
    pub fn download(msg: impl Into<String>) -> Self {
        Self::Download(msg.into())
    }

    /// Create a new execution error
    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }
}
