//! Error types for comment-board

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the comment-board core
#[derive(Debug, Error)]
pub enum CbError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(PathBuf),
}

/// Result type alias for the comment-board core
pub type Result<T> = std::result::Result<T, CbError>;
