use std::path::PathBuf;

use thiserror::Error;

/// Main error type for subtitle conversion
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot derive output path from source: {}", .0.display())]
    UnsupportedSource(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ConvertError>;
