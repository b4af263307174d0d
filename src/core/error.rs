//! Error types and error handling for postseed.
//!
//! Per-document failures (conversion, unreadable workbooks) are
//! recoverable: the pipeline logs them and moves on. Everything else
//! aborts the run.

use std::path::Path;
use thiserror::Error;

/// Result type alias for postseed operations
pub type Result<T> = std::result::Result<T, PostSeedError>;

/// Main error type for postseed
#[derive(Error, Debug)]
pub enum PostSeedError {
    #[error("Text conversion failed for {path}: {message}")]
    ConversionFailed { path: String, message: String },

    #[error("Failed to read workbook {path}: {message}")]
    WorkbookFailed { path: String, message: String },

    #[error("Failed to write artifact: {0}")]
    SerializationFailed(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Extraction task failed: {0}")]
    TaskFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl PostSeedError {
    /// Build a conversion failure for a document path
    pub fn conversion(path: &Path, message: impl Into<String>) -> Self {
        PostSeedError::ConversionFailed {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Build a workbook failure for a workbook path
    pub fn workbook(path: &Path, message: impl Into<String>) -> Self {
        PostSeedError::WorkbookFailed {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// True for failures scoped to a single source document
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PostSeedError::ConversionFailed { .. } | PostSeedError::WorkbookFailed { .. }
        )
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, PostSeedError::InvalidPath(_))
    }
}
