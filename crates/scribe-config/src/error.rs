//! Error types for configuration validation and loading.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Per-type configuration errors
    #[error("suffix cannot be null")]
    NullSuffix,

    #[error("suffix '{suffix}' contains characters that are not valid in an identifier")]
    InvalidSuffix { suffix: String },

    // Generator settings errors
    #[error("invalid config value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    // Config parsing/loading errors
    #[error("config not found")]
    NotFound,

    #[error("failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Create an invalid-value error for a named field.
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from a per-type suffix rather than from settings.
    pub fn is_suffix_error(&self) -> bool {
        matches!(self, Self::NullSuffix | Self::InvalidSuffix { .. })
    }
}
