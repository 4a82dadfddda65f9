//! Error handling for the Scribe CLI.
//!
//! Problems found inside a pass are reported as diagnostics, not errors; a
//! pass that reports errors (or warnings under `--deny-warnings`) surfaces
//! here as [`CliError::DiagnosticsFailed`] so the process exits non-zero.

mod miette;

use std::path::PathBuf;

use scribe_config::ConfigError;
use scribe_core::ScribeError;
use thiserror::Error;

pub use self::miette::cli_error_to_miette;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Settings could not be loaded or failed validation
    #[error("Configuration error: {0}\n\nHint: Check scribe.toml and SCRIBE_* environment variables")]
    Config(#[from] ConfigError),

    /// The symbol manifest could not be loaded
    #[error("Failed to load symbols from {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: ScribeError,
    },

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Failed to write a generated file
    #[error("Failed to write {}: {source}\n\nHint: Check output directory permissions", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The pass reported blocking diagnostics
    #[error("Synthesis reported {errors} error(s) and {warnings} warning(s)")]
    DiagnosticsFailed { errors: usize, warnings: usize },
}

impl CliError {
    pub fn manifest(path: impl Into<PathBuf>, source: ScribeError) -> Self {
        Self::Manifest {
            path: path.into(),
            source,
        }
    }

    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::WriteFailed {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;
