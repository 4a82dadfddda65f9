//! Miette report conversion for CLI errors.

use miette::Report;

use crate::error::CliError;

/// Convert a CliError to a miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Manifest { path, source } => {
            Report::new(source).wrap_err(format!("Failed to load symbols from {}", path.display()))
        }
        _ => miette::miette!("{}", err),
    }
}
