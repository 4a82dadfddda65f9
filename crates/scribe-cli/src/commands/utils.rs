//! Shared helpers for commands that run a pass.

use scribe_core::{PassOutput, Severity, SymbolTable};
use tracing::info;

use crate::cli::PassArgs;
use crate::config;
use crate::error::{CliError, Result};
use crate::ui::{self, Verbosity};

/// Load settings and symbols, run one pass, and print its diagnostics.
pub(crate) fn run_pass(args: &PassArgs, verbosity: Verbosity) -> Result<PassOutput> {
    let cwd = std::env::current_dir()?;
    let settings = config::load_settings(args, &cwd)?;

    let table = SymbolTable::from_path(&args.symbols)
        .map_err(|e| CliError::manifest(&args.symbols, e))?;
    info!(
        manifest = %args.symbols.display(),
        types = table.len(),
        "Loaded symbol manifest"
    );

    let output = scribe_core::run(&table, settings);
    ui::print_diagnostics(&output.diagnostics, verbosity);
    Ok(output)
}

/// Fail when the pass reported errors, or warnings when they are denied.
pub(crate) fn check_outcome(output: &PassOutput, deny_warnings: bool) -> Result<()> {
    let errors = output.count(Severity::Error);
    let warnings = output.count(Severity::Warning);
    if errors > 0 || (deny_warnings && warnings > 0) {
        return Err(CliError::DiagnosticsFailed { errors, warnings });
    }
    Ok(())
}
