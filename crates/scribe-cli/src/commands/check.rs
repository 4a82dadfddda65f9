//! Check command implementation.
//!
//! Runs a full pass without writing anything.

use crate::cli::CheckArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui::{self, Verbosity};

/// Execute the check command.
pub fn execute(args: CheckArgs, verbosity: Verbosity) -> Result<()> {
    if !verbosity.is_quiet() {
        ui::info(&format!("Checking {}...", args.pass.symbols.display()));
    }

    let output = utils::run_pass(&args.pass, verbosity)?;
    utils::check_outcome(&output, args.pass.deny_warnings)?;

    if !verbosity.is_quiet() {
        if output.diagnostics.is_empty() {
            ui::success("No problems found");
        } else {
            ui::success(&format!("Check passed: {}", ui::format_summary(&output.diagnostics)));
        }
    }
    Ok(())
}
