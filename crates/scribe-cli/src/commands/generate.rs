//! Generate command implementation.

use std::fs;
use std::io::Write as _;

use scribe_core::Artifact;
use tracing::debug;

use crate::cli::GenerateArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui::{self, Verbosity};

/// Execute the generate command.
///
/// Artifacts are written even when the pass reported errors: they hold every
/// type that validated. The command still fails afterwards so CI notices.
pub fn execute(args: GenerateArgs, verbosity: Verbosity) -> Result<()> {
    let output = utils::run_pass(&args.pass, verbosity)?;

    if output.artifacts.is_empty() {
        if !verbosity.is_quiet() {
            ui::info("Nothing to generate");
        }
    } else if args.stdout {
        print_artifacts(&output.artifacts)?;
    } else {
        write_artifacts(&args, &output.artifacts, verbosity)?;
    }

    if !verbosity.is_quiet() && !output.diagnostics.is_empty() {
        ui::info(&ui::format_summary(&output.diagnostics));
    }
    utils::check_outcome(&output, args.pass.deny_warnings)
}

fn print_artifacts(artifacts: &[Artifact]) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    for artifact in artifacts {
        stdout.write_all(artifact.contents.as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}

fn write_artifacts(args: &GenerateArgs, artifacts: &[Artifact], verbosity: Verbosity) -> Result<()> {
    let out_dir = &args.out_dir;
    if out_dir.exists() && !out_dir.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "--out-dir {} exists and is not a directory",
            out_dir.display()
        )));
    }
    fs::create_dir_all(out_dir).map_err(|e| CliError::write_failed(out_dir, e))?;

    for artifact in artifacts {
        let path = out_dir.join(&artifact.name);
        fs::write(&path, &artifact.contents).map_err(|e| CliError::write_failed(&path, e))?;
        debug!(path = %path.display(), bytes = artifact.contents.len(), "Wrote artifact");
        if !verbosity.is_quiet() {
            ui::success(&format!("Wrote {}", path.display()));
        }
    }
    Ok(())
}
