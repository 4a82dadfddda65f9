use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available Scribe subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a synthesis pass and write the generated sources
    ///
    /// Writes the descriptor class and the partial type declarations into the
    /// output directory, or prints them with --stdout.
    Generate(GenerateArgs),

    /// Run a synthesis pass and report diagnostics only
    ///
    /// Nothing is written. Exits non-zero when an error is reported, or a
    /// warning with --deny-warnings.
    Check(CheckArgs),
}

/// Inputs shared by every command that runs a pass
#[derive(Args, Debug, Clone)]
pub struct PassArgs {
    /// JSON symbol manifest describing types and enumerations
    #[arg(short, long, value_name = "FILE")]
    pub symbols: PathBuf,

    /// Settings file; defaults to scribe.toml in the working directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Spaces per indentation level in generated code
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..=16))]
    pub indent: Option<u8>,

    /// Namespace of the generated descriptor class
    #[arg(long, value_name = "NS")]
    pub namespace: Option<String>,

    /// Treat warnings as errors
    #[arg(long)]
    pub deny_warnings: bool,
}

/// Arguments for the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub pass: PassArgs,

    /// Directory the generated files are written to. Created if missing.
    #[arg(short, long, default_value = "generated", value_name = "DIR")]
    pub out_dir: PathBuf,

    /// Print generated sources to stdout instead of writing files
    #[arg(long, conflicts_with = "out_dir")]
    pub stdout: bool,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub pass: PassArgs,
}
