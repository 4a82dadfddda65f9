//! Command-line interface definition for Scribe.
//!
//! # Command Structure
//!
//! - `scribe generate` - Run a pass and write the generated sources
//! - `scribe check` - Run a pass and report diagnostics only

mod commands;

use clap::Parser;

pub use commands::{CheckArgs, Command, GenerateArgs, PassArgs};

/// Scribe - enum description accessors for partial C# types
#[derive(Parser, Debug)]
#[command(
    name = "scribe",
    version,
    about = "Generate description accessors for enum-typed members",
    long_about = "Scribe reads a symbol manifest describing the types and enumerations of a\n\
                  program and generates a descriptor class with one extension method per\n\
                  enumeration, plus partial declarations exposing a description accessor\n\
                  for every selected member."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
