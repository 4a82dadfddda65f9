//! Scribe CLI - enum description accessors for partial C# types.
//!
//! Parses arguments, initializes logging and colors, and dispatches to the
//! selected command.

use clap::Parser;
use miette::Result;
use scribe_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let verbosity = ui::Verbosity::from_flags(args.verbose, args.quiet);
    let result = match args.command {
        cli::Command::Generate(generate_args) => commands::generate_execute(generate_args, verbosity),
        cli::Command::Check(check_args) => commands::check_execute(check_args, verbosity),
    };

    result.map_err(error::cli_error_to_miette)
}
