//! Command implementations for the Scribe CLI.
//!
//! - [`generate`] - Run a pass and write the artifacts
//! - [`check`] - Run a pass and report diagnostics
//!
//! Each command provides an `execute` function taking its parsed arguments.

pub mod check;
pub mod generate;
pub(crate) mod utils;

pub use check::execute as check_execute;
pub use generate::execute as generate_execute;
