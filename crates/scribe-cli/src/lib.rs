//! Scribe CLI - command-line front end for the scribe synthesis engine.
//!
//! Reads a JSON symbol manifest describing the declarations of a program,
//! runs a synthesis pass over it, and writes the generated C# sources.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions
//! - [`commands`] - `generate` and `check` implementations
//! - [`config`] - Layered generator settings (defaults, `scribe.toml`, env, flags)
//! - [`error`] - CLI error types with actionable messages
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status lines and diagnostic rendering
//!
//! # Example
//!
//! ```rust,no_run
//! use scribe_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result};
