//! Terminal output: status lines and pass diagnostics.
//!
//! ```no_run
//! use scribe_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Wrote EnumDescriptions.g.cs");
//! ```

mod format;
mod messages;

pub use format::{format_summary, print_diagnostics};
pub use messages::{error, info, success, warning};

/// How much the CLI prints besides errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    /// `--verbose` wins over `--quiet`.
    pub fn from_flags(verbose: bool, quiet: bool) -> Self {
        match (verbose, quiet) {
            (true, _) => Verbosity::Verbose,
            (false, true) => Verbosity::Quiet,
            (false, false) => Verbosity::Normal,
        }
    }

    pub fn is_quiet(self) -> bool {
        self == Verbosity::Quiet
    }
}

/// Check if color output should be enabled.
///
/// Respects `NO_COLOR` and `FORCE_COLOR`, then falls back to terminal
/// detection on stderr.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::user_attended_stderr()
}

/// Initialize color support for status lines and miette reports.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    owo_colors::set_override(enabled);
    console::set_colors_enabled_stderr(enabled);

    // Only the first hook installed takes effect.
    let _ = miette::set_hook(Box::new(move |_| {
        Box::new(miette::MietteHandlerOpts::new().color(enabled).build())
    }));
}
