//! Logging infrastructure for the Scribe CLI.
//!
//! Events go to stderr so that `generate --stdout` output stays clean.
//!
//! # Example
//!
//! ```rust,no_run
//! use scribe_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Starting pass");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "scribe=debug,scribe_cli=debug,scribe_core=debug,scribe_config=debug";
const QUIET_FILTER: &str = "scribe=error,scribe_cli=error,scribe_core=error,scribe_config=error";
const DEFAULT_FILTER: &str = "scribe=warn,scribe_cli=warn,scribe_core=warn,scribe_config=warn";

/// Initialize the tracing subscriber.
///
/// The filter is chosen in this order:
/// 1. `--verbose`: debug for scribe crates
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG`, when set
/// 4. warnings for scribe crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(select_filter(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color && should_use_colors())
        .compact();

    // A second initialization (e.g. from a test harness) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn select_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Check if colored log output should be enabled.
///
/// `NO_COLOR` disables colors, `FORCE_COLOR` forces them; otherwise stderr
/// must be a color-capable terminal.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    console::Term::stderr().features().colors_supported()
}
