//! Rendering of pass diagnostics.

use miette::Report;
use scribe_core::{Diagnostic, Severity};

use super::Verbosity;

/// Print diagnostics through miette, most severe first.
///
/// Quiet output shows errors only; informational diagnostics need `--verbose`.
pub fn print_diagnostics(diagnostics: &[Diagnostic], verbosity: Verbosity) {
    let threshold = match verbosity {
        Verbosity::Quiet => Severity::Error,
        Verbosity::Normal => Severity::Warning,
        Verbosity::Verbose => Severity::Info,
    };

    let mut shown: Vec<&Diagnostic> = diagnostics.iter().filter(|d| d.severity >= threshold).collect();
    // Stable sort keeps discovery order within a severity.
    shown.sort_by(|a, b| b.severity.cmp(&a.severity));

    for diagnostic in shown {
        eprintln!("{:?}", Report::new(diagnostic.clone()));
    }
}

/// One-line count of diagnostics by severity.
pub fn format_summary(diagnostics: &[Diagnostic]) -> String {
    let count = |severity| diagnostics.iter().filter(|d| d.severity == severity).count();
    format!(
        "{} error(s), {} warning(s), {} note(s)",
        count(Severity::Error),
        count(Severity::Warning),
        count(Severity::Info)
    )
}
