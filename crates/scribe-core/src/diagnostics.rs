//! Diagnostics reported while synthesizing.
//!
//! Every problem the pass finds is recoverable: the offending type or member
//! is skipped, a [`Diagnostic`] is handed to the [`DiagnosticSink`], and the
//! pass carries on with whatever still validates.

mod miette;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::symbols::Location;

/// Diagnostic severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

/// Every condition the pass can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticCode {
    InvalidSuffix,
    NonFragmentableType,
    NonFragmentableAncestor,
    NamingCollision,
    StubImplementationDisabled,
    MissingDescription,
    EmptyDescription,
    RedundantConfiguration,
    ExcludeMarkerUnconfigured,
    ExcludeMarkerNonEnum,
}

impl DiagnosticCode {
    pub const ALL: [DiagnosticCode; 10] = [
        DiagnosticCode::InvalidSuffix,
        DiagnosticCode::NonFragmentableType,
        DiagnosticCode::NonFragmentableAncestor,
        DiagnosticCode::NamingCollision,
        DiagnosticCode::StubImplementationDisabled,
        DiagnosticCode::MissingDescription,
        DiagnosticCode::EmptyDescription,
        DiagnosticCode::RedundantConfiguration,
        DiagnosticCode::ExcludeMarkerUnconfigured,
        DiagnosticCode::ExcludeMarkerNonEnum,
    ];

    /// Stable identifier shown to users.
    pub fn id(self) -> &'static str {
        match self {
            DiagnosticCode::InvalidSuffix => "SCR0001",
            DiagnosticCode::NonFragmentableType => "SCR0002",
            DiagnosticCode::NonFragmentableAncestor => "SCR0003",
            DiagnosticCode::NamingCollision => "SCR0004",
            DiagnosticCode::StubImplementationDisabled => "SCR0005",
            DiagnosticCode::MissingDescription => "SCR1001",
            DiagnosticCode::EmptyDescription => "SCR1002",
            DiagnosticCode::RedundantConfiguration => "SCR1003",
            DiagnosticCode::ExcludeMarkerUnconfigured => "SCR1004",
            DiagnosticCode::ExcludeMarkerNonEnum => "SCR1005",
        }
    }

    pub fn severity(self) -> Severity {
        match self {
            DiagnosticCode::InvalidSuffix
            | DiagnosticCode::NonFragmentableType
            | DiagnosticCode::NonFragmentableAncestor
            | DiagnosticCode::NamingCollision
            | DiagnosticCode::StubImplementationDisabled => Severity::Error,
            DiagnosticCode::MissingDescription => Severity::Info,
            DiagnosticCode::EmptyDescription
            | DiagnosticCode::RedundantConfiguration
            | DiagnosticCode::ExcludeMarkerUnconfigured
            | DiagnosticCode::ExcludeMarkerNonEnum => Severity::Warning,
        }
    }

    /// Suggested fix, if there is a useful one.
    pub fn help(self) -> Option<&'static str> {
        match self {
            DiagnosticCode::InvalidSuffix => {
                Some("Use a suffix made of letters, digits and underscores")
            }
            DiagnosticCode::NonFragmentableType | DiagnosticCode::NonFragmentableAncestor => {
                Some("Add the `partial` modifier to the declaration")
            }
            DiagnosticCode::NamingCollision => Some(
                "Rename the conflicting member, change the suffix, or mark the member as excluded",
            ),
            DiagnosticCode::StubImplementationDisabled => {
                Some("Enable `implementStubs` or remove the partial method")
            }
            DiagnosticCode::EmptyDescription => Some("Pass a string literal to the annotation"),
            DiagnosticCode::RedundantConfiguration => {
                Some("Remove the configuration or widen the visibility set")
            }
            DiagnosticCode::ExcludeMarkerUnconfigured | DiagnosticCode::ExcludeMarkerNonEnum => {
                Some("Remove the exclude marker")
            }
            DiagnosticCode::MissingDescription => None,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A single reported problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub message: String,
    pub location: Option<Location>,
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, message: impl Into<String>, location: Option<Location>) -> Self {
        Self {
            code,
            severity: code.severity(),
            message: message.into(),
            location,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        if let Some(location) = &self.location {
            write!(f, " ({location})")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostic {}

/// Receives diagnostics as they are reported. Reporting never blocks the pass.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Log a diagnostic at its severity and forward it to `sink`.
pub(crate) fn report(
    sink: &mut dyn DiagnosticSink,
    code: DiagnosticCode,
    message: impl Into<String>,
    location: Option<&Location>,
) {
    let diagnostic = Diagnostic::new(code, message, location.cloned());
    match diagnostic.severity {
        Severity::Error => error!(code = %code, "{}", diagnostic.message),
        Severity::Warning => warn!(code = %code, "{}", diagnostic.message),
        Severity::Info => debug!(code = %code, "{}", diagnostic.message),
    }
    sink.report(diagnostic);
}

/// Count diagnostics at or above `severity`.
pub fn count_at_least(diagnostics: &[Diagnostic], severity: Severity) -> usize {
    diagnostics.iter().filter(|d| d.severity >= severity).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_are_unique() {
        let mut ids: Vec<_> = DiagnosticCode::ALL.iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), DiagnosticCode::ALL.len());
    }

    #[test]
    fn severity_follows_code() {
        let d = Diagnostic::new(DiagnosticCode::MissingDescription, "no description", None);
        assert_eq!(d.severity, Severity::Info);
        assert!(!d.is_error());
        assert!(Diagnostic::new(DiagnosticCode::NamingCollision, "taken", None).is_error());
    }

    #[test]
    fn display_includes_location() {
        let d = Diagnostic::new(
            DiagnosticCode::RedundantConfiguration,
            "nothing to describe",
            Some(Location::new("Inventory.cs", 4, 9)),
        );
        assert_eq!(
            d.to_string(),
            "warning[SCR1003]: nothing to describe (Inventory.cs:4:9)"
        );
    }

    #[test]
    fn vec_sink_collects_in_order() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        report(&mut sink, DiagnosticCode::InvalidSuffix, "first", None);
        report(&mut sink, DiagnosticCode::EmptyDescription, "second", None);
        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].message, "first");
        assert_eq!(count_at_least(&sink, Severity::Warning), 2);
        assert_eq!(count_at_least(&sink, Severity::Error), 1);
    }
}
