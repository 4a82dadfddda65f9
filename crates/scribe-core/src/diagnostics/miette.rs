//! Miette diagnostic conversion for pass diagnostics.

use std::fmt::Display;

use crate::diagnostics::{Diagnostic, Severity};

impl miette::Diagnostic for Diagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(format!("scribe::{}", self.code.id())))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(match self.severity {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
            Severity::Info => miette::Severity::Advice,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        let hint = self.code.help();
        match &self.location {
            Some(location) => Some(Box::new(match hint {
                Some(hint) => format!("{hint}\n  at {location}"),
                None => format!("at {location}"),
            })),
            None => hint.map(|h| Box::new(h) as Box<dyn Display>),
        }
    }
}
