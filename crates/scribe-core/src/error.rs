//! Error types for loading symbol manifests
//!
//! Problems found while synthesizing are reported as [`crate::Diagnostic`]s
//! and never abort a pass; these errors cover the input the pass runs on.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while building a symbol table
#[derive(Error, Debug, Diagnostic)]
pub enum ScribeError {
    /// Manifest could not be parsed
    #[error("Invalid symbol manifest: {message}")]
    #[diagnostic(
        code(scribe::manifest::parse),
        help("The manifest is a JSON object with `types`, `enums` and `availableTypes` arrays")
    )]
    ManifestParse { message: String },

    /// A type reference string could not be parsed
    #[error("Invalid type reference '{text}': {reason}")]
    #[diagnostic(code(scribe::manifest::type_ref))]
    InvalidTypeRef { text: String, reason: String },

    /// Two declarations share a name
    #[error("Duplicate {kind} '{name}'")]
    #[diagnostic(
        code(scribe::manifest::duplicate),
        help("Each type and enumeration must appear once; merge partial declarations into one entry")
    )]
    DuplicateSymbol { kind: &'static str, name: String },

    /// A nested declaration names an enclosing type that is not in the manifest
    #[error("'{name}' is nested in unknown type '{containing_type}'")]
    #[diagnostic(code(scribe::manifest::unknown_containing_type))]
    UnknownContainingType { name: String, containing_type: String },

    #[error("I/O error: {0}")]
    #[diagnostic(code(scribe::io))]
    Io(#[from] std::io::Error),
}

impl ScribeError {
    /// Create an InvalidTypeRef error
    pub fn invalid_type_ref(text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTypeRef {
            text: text.into(),
            reason: reason.into(),
        }
    }

    /// Create a DuplicateSymbol error
    pub fn duplicate(kind: &'static str, name: impl Into<String>) -> Self {
        Self::DuplicateSymbol {
            kind,
            name: name.into(),
        }
    }
}

impl From<serde_json::Error> for ScribeError {
    fn from(err: serde_json::Error) -> Self {
        Self::ManifestParse {
            message: err.to_string(),
        }
    }
}

/// Result type for manifest operations
pub type Result<T> = std::result::Result<T, ScribeError>;
