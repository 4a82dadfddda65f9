//! Synthesis engine for enum description accessors.
//!
//! Given the declarations of a program (see [`symbols`]), scribe finds every
//! type configured for synthesis, checks that it and its enclosing types can
//! be extended by another partial declaration, selects its enum-typed members,
//! and emits:
//!
//! - a descriptor class with one `DescriptionText` extension method per
//!   enumeration, mapping each variant to its description, and
//! - partial declarations adding a `{Member}{Suffix}` accessor (or the body of
//!   a caller-declared partial method) for each selected member.
//!
//! Problems are reported as [`Diagnostic`]s and never abort the pass.
//!
//! # Architecture
//!
//! - [`lineage`] validates and registers enclosing types
//! - [`selector`] picks members and resolves naming collisions
//! - [`describe`] builds the per-enumeration description tables
//! - [`emit`] renders the two artifacts
//! - [`engine`] drives a single pass over a [`symbols::SymbolSource`]

pub mod describe;
pub mod diagnostics;
pub mod emit;
pub mod engine;
pub mod error;
pub mod lineage;
pub mod records;
pub mod selector;
pub mod symbols;

pub use diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, Severity};
pub use emit::{Artifact, ArtifactKind};
pub use engine::{run, PassOutput, ScribePass};
pub use error::{Result, ScribeError};
pub use records::{EnumRecord, MemberRecord, StubHandle, SynthesisTarget, TypeRecord};
pub use symbols::{SymbolSource, SymbolTable};

pub use scribe_config::{GeneratorSettings, ScribeConfig, ScribeOptions};
