//! Source emission.
//!
//! Two artifacts are rendered from the pass caches: the descriptor class with
//! one lookup method per enumeration, and the fragment file with one partial
//! declaration per type that synthesizes something (plus the enclosing types
//! needed to reach it). Rendering only reads the caches, so identical caches
//! produce identical text.

pub mod descriptors;
pub mod fragments;
pub mod writer;

use scribe_config::GeneratorSettings;
use serde::{Deserialize, Serialize};

use crate::records::{EnumCache, TypeArena};

pub use descriptors::render_descriptors;
pub use fragments::render_fragments;
pub use writer::{escape_string, SourceWriter};

/// Which of the two outputs an artifact is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Descriptors,
    Fragments,
}

/// A named block of generated source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub name: String,
    pub kind: ArtifactKind,
    pub contents: String,
}

/// Render both artifacts.
pub fn emit(arena: &TypeArena, enums: &EnumCache, settings: &GeneratorSettings) -> Vec<Artifact> {
    vec![
        Artifact {
            name: settings.descriptor_artifact.clone(),
            kind: ArtifactKind::Descriptors,
            contents: render_descriptors(enums, settings),
        },
        Artifact {
            name: settings.fragment_artifact.clone(),
            kind: ArtifactKind::Fragments,
            contents: render_fragments(arena, settings),
        },
    ]
}

pub(crate) fn write_preamble(w: &mut SourceWriter) {
    w.line("// <auto-generated/>");
    w.line("#nullable enable");
    w.blank();
}

pub(crate) fn write_epilogue(w: &mut SourceWriter) {
    w.blank();
    w.line("#nullable restore");
}
