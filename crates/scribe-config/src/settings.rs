//! Generator settings shared by every type in a pass.

use serde::{Deserialize, Serialize};

/// Rendering settings for the two emitted artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    /// Spaces per indentation level.
    pub indent_width: usize,

    /// Namespace holding the descriptor class.
    pub descriptor_namespace: String,

    /// Static class holding one extension method per enumeration.
    pub descriptor_class: String,

    /// Name of the extension method generated for every enumeration.
    pub descriptor_method: String,

    pub descriptor_artifact: String,

    pub fragment_artifact: String,

    /// Tool name stamped on generated code.
    pub tool_name: String,

    pub tool_version: String,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            indent_width: 4,
            descriptor_namespace: "Scribe.Extensions".to_string(),
            descriptor_class: "EnumDescriptions".to_string(),
            descriptor_method: "DescriptionText".to_string(),
            descriptor_artifact: "EnumDescriptions.g.cs".to_string(),
            fragment_artifact: "ScribedTypes.g.cs".to_string(),
            tool_name: "Scribe".to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl GeneratorSettings {
    /// One indentation unit.
    pub fn indent_unit(&self) -> String {
        " ".repeat(self.indent_width)
    }
}
