//! Per-type configuration.
//!
//! A host attaches a [`ScribeConfig`] to every type declaration that should
//! receive description accessors. The raw value is resolved into
//! [`ScribeOptions`] before any members are inspected; resolution fails only
//! when the suffix is unusable.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::validation::{ConfigValidator, SchemaValidator};
use crate::visibility::{Visibility, VisibilitySet};

/// Suffix appended to a member name when none is configured.
pub const DEFAULT_SUFFIX: &str = "Description";

/// Raw configuration attached to a type declaration.
///
/// Fields missing from the serialized form take their defaults. An explicit
/// `null` suffix is kept as `None` so that it can be reported instead of
/// silently replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScribeConfig {
    #[serde(default = "default_suffix")]
    pub suffix: Option<String>,

    #[serde(default)]
    pub include_fields: bool,

    #[serde(default)]
    pub visibility: VisibilitySet,

    #[serde(default = "default_true")]
    pub implement_stubs: bool,

    #[serde(default)]
    pub exclude_from_serialization: bool,
}

fn default_suffix() -> Option<String> {
    Some(DEFAULT_SUFFIX.to_string())
}

fn default_true() -> bool {
    true
}

impl Default for ScribeConfig {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
            include_fields: false,
            visibility: VisibilitySet::default(),
            implement_stubs: true,
            exclude_from_serialization: false,
        }
    }
}

impl ScribeConfig {
    /// Create from serde_json::Value (for configuration embedded in a symbol manifest)
    ///
    /// # Example
    ///
    /// ```
    /// use scribe_config::ScribeConfig;
    /// use serde_json::json;
    ///
    /// let config = ScribeConfig::from_value(json!({ "suffix": "Text", "includeFields": true })).unwrap();
    /// assert_eq!(config.suffix.as_deref(), Some("Text"));
    /// assert!(config.include_fields);
    /// assert!(config.implement_stubs);
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::invalid_value("scribe", e.to_string()))
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_include_fields(mut self, include_fields: bool) -> Self {
        self.include_fields = include_fields;
        self
    }

    pub fn with_visibility(mut self, visibility: impl IntoIterator<Item = Visibility>) -> Self {
        self.visibility = visibility.into_iter().collect();
        self
    }

    pub fn with_implement_stubs(mut self, implement_stubs: bool) -> Self {
        self.implement_stubs = implement_stubs;
        self
    }

    pub fn with_exclude_from_serialization(mut self, exclude: bool) -> Self {
        self.exclude_from_serialization = exclude;
        self
    }

    /// Validate and resolve into [`ScribeOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NullSuffix`] or [`ConfigError::InvalidSuffix`]
    /// when the suffix cannot be appended to an identifier.
    pub fn resolve(&self) -> Result<ScribeOptions> {
        SchemaValidator.validate(self)?;

        let suffix = self.suffix.clone().ok_or(ConfigError::NullSuffix)?;
        Ok(ScribeOptions {
            suffix,
            include_fields: self.include_fields,
            visibility: self.visibility,
            implement_stubs: self.implement_stubs,
            exclude_from_serialization: self.exclude_from_serialization,
        })
    }
}

/// Validated per-type options consumed by the synthesis pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScribeOptions {
    pub suffix: String,
    pub include_fields: bool,
    pub visibility: VisibilitySet,
    pub implement_stubs: bool,
    pub exclude_from_serialization: bool,
}

impl Default for ScribeOptions {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            include_fields: false,
            visibility: VisibilitySet::default(),
            implement_stubs: true,
            exclude_from_serialization: false,
        }
    }
}

impl ScribeOptions {
    /// Name of the accessor synthesized for `member`.
    pub fn target_name(&self, member: &str) -> String {
        format!("{member}{}", self.suffix)
    }
}
