//! Pluggable config validation strategies
//!
//! Identifier rules follow C#: an identifier starts with a letter (Lu, Ll, Lt,
//! Lm, Lo, Nl) or underscore and continues with letters, decimal digits,
//! connector punctuation, combining marks or format characters.

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::error::{ConfigError, Result};
use crate::options::ScribeConfig;
use crate::settings::GeneratorSettings;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator<T: ?Sized> {
    fn validate(&self, config: &T) -> Result<()>;
}

/// Structural validation with no filesystem access.
///
/// # Example
///
/// ```
/// use scribe_config::{ConfigValidator, GeneratorSettings, SchemaValidator};
///
/// SchemaValidator.validate(&GeneratorSettings::default()).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator<ScribeConfig> for SchemaValidator {
    fn validate(&self, config: &ScribeConfig) -> Result<()> {
        let suffix = config.suffix.as_deref().ok_or(ConfigError::NullSuffix)?;
        if !is_valid_suffix(suffix) {
            return Err(ConfigError::InvalidSuffix {
                suffix: suffix.to_string(),
            });
        }
        Ok(())
    }
}

impl ConfigValidator<GeneratorSettings> for SchemaValidator {
    fn validate(&self, settings: &GeneratorSettings) -> Result<()> {
        if settings.indent_width == 0 || settings.indent_width > 16 {
            return Err(ConfigError::invalid_value(
                "indent_width",
                format!("{} is outside the supported range 1..=16", settings.indent_width),
            ));
        }

        if !settings.descriptor_namespace.split('.').all(is_identifier) {
            return Err(ConfigError::invalid_value(
                "descriptor_namespace",
                format!("'{}' is not a dotted identifier", settings.descriptor_namespace),
            ));
        }

        for (field, value) in [
            ("descriptor_class", &settings.descriptor_class),
            ("descriptor_method", &settings.descriptor_method),
        ] {
            if !is_identifier(value) {
                return Err(ConfigError::invalid_value(
                    field,
                    format!("'{value}' is not an identifier"),
                ));
            }
        }

        for (field, value) in [
            ("descriptor_artifact", &settings.descriptor_artifact),
            ("fragment_artifact", &settings.fragment_artifact),
        ] {
            if value.trim().is_empty() || value.contains(['/', '\\']) {
                return Err(ConfigError::invalid_value(
                    field,
                    "artifact names must be non-empty file names",
                ));
            }
        }

        if settings.descriptor_artifact == settings.fragment_artifact {
            return Err(ConfigError::invalid_value(
                "fragment_artifact",
                "must differ from descriptor_artifact",
            ));
        }

        if settings.tool_name.trim().is_empty() {
            return Err(ConfigError::invalid_value("tool_name", "cannot be empty"));
        }

        Ok(())
    }
}

fn is_identifier_start(c: char) -> bool {
    c == '_'
        || matches!(
            get_general_category(c),
            GeneralCategory::UppercaseLetter
                | GeneralCategory::LowercaseLetter
                | GeneralCategory::TitlecaseLetter
                | GeneralCategory::ModifierLetter
                | GeneralCategory::OtherLetter
                | GeneralCategory::LetterNumber
        )
}

fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c)
        || matches!(
            get_general_category(c),
            GeneralCategory::DecimalNumber
                | GeneralCategory::ConnectorPunctuation
                | GeneralCategory::NonspacingMark
                | GeneralCategory::SpacingMark
                | GeneralCategory::Format
        )
}

/// Whether `suffix` can be appended to an identifier. The empty suffix is valid.
pub fn is_valid_suffix(suffix: &str) -> bool {
    suffix.chars().all(is_identifier_part)
}

/// Whether `name` is a complete identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_part),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_accepts_identifier_parts() {
        assert!(is_valid_suffix(""));
        assert!(is_valid_suffix("Description"));
        assert!(is_valid_suffix("_2"));
        assert!(is_valid_suffix("Beschreibung"));
        assert!(is_valid_suffix("描述"));
    }

    #[test]
    fn suffix_rejects_punctuation_and_whitespace() {
        assert!(!is_valid_suffix("Desc ription"));
        assert!(!is_valid_suffix("Desc-ription"));
        assert!(!is_valid_suffix("Text!"));
        assert!(!is_valid_suffix("."));
    }

    #[test]
    fn suffix_follows_identifier_categories() {
        // Pc, Mn, Mc, Cf and Nl continue an identifier.
        assert!(is_valid_suffix("a\u{203F}b"));
        assert!(is_valid_suffix("e\u{0301}"));
        assert!(is_valid_suffix("\u{0915}\u{093F}"));
        assert!(is_valid_suffix("Text\u{200D}"));
        assert!(is_valid_suffix("\u{2160}"));
        // No, Sc and So do not.
        assert!(!is_valid_suffix("Half\u{00BD}"));
        assert!(!is_valid_suffix("\u{00B2}"));
        assert!(!is_valid_suffix("Cost$"));
        assert!(!is_valid_suffix("\u{00A9}"));
    }

    #[test]
    fn identifiers_cannot_start_with_a_continuation() {
        assert!(is_identifier("_Scribe"));
        assert!(is_identifier("\u{2160}Roman"));
        assert!(!is_identifier("1Scribe"));
        assert!(!is_identifier("\u{0301}Scribe"));
        assert!(!is_identifier("\u{203F}Scribe"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn identifiers_cannot_start_with_digits() {
        assert!(is_identifier("EnumDescriptions"));
        assert!(is_identifier("_x"));
        assert!(!is_identifier("1x"));
        assert!(!is_identifier(""));
    }

    #[test]
    fn settings_reject_zero_indent() {
        let settings = GeneratorSettings {
            indent_width: 0,
            ..GeneratorSettings::default()
        };
        assert!(SchemaValidator.validate(&settings).is_err());
    }

    #[test]
    fn settings_reject_bad_namespace() {
        let settings = GeneratorSettings {
            descriptor_namespace: "Scribe..Extensions".to_string(),
            ..GeneratorSettings::default()
        };
        assert!(SchemaValidator.validate(&settings).is_err());
    }

    #[test]
    fn settings_reject_colliding_artifacts() {
        let defaults = GeneratorSettings::default();
        let settings = GeneratorSettings {
            fragment_artifact: defaults.descriptor_artifact.clone(),
            ..defaults
        };
        assert!(SchemaValidator.validate(&settings).is_err());
    }
}
