//! Layered generator settings.
//!
//! Priority: command-line flags > `SCRIBE_*` environment variables >
//! settings file > defaults.

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
};
use scribe_config::{ConfigDiscovery, ConfigError, ConfigValidator, GeneratorSettings, SchemaValidator};
use serde::Serialize;
use tracing::debug;

use crate::cli::PassArgs;
use crate::error::Result;

/// Settings keys readable from `SCRIBE_*` environment variables.
pub const ENV_KEYS: [&str; 8] = [
    "indent_width",
    "descriptor_namespace",
    "descriptor_class",
    "descriptor_method",
    "descriptor_artifact",
    "fragment_artifact",
    "tool_name",
    "tool_version",
];

/// Settings given on the command line; unset flags leave lower layers alone.
#[derive(Debug, Default, Serialize)]
struct FlagOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    indent_width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    descriptor_namespace: Option<String>,
}

impl From<&PassArgs> for FlagOverrides {
    fn from(args: &PassArgs) -> Self {
        Self {
            indent_width: args.indent.map(usize::from),
            descriptor_namespace: args.namespace.clone(),
        }
    }
}

/// Load settings for a pass from `cwd` and the command line.
///
/// An explicit `--config` path must exist; otherwise `scribe.toml` (or
/// `.scribe.toml`) in `cwd` is used when present.
pub fn load_settings(args: &PassArgs, cwd: &Path) -> Result<GeneratorSettings> {
    let file = settings_file(args.config.as_deref(), cwd)?;

    let mut figment = Figment::new().merge(Serialized::defaults(GeneratorSettings::default()));
    if let Some(path) = &file {
        debug!("Merging settings from {}", path.display());
        figment = figment.merge(Toml::file(path));
    }
    figment = figment
        .merge(Env::prefixed("SCRIBE_").only(&ENV_KEYS))
        .merge(Serialized::defaults(FlagOverrides::from(args)));

    let settings: GeneratorSettings = figment.extract().map_err(|e| ConfigError::Parse {
        path: file.unwrap_or_else(|| PathBuf::from("<settings>")),
        message: e.to_string(),
    })?;

    SchemaValidator.validate(&settings)?;
    Ok(settings)
}

fn settings_file(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) => {
            let path = if path.is_absolute() { path.to_path_buf() } else { cwd.join(path) };
            if !path.is_file() {
                return Err(ConfigError::NotFound.into());
            }
            Ok(Some(path))
        }
        None => Ok(ConfigDiscovery::new(cwd).find()),
    }
}
