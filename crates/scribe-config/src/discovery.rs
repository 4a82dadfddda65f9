//! File-based settings discovery for CLI use
//!
//! Handles finding and loading `scribe.toml` from the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConfigError, Result};
use crate::settings::GeneratorSettings;
use crate::validation::{ConfigValidator, SchemaValidator};

/// File names searched, in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["scribe.toml", ".scribe.toml"];

/// File-based configuration discovery
///
/// Library users build [`GeneratorSettings`] directly; this is for hosts that
/// keep their settings next to the project.
///
/// # Example
///
/// ```no_run
/// use scribe_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new(".");
/// let settings = discovery.load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    pub fn find(&self) -> Option<PathBuf> {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.is_file())
    }

    /// Load settings from the discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<GeneratorSettings> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        load_from(&path)
    }

    /// Load settings from the discovered file, or defaults when there is none.
    pub fn load_or_default(&self) -> Result<GeneratorSettings> {
        match self.find() {
            Some(path) => load_from(&path),
            None => Ok(GeneratorSettings::default()),
        }
    }
}

/// Load and validate settings from a specific file path
pub fn load_from(path: &Path) -> Result<GeneratorSettings> {
    debug!("Loading settings from {}", path.display());
    let content = fs::read_to_string(path)?;

    let settings: GeneratorSettings = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    SchemaValidator.validate(&settings)?;
    Ok(settings)
}

/// Discover and load settings from the current directory (convenience function)
pub fn discover() -> Result<GeneratorSettings> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_or_default()
}
