//! Configuration model for scribe.
//!
//! Two layers of configuration live here:
//!
//! - [`ScribeConfig`] is the raw, per-type configuration a host attaches to a
//!   type declaration. It is resolved into [`ScribeOptions`] once the suffix has
//!   been validated.
//! - [`GeneratorSettings`] controls how artifacts are rendered (indentation,
//!   descriptor namespace, artifact names). It is usually read from a
//!   `scribe.toml` located with [`ConfigDiscovery`].
//!
//! # Example
//!
//! ```
//! use scribe_config::{ScribeConfig, Visibility};
//!
//! let options = ScribeConfig::default()
//!     .with_suffix("Text")
//!     .with_visibility([Visibility::Public, Visibility::Internal])
//!     .resolve()
//!     .unwrap();
//!
//! assert_eq!(options.suffix, "Text");
//! assert!(options.visibility.contains(Visibility::Internal));
//! ```

pub mod discovery;
pub mod error;
pub mod options;
pub mod settings;
pub mod validation;
pub mod visibility;

pub use error::*;
pub use options::*;
pub use settings::*;
pub use visibility::*;

pub use discovery::{discover, ConfigDiscovery};
pub use validation::{is_identifier, is_valid_suffix, ConfigValidator, SchemaValidator};
