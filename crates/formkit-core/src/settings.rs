//! Settings for the formkit engine.
//!
//! This module provides the [`Settings`] struct holding engine configuration
//! with sensible defaults, plus loaders for TOML configuration files.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML file or string (overriding defaults).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FormError, FormResult};

/// Engine configuration.
///
/// # Examples
///
/// ```
/// use formkit_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.log_level, "info");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether debug mode is enabled. Controls the logging format
    /// (pretty vs. JSON).
    pub debug: bool,
    /// The tracing filter directive (e.g. "debug", "info", "formkit=trace").
    pub log_level: String,
    /// Path of the persisted schema collection used by the JSON file store.
    pub store_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            store_path: PathBuf::from("schemas.json"),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML string. Fields not present in the TOML
    /// keep their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or cannot be deserialized.
    pub fn from_toml_str(toml_str: &str) -> FormResult<Self> {
        toml::from_str(toml_str).map_err(|e| FormError::Serialization(e.to_string()))
    }

    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_toml_file(path: impl AsRef<Path>) -> FormResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| FormError::Serialization(e.to_string()))?;
        Self::from_toml_str(&contents)
    }
}
