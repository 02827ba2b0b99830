//! TOML-based configuration for semfilter.
//!
//! Every table and key is optional; missing values fall back to the defaults
//! shown here.
//!
//! Example configuration:
//! ```toml
//! [naming]
//! separator = "__"
//! metric_time = "metric_time"
//!
//! [intersection]
//! parallel = false
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::naming::NamingConventions;

static IDENTIFIER: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$"));

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Separator and reserved names used to decode element names.
    pub naming: NamingConventions,

    /// How filter intersections are parsed.
    pub intersection: IntersectionSettings,
}

/// Intersection parsing settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct IntersectionSettings {
    /// Parse the expressions of an intersection on the rayon thread pool.
    pub parallel: bool,
}

impl Settings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        log::debug!("loading settings from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Check that the naming conventions can be used to decode names.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let naming = &self.naming;
        if naming.separator.is_empty() {
            return Err(SettingsError::InvalidConfig(
                "naming.separator must not be empty".to_string(),
            ));
        }
        let identifier = IDENTIFIER
            .as_ref()
            .map_err(|e| SettingsError::InvalidConfig(format!("identifier pattern: {e}")))?;
        if !identifier.is_match(&naming.metric_time) {
            return Err(SettingsError::InvalidConfig(format!(
                "naming.metric_time must be an identifier, got '{}'",
                naming.metric_time
            )));
        }
        if naming.contains_separator(&naming.metric_time) {
            log::warn!(
                "metric time name '{}' contains the separator '{}'",
                naming.metric_time,
                naming.separator
            );
        }
        Ok(())
    }
}
