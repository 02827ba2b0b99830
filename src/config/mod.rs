//! Configuration module for semfilter.
//!
//! Handles the naming conventions and intersection settings read from TOML.

mod settings;

pub use settings::{IntersectionSettings, Settings, SettingsError};
