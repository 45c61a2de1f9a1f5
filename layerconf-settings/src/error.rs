//! Typed error variants for the layerconf-settings crate.
//!
//! Covers loading layer descriptions from disk and checking that preset
//! values agree with the settings they refer to.

use crate::types::SettingType;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while loading or checking a [`crate::Layer`].
#[derive(Debug, Error)]
pub enum LayerError {
    /// The layer description file could not be read.
    #[error("Failed to read layer description '{path}': {source}")]
    Io {
        /// Path of the file that could not be read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The layer description contained invalid JSON.
    #[error("JSON parse error in layer description: {0}")]
    Json(#[from] serde_json::Error),

    /// The layer description contained invalid YAML.
    #[error("YAML parse error in layer description: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// The file extension does not name a supported description format.
    #[error("Unsupported layer description format: '{0}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    /// A preset refers to a setting key that the layer does not declare.
    #[error("Preset '{preset}' refers to unknown setting '{key}'")]
    MissingSetting { preset: String, key: String },

    /// A preset value has a different type than the setting it refers to.
    #[error("Preset '{preset}' stores a {found} value for {expected} setting '{key}'")]
    TypeMismatch {
        preset: String,
        key: String,
        expected: SettingType,
        found: SettingType,
    },
}
