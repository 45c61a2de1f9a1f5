//! Typed error types for layerconf-doc.

use layerconf_settings::SettingType;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while rendering or writing layer documentation.
///
/// Rendering is all-or-nothing: any error other than [`DocError::Write`]
/// means no document was produced.
#[derive(Debug, Error)]
pub enum DocError {
    /// A setting value refers to a key the layer's settings tree doesn't declare.
    #[error("No setting '{key}' is declared by the layer")]
    MissingSetting { key: String },

    /// A setting value's type disagrees with the setting it refers to.
    #[error("Setting '{key}' is declared as {expected} but the value is {found}")]
    TypeMismatch {
        key: String,
        expected: SettingType,
        found: SettingType,
    },

    /// The rendered document could not be written.
    #[error("Failed to write documentation to '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested export is reserved but not available.
    #[error("{0} is not available")]
    Unsupported(&'static str),
}
