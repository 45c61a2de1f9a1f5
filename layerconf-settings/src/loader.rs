//! Loading layer descriptions from JSON or YAML.
//!
//! A layer description is the serialized form of [`Layer`]. Every loaded
//! layer has its presets checked against its settings before it is returned.

use crate::error::LayerError;
use crate::layer::Layer;
use std::fs;
use std::path::Path;

impl Layer {
    /// Parse a layer description from a JSON string.
    pub fn from_json_str(contents: &str) -> Result<Self, LayerError> {
        let layer: Layer = serde_json::from_str(contents)?;
        layer.check_presets()?;
        Ok(layer)
    }

    /// Parse a layer description from a YAML string.
    pub fn from_yaml_str(contents: &str) -> Result<Self, LayerError> {
        let layer: Layer = serde_yaml_ng::from_str(contents)?;
        layer.check_presets()?;
        Ok(layer)
    }

    /// Load a layer description, choosing the parser by file extension.
    pub fn load(path: &Path) -> Result<Self, LayerError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Layer, LayerError> = match extension.as_deref() {
            Some("json") => Layer::from_json_str,
            Some("yaml") | Some("yml") => Layer::from_yaml_str,
            _ => return Err(LayerError::UnsupportedFormat(path.to_path_buf())),
        };

        log::info!("Loading layer description from {:?}", path);
        let contents = fs::read_to_string(path).map_err(|source| LayerError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let layer = parse(&contents)?;
        log::info!(
            "Loaded layer {} ({} top-level settings, {} presets)",
            layer.key,
            layer.settings.len(),
            layer.presets.len()
        );
        Ok(layer)
    }
}
