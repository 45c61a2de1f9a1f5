//! Layer aggregate: layer properties, settings schema and presets.

use crate::data::SettingDataSet;
use crate::error::LayerError;
use crate::meta::{SettingMeta, SettingMetaSet};
use crate::types::{PlatformFlags, StatusType};
use semver::Version;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix stripped from layer keys when building settings-file keys.
const LAYER_KEY_PREFIX: &str = "VK_LAYER_";

/// Build the settings-file prefix for a layer key.
///
/// `VK_LAYER_KHRONOS_validation` becomes `khronos_validation.`; the setting
/// key is appended to it to form the full settings-file variable.
pub fn layer_setting_prefix(layer_key: &str) -> String {
    let trimmed = layer_key
        .strip_prefix(LAYER_KEY_PREFIX)
        .unwrap_or(layer_key);
    format!("{}.", trimmed.to_lowercase())
}

fn default_file_format_version() -> Version {
    Version::new(1, 2, 0)
}

/// A named bundle of setting values recommended for a use case.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayerPreset {
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub settings: SettingDataSet,
}

impl LayerPreset {
    pub fn new(label: impl Into<String>, settings: SettingDataSet) -> Self {
        Self {
            label: label.into(),
            description: String::new(),
            settings,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A layer with its documentation properties, settings tree and presets.
///
/// Built once from a layer description and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub key: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub introduction: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub status: StatusType,
    pub api_version: Version,
    #[serde(default)]
    pub implementation_version: String,
    #[serde(default = "default_file_format_version")]
    pub file_format_version: Version,
    #[serde(default)]
    pub manifest_path: String,
    #[serde(default)]
    pub binary_path: String,
    #[serde(default)]
    pub platforms: PlatformFlags,
    #[serde(default)]
    pub settings: SettingMetaSet,
    #[serde(default)]
    pub presets: Vec<LayerPreset>,
}

impl Layer {
    /// Create a stable layer with no settings or presets.
    pub fn new(key: impl Into<String>, api_version: Version) -> Self {
        Self {
            key: key.into(),
            description: String::new(),
            introduction: String::new(),
            url: String::new(),
            status: StatusType::default(),
            api_version,
            implementation_version: String::new(),
            file_format_version: default_file_format_version(),
            manifest_path: String::new(),
            binary_path: String::new(),
            platforms: PlatformFlags::default(),
            settings: SettingMetaSet::new(),
            presets: Vec::new(),
        }
    }

    pub fn with_settings(mut self, settings: impl Into<SettingMetaSet>) -> Self {
        self.settings = settings.into();
        self
    }

    pub fn with_presets(mut self, presets: Vec<LayerPreset>) -> Self {
        self.presets = presets;
        self
    }

    /// Settings-file prefix for this layer's settings.
    pub fn setting_prefix(&self) -> String {
        layer_setting_prefix(&self.key)
    }

    /// Find a setting anywhere in the layer's settings tree.
    pub fn find_setting(&self, key: &str) -> Option<&SettingMeta> {
        self.settings.find(key)
    }

    /// File name of the layer manifest, without its directory.
    pub fn manifest_file_name(&self) -> &str {
        Path::new(&self.manifest_path)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.manifest_path)
    }

    /// Check that every preset value names a known setting of the same type.
    pub fn check_presets(&self) -> Result<(), LayerError> {
        for preset in &self.presets {
            for data in &preset.settings {
                let meta =
                    self.find_setting(&data.key)
                        .ok_or_else(|| LayerError::MissingSetting {
                            preset: preset.label.clone(),
                            key: data.key.clone(),
                        })?;

                if meta.setting_type() != data.setting_type() {
                    return Err(LayerError::TypeMismatch {
                        preset: preset.label.clone(),
                        key: data.key.clone(),
                        expected: meta.setting_type(),
                        found: data.setting_type(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SettingData, SettingValue};
    use crate::meta::{BoolMeta, SettingKind};
    use crate::types::SettingType;

    fn layer_with_bool() -> Layer {
        Layer::new("VK_LAYER_KHRONOS_validation", Version::new(1, 3, 250)).with_settings(vec![
            SettingMeta::new(
                "enable_foo",
                SettingKind::Bool(BoolMeta { default_value: true }),
            ),
        ])
    }

    #[test]
    fn prefix_strips_vk_layer_and_lowercases() {
        assert_eq!(
            layer_setting_prefix("VK_LAYER_KHRONOS_validation"),
            "khronos_validation."
        );
        assert_eq!(layer_setting_prefix("VK_LAYER_LUNARG_api_dump"), "lunarg_api_dump.");
        assert_eq!(layer_setting_prefix("MyLayer"), "mylayer.");
    }

    #[test]
    fn manifest_file_name_drops_directories() {
        let mut layer = layer_with_bool();
        layer.manifest_path = "/usr/share/vulkan/explicit_layer.d/VkLayer_khronos_validation.json".into();
        assert_eq!(layer.manifest_file_name(), "VkLayer_khronos_validation.json");

        layer.manifest_path = String::new();
        assert_eq!(layer.manifest_file_name(), "");
    }

    #[test]
    fn check_presets_accepts_matching_values() {
        let layer = layer_with_bool().with_presets(vec![LayerPreset::new(
            "Quiet",
            vec![SettingData::new("enable_foo", SettingValue::Bool(false))].into(),
        )]);
        assert!(layer.check_presets().is_ok());
    }

    #[test]
    fn check_presets_reports_unknown_key() {
        let layer = layer_with_bool().with_presets(vec![LayerPreset::new(
            "Broken",
            vec![SettingData::new("nope", SettingValue::Bool(false))].into(),
        )]);
        match layer.check_presets() {
            Err(LayerError::MissingSetting { preset, key }) => {
                assert_eq!(preset, "Broken");
                assert_eq!(key, "nope");
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn check_presets_reports_type_mismatch() {
        let layer = layer_with_bool().with_presets(vec![LayerPreset::new(
            "Wrong",
            vec![SettingData::new("enable_foo", SettingValue::Int(1))].into(),
        )]);
        match layer.check_presets() {
            Err(LayerError::TypeMismatch {
                expected, found, ..
            }) => {
                assert_eq!(expected, SettingType::Bool);
                assert_eq!(found, SettingType::Int);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }
}
