//! Canonical text rendering of setting defaults and values.
//!
//! - [`format_default`]: the default declared by a setting's metadata
//! - [`format_current`]: a stored value, checked against its metadata where needed
//! - [`resolve_display_value`]: the Float fallback policy

use crate::error::DocError;
use layerconf_settings::{
    FloatMeta, Layer, ListEntry, SettingData, SettingKind, SettingMeta, SettingType, SettingValue,
};

/// Bool settings print in upper case; existing settings files depend on it.
fn format_bool(value: bool) -> &'static str {
    if value { "TRUE" } else { "FALSE" }
}

fn format_bool_numeric(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

/// Enabled entries only, comma separated, each as its key or else its number.
fn format_list(entries: &[ListEntry]) -> String {
    entries
        .iter()
        .filter(|entry| entry.enabled)
        .map(|entry| {
            if entry.key.is_empty() {
                entry.number.to_string()
            } else {
                entry.key.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Every flag, comma separated. Flags have no enabled state.
fn format_flags(flags: &[String]) -> String {
    flags.join(",")
}

/// Value to display for a Float setting.
///
/// Values that fail the setting's validity check are replaced by its default.
pub fn resolve_display_value(meta: &FloatMeta, value: f64) -> f64 {
    if meta.is_valid(value) {
        value
    } else {
        meta.default_value
    }
}

/// Render the default value declared by `meta`. Groups render as empty.
pub fn format_default(meta: &SettingMeta) -> String {
    match &meta.kind {
        SettingKind::Group => String::new(),
        SettingKind::LoadFile(path) | SettingKind::SaveFile(path) | SettingKind::SaveFolder(path) => {
            path.default_value.clone()
        }
        SettingKind::String(string) | SettingKind::Frames(string) => string.default_value.clone(),
        SettingKind::Int(int) => int.default_value.to_string(),
        SettingKind::Float(float) => float.format_value(float.default_value),
        SettingKind::BoolNumericDeprecated(b) => format_bool_numeric(b.default_value).to_string(),
        SettingKind::Bool(b) => format_bool(b.default_value).to_string(),
        SettingKind::List(list) => format_list(&list.default_value),
        SettingKind::Enum(e) => e.default_value.clone(),
        SettingKind::Flags(flags) => format_flags(&flags.default_value),
    }
}

/// Render a stored setting value.
///
/// Float values are formatted with the width and precision of the matching
/// setting in `layer`, so that setting must exist and be a Float.
pub fn format_current(layer: &Layer, data: &SettingData) -> Result<String, DocError> {
    let text = match &data.value {
        SettingValue::Group => String::new(),
        SettingValue::LoadFile(path) | SettingValue::SaveFile(path) | SettingValue::SaveFolder(path) => {
            path.clone()
        }
        SettingValue::Frames(value) | SettingValue::String(value) | SettingValue::Enum(value) => {
            value.clone()
        }
        SettingValue::Int(value) => value.to_string(),
        SettingValue::Float(value) => {
            let meta = float_meta(layer, &data.key)?;
            let shown = resolve_display_value(meta, *value);
            if shown != *value {
                log::warn!(
                    "Value {} of setting '{}' is out of range, showing default {}",
                    value,
                    data.key,
                    shown
                );
            }
            meta.format_value(shown)
        }
        SettingValue::BoolNumericDeprecated(value) => format_bool_numeric(*value).to_string(),
        SettingValue::Bool(value) => format_bool(*value).to_string(),
        SettingValue::List(entries) => format_list(entries),
        SettingValue::Flags(flags) => format_flags(flags),
    };
    Ok(text)
}

fn float_meta<'a>(layer: &'a Layer, key: &str) -> Result<&'a FloatMeta, DocError> {
    let meta = layer
        .find_setting(key)
        .ok_or_else(|| DocError::MissingSetting {
            key: key.to_string(),
        })?;

    match &meta.kind {
        SettingKind::Float(float) => Ok(float),
        other => Err(DocError::TypeMismatch {
            key: key.to_string(),
            expected: other.setting_type(),
            found: SettingType::Float,
        }),
    }
}
