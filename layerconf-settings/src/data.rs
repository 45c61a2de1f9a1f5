//! Setting values bound to settings metadata by key.

use crate::meta::{ListEntry, SettingKind, SettingMeta, SettingMetaSet};
use crate::types::SettingType;
use serde::{Deserialize, Serialize};

/// Current or preset value of one setting, tagged like [`SettingKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettingValue {
    Group,
    Bool(bool),
    BoolNumericDeprecated(bool),
    Int(i32),
    Float(f64),
    String(String),
    #[serde(rename = "INT_RANGES")]
    Frames(String),
    Enum(String),
    Flags(Vec<String>),
    List(Vec<ListEntry>),
    LoadFile(String),
    SaveFile(String),
    SaveFolder(String),
}

impl SettingValue {
    pub fn setting_type(&self) -> SettingType {
        match self {
            SettingValue::Group => SettingType::Group,
            SettingValue::Bool(_) => SettingType::Bool,
            SettingValue::BoolNumericDeprecated(_) => SettingType::BoolNumericDeprecated,
            SettingValue::Int(_) => SettingType::Int,
            SettingValue::Float(_) => SettingType::Float,
            SettingValue::String(_) => SettingType::String,
            SettingValue::Frames(_) => SettingType::Frames,
            SettingValue::Enum(_) => SettingType::Enum,
            SettingValue::Flags(_) => SettingType::Flags,
            SettingValue::List(_) => SettingType::List,
            SettingValue::LoadFile(_) => SettingType::LoadFile,
            SettingValue::SaveFile(_) => SettingType::SaveFile,
            SettingValue::SaveFolder(_) => SettingType::SaveFolder,
        }
    }

    /// The default value declared by a setting kind.
    pub fn default_for(kind: &SettingKind) -> Self {
        match kind {
            SettingKind::Group => SettingValue::Group,
            SettingKind::Bool(meta) => SettingValue::Bool(meta.default_value),
            SettingKind::BoolNumericDeprecated(meta) => {
                SettingValue::BoolNumericDeprecated(meta.default_value)
            }
            SettingKind::Int(meta) => SettingValue::Int(meta.default_value),
            SettingKind::Float(meta) => SettingValue::Float(meta.default_value),
            SettingKind::String(meta) => SettingValue::String(meta.default_value.clone()),
            SettingKind::Frames(meta) => SettingValue::Frames(meta.default_value.clone()),
            SettingKind::Enum(meta) => SettingValue::Enum(meta.default_value.clone()),
            SettingKind::Flags(meta) => SettingValue::Flags(meta.default_value.clone()),
            SettingKind::List(meta) => SettingValue::List(meta.default_value.clone()),
            SettingKind::LoadFile(meta) => SettingValue::LoadFile(meta.default_value.clone()),
            SettingKind::SaveFile(meta) => SettingValue::SaveFile(meta.default_value.clone()),
            SettingKind::SaveFolder(meta) => SettingValue::SaveFolder(meta.default_value.clone()),
        }
    }
}

/// A value bound to the setting whose key it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingData {
    pub key: String,
    #[serde(flatten)]
    pub value: SettingValue,
}

impl SettingData {
    pub fn new(key: impl Into<String>, value: SettingValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    /// Value holding the default declared by `meta`.
    pub fn from_meta_default(meta: &SettingMeta) -> Self {
        Self::new(meta.key.clone(), SettingValue::default_for(&meta.kind))
    }

    pub fn setting_type(&self) -> SettingType {
        self.value.setting_type()
    }
}

/// Ordered, flat collection of setting values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingDataSet(Vec<SettingData>);

impl SettingDataSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// One default value per non-group setting, in pre-order.
    pub fn from_defaults(settings: &SettingMetaSet) -> Self {
        settings
            .walk()
            .filter(|meta| meta.setting_type() != SettingType::Group)
            .map(SettingData::from_meta_default)
            .collect()
    }

    pub fn push(&mut self, data: SettingData) {
        self.0.push(data);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SettingData> {
        self.0.iter()
    }

    pub fn get(&self, key: &str) -> Option<&SettingData> {
        self.0.iter().find(|data| data.key == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut SettingData> {
        self.0.iter_mut().find(|data| data.key == key)
    }
}

impl From<Vec<SettingData>> for SettingDataSet {
    fn from(values: Vec<SettingData>) -> Self {
        Self(values)
    }
}

impl FromIterator<SettingData> for SettingDataSet {
    fn from_iter<I: IntoIterator<Item = SettingData>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SettingDataSet {
    type Item = &'a SettingData;
    type IntoIter = std::slice::Iter<'a, SettingData>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
