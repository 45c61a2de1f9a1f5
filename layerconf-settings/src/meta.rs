//! Settings metadata: the schema tree describing a layer's settings.
//!
//! A [`SettingMeta`] node carries the documentation fields shared by every
//! setting and a [`SettingKind`] holding the type-specific default value.
//! Nodes nest through `children`; by convention only `Group` nodes have
//! children, but traversal never relies on that.

use crate::types::{PlatformFlags, SettingType, SettingView, StatusType};
use serde::{Deserialize, Serialize};

// ============================================================================
// Kind-specific metadata
// ============================================================================

/// Boolean default, shared by `Bool` and `BoolNumericDeprecated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoolMeta {
    #[serde(rename = "default", default)]
    pub default_value: bool,
}

/// Integer setting with an optional inclusive range.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntMeta {
    #[serde(rename = "default", default)]
    pub default_value: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i32>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub unit: String,
}

impl IntMeta {
    /// Whether `value` lies inside the declared range.
    pub fn is_valid(&self, value: i32) -> bool {
        self.min_value.is_none_or(|min| value >= min)
            && self.max_value.is_none_or(|max| value <= max)
    }
}

/// Floating point setting.
///
/// `width` and `precision` form the display format, with the same meaning
/// as in a C `%W.Pf` conversion. A missing precision means six decimals.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FloatMeta {
    #[serde(rename = "default", default)]
    pub default_value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<usize>,
}

impl FloatMeta {
    const DEFAULT_PRECISION: usize = 6;

    /// Whether `value` is finite and inside the declared range.
    pub fn is_valid(&self, value: f64) -> bool {
        value.is_finite()
            && self.min_value.is_none_or(|min| value >= min)
            && self.max_value.is_none_or(|max| value <= max)
    }

    /// Format `value` with this setting's width and precision.
    pub fn format_value(&self, value: f64) -> String {
        let precision = self.precision.unwrap_or(Self::DEFAULT_PRECISION);
        match self.width {
            Some(width) => format!("{value:width$.precision$}"),
            None => format!("{value:.precision$}"),
        }
    }
}

/// String-valued setting (`String` and `Frames`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StringMeta {
    #[serde(rename = "default", default)]
    pub default_value: String,
}

/// Filesystem path setting (`LoadFile`, `SaveFile`, `SaveFolder`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilesystemMeta {
    #[serde(rename = "default", default)]
    pub default_value: String,
    /// File dialog filter, e.g. `*.json`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub filter: String,
}

/// One selectable value of an `Enum` or `Flags` setting.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SettingEnumValue {
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default)]
    pub view: SettingView,
    #[serde(default)]
    pub status: StatusType,
    /// Platforms declared by the value itself. Documentation lists the
    /// owning setting's platforms for every value instead.
    #[serde(rename = "platforms", default)]
    pub platform_flags: PlatformFlags,
}

impl SettingEnumValue {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_view(mut self, view: SettingView) -> Self {
        self.view = view;
        self
    }

    pub fn with_platforms(mut self, platform_flags: PlatformFlags) -> Self {
        self.platform_flags = platform_flags;
        self
    }
}

/// Single-choice setting.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnumMeta {
    #[serde(rename = "flags", default)]
    pub enum_values: Vec<SettingEnumValue>,
    #[serde(rename = "default", default)]
    pub default_value: String,
}

/// Multi-choice setting; every default entry is always active.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlagsMeta {
    #[serde(rename = "flags", default)]
    pub enum_values: Vec<SettingEnumValue>,
    #[serde(rename = "default", default)]
    pub default_value: Vec<String>,
}

/// A list element identified either by a string key or by a number.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NumberOrString {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(default)]
    pub number: i32,
}

/// An entry of a `List` value that can be switched on and off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    #[serde(default)]
    pub number: i32,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

fn enabled_by_default() -> bool {
    true
}

impl ListEntry {
    pub fn key(key: impl Into<String>, enabled: bool) -> Self {
        Self {
            key: key.into(),
            number: 0,
            enabled,
        }
    }

    pub fn number(number: i32, enabled: bool) -> Self {
        Self {
            key: String::new(),
            number,
            enabled,
        }
    }
}

/// List setting: suggested values plus the default list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListMeta {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list: Vec<NumberOrString>,
    #[serde(rename = "default", default)]
    pub default_value: Vec<ListEntry>,
}

// ============================================================================
// SettingKind
// ============================================================================

/// Type-specific part of a setting, tagged by its type token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettingKind {
    Group,
    Bool(BoolMeta),
    BoolNumericDeprecated(BoolMeta),
    Int(IntMeta),
    Float(FloatMeta),
    String(StringMeta),
    #[serde(rename = "INT_RANGES")]
    Frames(StringMeta),
    Enum(EnumMeta),
    Flags(FlagsMeta),
    List(ListMeta),
    LoadFile(FilesystemMeta),
    SaveFile(FilesystemMeta),
    SaveFolder(FilesystemMeta),
}

impl SettingKind {
    pub fn setting_type(&self) -> SettingType {
        match self {
            SettingKind::Group => SettingType::Group,
            SettingKind::Bool(_) => SettingType::Bool,
            SettingKind::BoolNumericDeprecated(_) => SettingType::BoolNumericDeprecated,
            SettingKind::Int(_) => SettingType::Int,
            SettingKind::Float(_) => SettingType::Float,
            SettingKind::String(_) => SettingType::String,
            SettingKind::Frames(_) => SettingType::Frames,
            SettingKind::Enum(_) => SettingType::Enum,
            SettingKind::Flags(_) => SettingType::Flags,
            SettingKind::List(_) => SettingType::List,
            SettingKind::LoadFile(_) => SettingType::LoadFile,
            SettingKind::SaveFile(_) => SettingType::SaveFile,
            SettingKind::SaveFolder(_) => SettingType::SaveFolder,
        }
    }
}

// ============================================================================
// SettingMeta
// ============================================================================

/// Schema node describing one setting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingMeta {
    pub key: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
    /// Environment variable overriding the setting; empty when there is none.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub env: String,
    #[serde(default)]
    pub status: StatusType,
    #[serde(default)]
    pub view: SettingView,
    #[serde(rename = "platforms", default)]
    pub platform_flags: PlatformFlags,
    #[serde(flatten)]
    pub kind: SettingKind,
    #[serde(rename = "settings", default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SettingMeta>,
}

impl SettingMeta {
    /// Create a standard, stable, desktop-wide setting of the given kind.
    pub fn new(key: impl Into<String>, kind: SettingKind) -> Self {
        Self {
            key: key.into(),
            label: String::new(),
            description: String::new(),
            env: String::new(),
            status: StatusType::default(),
            view: SettingView::default(),
            platform_flags: PlatformFlags::default(),
            kind,
            children: Vec::new(),
        }
    }

    /// Create a group node holding `children`.
    pub fn group(key: impl Into<String>, children: Vec<SettingMeta>) -> Self {
        Self::new(key, SettingKind::Group).with_children(children)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.env = env.into();
        self
    }

    pub fn with_status(mut self, status: StatusType) -> Self {
        self.status = status;
        self
    }

    pub fn with_view(mut self, view: SettingView) -> Self {
        self.view = view;
        self
    }

    pub fn with_platforms(mut self, platform_flags: PlatformFlags) -> Self {
        self.platform_flags = platform_flags;
        self
    }

    pub fn with_children(mut self, children: Vec<SettingMeta>) -> Self {
        self.children = children;
        self
    }

    pub fn setting_type(&self) -> SettingType {
        self.kind.setting_type()
    }

    /// Whether this node gets its own entry in generated documentation.
    ///
    /// Groups and hidden settings are skipped; their children are not.
    pub fn is_documented(&self) -> bool {
        self.setting_type() != SettingType::Group && !self.view.is_hidden()
    }

    /// Enumerated values of `Enum` and `Flags` settings.
    pub fn enum_values(&self) -> Option<&[SettingEnumValue]> {
        match &self.kind {
            SettingKind::Enum(meta) => Some(&meta.enum_values),
            SettingKind::Flags(meta) => Some(&meta.enum_values),
            _ => None,
        }
    }
}

// ============================================================================
// SettingMetaSet
// ============================================================================

/// Ordered top-level settings of a layer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettingMetaSet(Vec<SettingMeta>);

impl SettingMetaSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, meta: SettingMeta) {
        self.0.push(meta);
    }

    /// Number of top-level settings.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SettingMeta> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[SettingMeta] {
        &self.0
    }

    /// Pre-order traversal of every node, descending into all children.
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(&self.0)
    }

    /// Find a setting by key anywhere in the tree. First match in pre-order wins.
    pub fn find(&self, key: &str) -> Option<&SettingMeta> {
        self.walk().find(|meta| meta.key == key)
    }
}

impl From<Vec<SettingMeta>> for SettingMetaSet {
    fn from(settings: Vec<SettingMeta>) -> Self {
        Self(settings)
    }
}

impl FromIterator<SettingMeta> for SettingMetaSet {
    fn from_iter<I: IntoIterator<Item = SettingMeta>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a SettingMetaSet {
    type Item = &'a SettingMeta;
    type IntoIter = std::slice::Iter<'a, SettingMeta>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Pre-order iterator over a settings tree.
pub struct Walk<'a> {
    stack: Vec<&'a SettingMeta>,
}

impl<'a> Walk<'a> {
    fn new(roots: &'a [SettingMeta]) -> Self {
        Self {
            stack: roots.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a SettingMeta;

    fn next(&mut self) -> Option<Self::Item> {
        let meta = self.stack.pop()?;
        self.stack.extend(meta.children.iter().rev());
        Some(meta)
    }
}
