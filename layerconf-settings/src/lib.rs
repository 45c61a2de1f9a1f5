//! Settings model for layerconf.
//!
//! This crate describes a graphics API layer and its configurable settings:
//!
//! - Settings metadata: a recursive schema of typed settings with defaults,
//!   platform applicability, view tiers and status
//! - Setting values bound to that schema by key
//! - Layers with their properties and presets
//! - Token tables for platforms, statuses, views and setting types
//! - Loading layer descriptions from JSON or YAML

pub mod data;
pub mod error;
pub mod layer;
mod loader;
pub mod meta;
pub mod types;

pub use data::{SettingData, SettingDataSet, SettingValue};
pub use error::LayerError;
pub use layer::{Layer, LayerPreset, layer_setting_prefix};
pub use meta::{
    BoolMeta, EnumMeta, FilesystemMeta, FlagsMeta, FloatMeta, IntMeta, ListEntry, ListMeta,
    NumberOrString, SettingEnumValue, SettingKind, SettingMeta, SettingMetaSet, StringMeta, Walk,
};
pub use types::{PlatformFlags, SettingType, SettingView, StatusType, platform_tokens};

// Re-exported so callers can build versions without naming semver directly
pub use semver::Version;
