//! Stability status and view tier types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Status
// ============================================================================

/// Stability classification of a layer, setting or enum value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusType {
    #[default]
    Stable,
    Beta,
    Alpha,
    Deprecated,
}

impl StatusType {
    /// Token used in layer descriptions and documentation.
    pub fn as_token(&self) -> &'static str {
        match self {
            StatusType::Stable => "STABLE",
            StatusType::Beta => "BETA",
            StatusType::Alpha => "ALPHA",
            StatusType::Deprecated => "DEPRECATED",
        }
    }

    /// All statuses, in declaration order
    pub fn all() -> &'static [StatusType] {
        &[
            StatusType::Stable,
            StatusType::Beta,
            StatusType::Alpha,
            StatusType::Deprecated,
        ]
    }
}

impl fmt::Display for StatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for StatusType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusType::all()
            .iter()
            .copied()
            .find(|status| status.as_token() == s)
            .ok_or_else(|| format!("unknown status token '{s}'"))
    }
}

// ============================================================================
// View tier
// ============================================================================

/// Visibility tier of a setting or enum value.
///
/// `Hidden` entries are left out of generated documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettingView {
    #[default]
    Standard,
    Advanced,
    Debug,
    Hidden,
}

impl SettingView {
    pub fn as_token(&self) -> &'static str {
        match self {
            SettingView::Standard => "STANDARD",
            SettingView::Advanced => "ADVANCED",
            SettingView::Debug => "DEBUG",
            SettingView::Hidden => "HIDDEN",
        }
    }

    pub fn all() -> &'static [SettingView] {
        &[
            SettingView::Standard,
            SettingView::Advanced,
            SettingView::Debug,
            SettingView::Hidden,
        ]
    }

    pub fn is_hidden(&self) -> bool {
        *self == SettingView::Hidden
    }
}

impl fmt::Display for SettingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for SettingView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingView::all()
            .iter()
            .copied()
            .find(|view| view.as_token() == s)
            .ok_or_else(|| format!("unknown setting view token '{s}'"))
    }
}
