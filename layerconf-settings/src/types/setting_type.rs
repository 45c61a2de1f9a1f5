//! Setting type tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type tag of a setting.
///
/// The tag is derived from [`crate::SettingKind`] / [`crate::SettingValue`]
/// and is never stored next to them, so a tag can't disagree with the
/// variant that carries the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettingType {
    Group,
    Bool,
    BoolNumericDeprecated,
    Int,
    Float,
    String,
    #[serde(rename = "INT_RANGES")]
    Frames,
    Enum,
    Flags,
    List,
    LoadFile,
    SaveFile,
    SaveFolder,
}

impl SettingType {
    pub fn as_token(&self) -> &'static str {
        match self {
            SettingType::Group => "GROUP",
            SettingType::Bool => "BOOL",
            SettingType::BoolNumericDeprecated => "BOOL_NUMERIC_DEPRECATED",
            SettingType::Int => "INT",
            SettingType::Float => "FLOAT",
            SettingType::String => "STRING",
            SettingType::Frames => "INT_RANGES",
            SettingType::Enum => "ENUM",
            SettingType::Flags => "FLAGS",
            SettingType::List => "LIST",
            SettingType::LoadFile => "LOAD_FILE",
            SettingType::SaveFile => "SAVE_FILE",
            SettingType::SaveFolder => "SAVE_FOLDER",
        }
    }

    pub fn all() -> &'static [SettingType] {
        &[
            SettingType::Group,
            SettingType::Bool,
            SettingType::BoolNumericDeprecated,
            SettingType::Int,
            SettingType::Float,
            SettingType::String,
            SettingType::Frames,
            SettingType::Enum,
            SettingType::Flags,
            SettingType::List,
            SettingType::LoadFile,
            SettingType::SaveFile,
            SettingType::SaveFolder,
        ]
    }

    /// Enum-family types document their enumerated values.
    pub fn is_enum(&self) -> bool {
        matches!(self, SettingType::Enum | SettingType::Flags)
    }

    /// Filesystem path types.
    pub fn is_path(&self) -> bool {
        matches!(
            self,
            SettingType::LoadFile | SettingType::SaveFile | SettingType::SaveFolder
        )
    }
}

impl fmt::Display for SettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

impl FromStr for SettingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingType::all()
            .iter()
            .copied()
            .find(|ty| ty.as_token() == s)
            .ok_or_else(|| format!("unknown setting type token '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_use_int_ranges_token() {
        assert_eq!(SettingType::Frames.as_token(), "INT_RANGES");
        assert_eq!(
            serde_json::to_string(&SettingType::Frames).unwrap(),
            "\"INT_RANGES\""
        );
        assert_eq!("INT_RANGES".parse::<SettingType>(), Ok(SettingType::Frames));
    }

    #[test]
    fn serde_tokens_match_as_token() {
        for ty in SettingType::all() {
            let json = serde_json::to_string(ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty.as_token()));
        }
    }

    #[test]
    fn enum_family() {
        assert!(SettingType::Enum.is_enum());
        assert!(SettingType::Flags.is_enum());
        assert!(!SettingType::List.is_enum());
        assert!(SettingType::SaveFolder.is_path());
        assert!(!SettingType::String.is_path());
    }
}
