//! Platform applicability bitset and its token table.

use bitflags::bitflags;
use serde::de::{self, Deserializer};
use serde::ser::{SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Platforms a layer or setting is available on.
    ///
    /// Serialized as a list of platform tokens, e.g. `["WINDOWS", "LINUX"]`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PlatformFlags: u32 {
        const WINDOWS = 1 << 0;
        const LINUX   = 1 << 1;
        const MACOS   = 1 << 2;
        const ANDROID = 1 << 3;
    }
}

/// Token table in the fixed order tokens are listed in documentation.
const PLATFORM_TOKENS: &[(PlatformFlags, &str)] = &[
    (PlatformFlags::WINDOWS, "WINDOWS"),
    (PlatformFlags::LINUX, "LINUX"),
    (PlatformFlags::MACOS, "MACOS"),
    (PlatformFlags::ANDROID, "ANDROID"),
];

impl PlatformFlags {
    /// Windows, Linux and macOS.
    pub const DESKTOP: PlatformFlags = PlatformFlags::WINDOWS
        .union(PlatformFlags::LINUX)
        .union(PlatformFlags::MACOS);

    /// Tokens for every platform bit set, in table order.
    pub fn tokens(self) -> Vec<&'static str> {
        platform_tokens(self)
    }
}

impl Default for PlatformFlags {
    fn default() -> Self {
        PlatformFlags::DESKTOP
    }
}

/// Convert a platform bitset into its tokens.
///
/// Bits with no token are ignored.
pub fn platform_tokens(flags: PlatformFlags) -> Vec<&'static str> {
    PLATFORM_TOKENS
        .iter()
        .filter(|(flag, _)| flags.contains(*flag))
        .map(|(_, token)| *token)
        .collect()
}

/// Error returned when a platform token is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPlatform(pub String);

impl fmt::Display for UnknownPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown platform token '{}'", self.0)
    }
}

impl std::error::Error for UnknownPlatform {}

impl FromStr for PlatformFlags {
    type Err = UnknownPlatform;

    /// Parse a single platform token (case-sensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PLATFORM_TOKENS
            .iter()
            .find(|(_, token)| *token == s)
            .map(|(flag, _)| *flag)
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

impl Serialize for PlatformFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let tokens = self.tokens();
        let mut seq = serializer.serialize_seq(Some(tokens.len()))?;
        for token in tokens {
            seq.serialize_element(token)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for PlatformFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tokens = Vec::<String>::deserialize(deserializer)?;
        tokens.iter().try_fold(PlatformFlags::empty(), |acc, token| {
            token
                .parse::<PlatformFlags>()
                .map(|flag| acc | flag)
                .map_err(de::Error::custom)
        })
    }
}
