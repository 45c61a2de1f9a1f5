//! Token types shared by the settings model.
//!
//! - `platform`     — platform applicability bitset and tokens
//! - `setting_type` — setting type tags
//! - `status`       — stability status and view tiers

pub mod platform;
pub mod setting_type;
pub mod status;

pub use platform::{PlatformFlags, UnknownPlatform, platform_tokens};
pub use setting_type::SettingType;
pub use status::{SettingView, StatusType};
