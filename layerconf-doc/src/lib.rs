//! Documentation export for layerconf layers.
//!
//! Renders a [`layerconf_settings::Layer`] into a self-contained HTML
//! document with a settings overview table, per-setting details and the
//! layer's presets. Values are formatted according to their setting type.

pub mod error;
mod export;
pub mod format;
pub mod html;
pub mod render;

pub use error::DocError;
pub use export::{export_html_doc, export_settings_doc, render_html_doc};
pub use format::{format_current, format_default, resolve_display_value};
