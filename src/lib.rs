//! layerconf: settings documentation for graphics API layers.
//!
//! The settings model lives in `layerconf-settings` and the HTML renderer in
//! `layerconf-doc`; both are re-exported here for the binary and for tests.

pub mod cli;
pub mod debug;

pub use layerconf_doc as doc;
pub use layerconf_settings as settings;
