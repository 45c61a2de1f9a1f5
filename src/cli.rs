//! Command-line interface for layerconf.
//!
//! Loads a layer description and runs one documentation command on it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use layerconf_doc::{DocError, export_html_doc, export_settings_doc, format_default};
use layerconf_settings::Layer;
use std::path::{Path, PathBuf};

/// Exit code when the document was rendered but could not be written.
pub const EXIT_WRITE_FAILED: i32 = 1;
/// Exit code when the requested export is not available.
pub const EXIT_UNSUPPORTED: i32 = 2;

/// layerconf - settings documentation for graphics API layers
#[derive(Parser, Debug)]
#[command(name = "layerconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, env = "LAYERCONF_LOG", value_name = "LEVEL")]
    pub log_level: Option<log::LevelFilter>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export the HTML documentation of a layer
    Html {
        /// Layer description file (.json, .yaml or .yml)
        layer_file: PathBuf,

        /// Output file (default: <layer key>.html in the current directory)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Export the plain-text settings document of a layer (not available yet)
    SettingsDoc {
        /// Layer description file (.json, .yaml or .yml)
        layer_file: PathBuf,

        /// Output file (default: <layer key>.txt in the current directory)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Print the settings-file key and default value of every documented setting
    Defaults {
        /// Layer description file (.json, .yaml or .yml)
        layer_file: PathBuf,
    },
}

fn load_layer(path: &Path) -> Result<Layer> {
    Layer::load(path).with_context(|| format!("Failed to load layer from {}", path.display()))
}

/// `<settings-file key> = <default>` for every documented setting, in tree order.
pub fn defaults_listing(layer: &Layer) -> Vec<String> {
    let prefix = layer.setting_prefix();
    layer
        .settings
        .walk()
        .filter(|meta| meta.is_documented())
        .map(|meta| format!("{prefix}{} = {}", meta.key, format_default(meta)))
        .collect()
}

/// Run a parsed command line and return the process exit code.
///
/// Load and render failures are returned as errors. A failed write is
/// reported and mapped to [`EXIT_WRITE_FAILED`].
pub fn run(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Commands::Html { layer_file, output } => {
            let layer = load_layer(layer_file)?;
            let output = output
                .clone()
                .unwrap_or_else(|| PathBuf::from(format!("{}.html", layer.key)));

            match export_html_doc(&layer, &output) {
                Ok(()) => {
                    println!("Wrote {}", output.display());
                    Ok(0)
                }
                Err(e @ DocError::Write { .. }) => {
                    log::error!("{e}");
                    eprintln!("layerconf: {e}");
                    Ok(EXIT_WRITE_FAILED)
                }
                Err(e) => Err(e).context("Failed to render layer documentation"),
            }
        }
        Commands::SettingsDoc { layer_file, output } => {
            let layer = load_layer(layer_file)?;
            let output = output
                .clone()
                .unwrap_or_else(|| PathBuf::from(format!("{}.txt", layer.key)));

            match export_settings_doc(&layer, &output) {
                Ok(()) => Ok(0),
                Err(e @ DocError::Unsupported(_)) => {
                    eprintln!("layerconf: {e}");
                    Ok(EXIT_UNSUPPORTED)
                }
                Err(e) => Err(e).context("Failed to export settings document"),
            }
        }
        Commands::Defaults { layer_file } => {
            let layer = load_layer(layer_file)?;
            for line in defaults_listing(&layer) {
                println!("{line}");
            }
            Ok(0)
        }
    }
}
