use clap::Parser;
use layerconf::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize logging after parsing so `--log-level` / LAYERCONF_LOG apply
    layerconf::debug::init_log_bridge(cli.log_level);

    log::info!("Starting layerconf");

    match cli::run(&cli) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("layerconf: error: {e:#}");
            std::process::exit(1);
        }
    }
}
