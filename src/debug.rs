//! Log bridge for the layerconf binary.
//!
//! Routes `log::info!()` and friends from every crate to stderr as
//! `[LEVEL target] message` lines. The level comes from `--log-level`, then
//! the `LAYERCONF_LOG` environment variable (both resolved by the CLI), and
//! defaults to `warn`.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::OnceLock;

/// Level used when neither the flag nor the environment sets one.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;

struct LogBridge {
    level: LevelFilter,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut sink = self.sink.lock();
        // Nowhere left to report a failing stderr
        let _ = writeln!(sink, "[{} {}] {}", record.level(), record.target(), record.args());
    }

    fn flush(&self) {
        let _ = self.sink.lock().flush();
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

/// Install the stderr log bridge. Later calls keep the first level.
pub fn init_log_bridge(level: Option<LevelFilter>) {
    let bridge = BRIDGE.get_or_init(|| LogBridge {
        level: level.unwrap_or(DEFAULT_LEVEL),
        sink: Mutex::new(Box::new(std::io::stderr())),
    });

    if log::set_logger(bridge).is_ok() {
        log::set_max_level(bridge.level);
    }
}
