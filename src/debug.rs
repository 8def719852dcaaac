//! Logging bridge for par-tabs
//!
//! Routes every `log::info!()` etc. to stderr with a timestamp and the
//! emitting module. The level is chosen in this order:
//! - `--log-level` on the command line
//! - `RUST_LOG` (a bare level such as `debug`, or `target=level`)
//! - `log_level` from the config file, applied once it has been loaded
//!
//! Output goes to stderr so it never mixes with the replay report on stdout.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::OnceLock;

/// Where the active level came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LevelSource {
    Cli,
    Env,
    Default,
}

struct BridgeLogger {
    /// Serializes writes so lines from concurrent tasks never interleave
    out: Mutex<std::io::Stderr>,
}

impl Log for BridgeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut out = self.out.lock();
        let _ = writeln!(
            out,
            "[{}] [{:<5}] [{}] {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {
        let _ = self.out.lock().flush();
    }
}

static LOGGER: OnceLock<BridgeLogger> = OnceLock::new();
static SOURCE: OnceLock<LevelSource> = OnceLock::new();

/// Parse a `RUST_LOG` value down to a single level
fn parse_env_level(value: &str) -> Option<LevelFilter> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(level) = value.parse() {
        return Some(level);
    }
    // `target=level[,target=level]`: take the most verbose level mentioned
    value
        .split(',')
        .filter_map(|directive| directive.rsplit('=').next()?.trim().parse().ok())
        .max()
}

/// Install the process-wide logger.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let env_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|value| parse_env_level(&value));

    let (level, source) = match (cli_level, env_level) {
        (Some(level), _) => (level, LevelSource::Cli),
        (None, Some(level)) => (level, LevelSource::Env),
        (None, None) => (LevelFilter::Info, LevelSource::Default),
    };

    let logger = LOGGER.get_or_init(|| BridgeLogger {
        out: Mutex::new(std::io::stderr()),
    });
    if log::set_logger(logger).is_ok() {
        let _ = SOURCE.set(source);
        log::set_max_level(level);
    }
}

/// Apply the level from the config file unless the CLI or `RUST_LOG` chose one
pub fn apply_config_level(level: LevelFilter) {
    if matches!(SOURCE.get(), Some(LevelSource::Default)) {
        log::set_max_level(level);
    }
}
