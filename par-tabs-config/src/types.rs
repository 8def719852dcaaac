//! Configuration section types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Tab Bar
// ============================================================================

/// Tab bar preferences consumed by the tab manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabBarConfig {
    /// Maximum number of open tabs (0 = unlimited).
    ///
    /// When the cap is reached, opening a new tab evicts the first unpinned
    /// tab. Pinned tabs are never evicted.
    #[serde(default = "crate::defaults::max_count")]
    pub max_count: usize,

    /// Persist the open tab list to the session store.
    #[serde(default = "crate::defaults::persist")]
    pub persist: bool,
}

impl Default for TabBarConfig {
    fn default() -> Self {
        crate::defaults::tab_bar()
    }
}

// ============================================================================
// Logging
// ============================================================================

/// Log level for the stderr log bridge.
///
/// `RUST_LOG` and the `--log-level` CLI flag take precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging
    Off,
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug messages
    Debug,
    /// Most verbose
    Trace,
}

impl LogLevel {
    /// Convert to `log::LevelFilter`
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
