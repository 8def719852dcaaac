//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes so that a
//! partial YAML file picks up the same values as `Config::default()`.

use crate::types::{LogLevel, TabBarConfig};

// ── Tab bar ────────────────────────────────────────────────────────────────

/// Global open-tab cap; 0 means unlimited.
pub fn max_count() -> usize {
    0
}

pub fn persist() -> bool {
    true
}

pub fn tab_bar() -> TabBarConfig {
    TabBarConfig {
        max_count: max_count(),
        persist: persist(),
    }
}

// ── Logging ────────────────────────────────────────────────────────────────

pub fn log_level() -> LogLevel {
    LogLevel::Info
}
