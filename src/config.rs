//! Configuration re-exports from the `par-tabs-config` sub-crate, plus the
//! preferences seam read by the tab manager.

pub use par_tabs_config::{Config, ConfigError, LogLevel, TabBarConfig};

use parking_lot::RwLock;

/// Preferences the tab manager reads on every `add_tab`
pub trait TabPreferences: Send + Sync {
    /// Global open-tab cap (0 = unlimited)
    fn max_count(&self) -> usize;
}

impl TabPreferences for Config {
    fn max_count(&self) -> usize {
        self.tab_bar.max_count
    }
}

/// Live config that can be swapped while the manager is running
impl TabPreferences for RwLock<Config> {
    fn max_count(&self) -> usize {
        self.read().tab_bar.max_count
    }
}

/// Fixed cap, mostly useful in tests
impl TabPreferences for usize {
    fn max_count(&self) -> usize {
        *self
    }
}
