//! Capture the current tab list for persistence

use super::SessionTabs;
use crate::navigation::Navigator;
use crate::tab::TabManager;

/// Snapshot the manager's tabs in storage order
pub fn capture_session<N: Navigator>(manager: &TabManager<N>) -> SessionTabs {
    SessionTabs {
        saved_at: chrono::Utc::now().to_rfc3339(),
        tabs: manager.snapshot(),
    }
}
