//! Helpers for restoring session state

use super::SessionTabs;
use crate::navigation::Navigator;
use crate::tab::TabManager;

/// Replace the manager's tabs with a persisted session.
///
/// Returns the number of tabs kept after duplicate and hidden records are
/// dropped.
pub fn restore_session<N: Navigator>(manager: &TabManager<N>, session: SessionTabs) -> usize {
    let saved = session.tabs.len();
    let kept = manager.restore(session.tabs);
    if kept != saved {
        log::warn!(
            "Session restore: dropped {} duplicate or hidden tabs (saved at {})",
            saved - kept,
            session.saved_at
        );
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::MemoryNavigator;
    use crate::route::RouteTarget;
    use crate::session::capture_session;
    use crate::tab::TabRecord;
    use std::sync::Arc;

    fn manager() -> TabManager<MemoryNavigator> {
        TabManager::new(Arc::new(MemoryNavigator::default()), Arc::new(0usize))
    }

    #[test]
    fn test_capture_then_restore_into_fresh_manager() {
        let source = manager();
        let mut keep = RouteTarget::new("Users", "/users");
        keep.meta.keep_alive = Some(true);
        source.add_tab(&keep);
        source.add_tab(&RouteTarget::new("Home", "/home"));
        source.pin_tab("/home");

        let session = capture_session(&source);
        let target = manager();
        assert_eq!(restore_session(&target, session), 2);
        assert_eq!(target.tabs(), source.tabs());
        assert_eq!(target.cached_tabs(), vec!["Users"]);
    }

    #[test]
    fn test_restore_drops_duplicate_keys() {
        let record = TabRecord::from_target(&RouteTarget::new("Home", "/home"));
        let session = SessionTabs {
            saved_at: "2026-01-01T00:00:00Z".to_string(),
            tabs: vec![record.clone(), record],
        };
        let target = manager();
        assert_eq!(restore_session(&target, session), 1);
    }
}
