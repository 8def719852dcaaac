//! Tab refresh: force a view to remount.
//!
//! A refresh excludes the view name from the cache set, hides the route view,
//! waits for the settle delay and then puts both back. The consumer sees the
//! view unmount and mount again with fresh state.

use super::TabManager;
use super::observer::TabEvent;
use crate::navigation::Navigator;
use std::time::Duration;

/// How long a refreshed view stays unmounted
pub const REFRESH_SETTLE_DELAY: Duration = Duration::from_millis(200);

/// Progress indicator driven while a refresh settles
pub trait LoadingIndicator: Send + Sync {
    fn start(&self);
    fn done(&self);
}

/// Indicator that does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopIndicator;

impl LoadingIndicator for NoopIndicator {
    fn start(&self) {}
    fn done(&self) {}
}

/// What to refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshTarget {
    /// The view at the router's current location
    Active,
    /// A view by route name, without touching the route view or indicator
    Named(String),
}

impl<N: Navigator> TabManager<N> {
    /// Remount a view.
    ///
    /// Returns the refreshed name, or `None` when `Active` is requested and
    /// the router has no current location.
    pub async fn refresh(&self, target: RefreshTarget) -> Option<String> {
        match target {
            RefreshTarget::Active => {
                let name = self.navigator.current_location()?.name;
                self.indicator.start();
                self.state.lock().set_render_route_view(false);
                self.refresh_by_name(&name).await;
                self.state.lock().set_render_route_view(true);
                self.indicator.done();
                Some(name)
            }
            RefreshTarget::Named(name) => {
                self.refresh_by_name(&name).await;
                Some(name)
            }
        }
    }

    /// Exclude `name`, wait for the settle delay, include it again
    pub async fn refresh_by_name(&self, name: &str) {
        self.state.lock().exclude(name);
        log::debug!("Refreshing view {}", name);
        self.observers.emit(&TabEvent::Refresh {
            name: name.to_string(),
            excluded: true,
        });

        tokio::time::sleep(REFRESH_SETTLE_DELAY).await;

        self.state.lock().include(name);
        self.observers.emit(&TabEvent::Refresh {
            name: name.to_string(),
            excluded: false,
        });
    }
}
