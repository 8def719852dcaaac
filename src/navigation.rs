//! Navigation boundary between the tab manager and the router.
//!
//! The tab manager only needs two capabilities from the router: reading the
//! current location and replacing it. [`Navigator`] captures exactly that;
//! [`MemoryNavigator`] is an in-process implementation backed by a fixed
//! route list, used by the replay tool and tests.

use crate::route::{RouteParams, RouteQuery, RouteTarget, build_full_path};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

/// Location passed to [`Navigator::replace`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub path: String,
    #[serde(default, skip_serializing_if = "RouteParams::is_empty")]
    pub params: RouteParams,
    #[serde(default, skip_serializing_if = "RouteQuery::is_empty")]
    pub query: RouteQuery,
}

impl NavigationRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }
}

/// Failures reported by the router
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No route is registered for the requested path.
    #[error("no route matches path '{path}'")]
    NoMatch { path: String },

    /// A guard or hook rejected the navigation.
    #[error("navigation to '{path}' was rejected: {reason}")]
    Rejected { path: String, reason: String },
}

/// Router capabilities consumed by the tab manager
pub trait Navigator: Send + Sync {
    /// The location currently displayed, if any
    fn current_location(&self) -> Option<RouteTarget>;

    /// Replace the current location
    fn replace(
        &self,
        request: NavigationRequest,
    ) -> impl Future<Output = Result<(), NavigationError>> + Send;
}

/// In-memory router resolving requests by exact path
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    routes: Vec<RouteTarget>,
    current: Mutex<Option<RouteTarget>>,
    history: Mutex<Vec<NavigationRequest>>,
}

impl MemoryNavigator {
    pub fn new(routes: Vec<RouteTarget>) -> Self {
        Self {
            routes,
            ..Self::default()
        }
    }

    /// Resolve a request to a full route target.
    ///
    /// The registered route supplies name, meta and ancestry; the request
    /// supplies params and query.
    pub fn resolve(&self, request: &NavigationRequest) -> Option<RouteTarget> {
        let route = self.routes.iter().find(|r| r.path == request.path)?;
        Some(RouteTarget {
            key: None,
            name: route.name.clone(),
            path: route.path.clone(),
            full_path: Some(build_full_path(&route.path, &request.query)),
            params: request.params.clone(),
            query: request.query.clone(),
            matched: route.matched.clone(),
            meta: route.meta.clone(),
        })
    }

    /// Make `target` the current location without recording history
    pub fn set_current(&self, target: RouteTarget) {
        *self.current.lock() = Some(target);
    }

    /// Every request passed to `replace`, oldest first
    pub fn history(&self) -> Vec<NavigationRequest> {
        self.history.lock().clone()
    }
}

impl Navigator for MemoryNavigator {
    fn current_location(&self) -> Option<RouteTarget> {
        self.current.lock().clone()
    }

    async fn replace(&self, request: NavigationRequest) -> Result<(), NavigationError> {
        self.history.lock().push(request.clone());
        let Some(target) = self.resolve(&request) else {
            log::warn!("Navigation failed: no route for {}", request.path);
            return Err(NavigationError::NoMatch { path: request.path });
        };
        log::debug!("Navigated to {}", target.full_path_or_path());
        self.set_current(target);
        Ok(())
    }
}
