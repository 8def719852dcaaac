//! Shared integration test helpers for par-tabs.
//!
//! This module provides canonical factory functions used across the `tests/`
//! integration test suite.
//!
//! # Usage
//!
//! ```ignore
//! mod common;
//! use common::{manager_with_routes, route, open};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a subset
//! of helpers are used per file.

#![allow(dead_code)]

use par_tabs::navigation::{MemoryNavigator, NavigationRequest, Navigator};
use par_tabs::route::{MatchedRoute, RouteTarget};
use par_tabs::tab::{TabEvent, TabManager, TabMeta, TabRecord};
use parking_lot::Mutex;
use std::sync::Arc;

pub type TestManager = TabManager<MemoryNavigator>;

/// A plain route named after its path (`/users` -> `users`)
pub fn route(path: &str) -> RouteTarget {
    RouteTarget::new(path.trim_start_matches('/'), path)
}

/// A route with the given meta
pub fn route_with(path: &str, meta: TabMeta) -> RouteTarget {
    route(path).with_meta(meta)
}

/// A keep-alive route under a root layout and a second-level layout
pub fn nested_keep_alive(path: &str, layout: &str) -> RouteTarget {
    route(path)
        .with_meta(TabMeta {
            keep_alive: Some(true),
            ..TabMeta::default()
        })
        .with_matched(vec![
            MatchedRoute::new("Root", "/"),
            MatchedRoute::new(layout, "/layout"),
            MatchedRoute::new(path.trim_start_matches('/'), path),
        ])
}

pub fn pinned_meta() -> TabMeta {
    TabMeta {
        affix_tab: Some(true),
        ..TabMeta::default()
    }
}

/// Manager whose navigator knows `routes`, with a global cap of `max_count`
pub fn manager_with_routes(routes: Vec<RouteTarget>, max_count: usize) -> TestManager {
    TabManager::new(Arc::new(MemoryNavigator::new(routes)), Arc::new(max_count))
}

/// Manager with a plain route for each path, no tabs open yet
pub fn manager_for(paths: &[&str], max_count: usize) -> TestManager {
    manager_with_routes(paths.iter().map(|p| route(p)).collect(), max_count)
}

/// Navigate to `path` and open a tab for the resulting location, the way a
/// router hook would
pub async fn open(manager: &TestManager, path: &str) -> TabRecord {
    manager
        .navigator()
        .replace(NavigationRequest::new(path))
        .await
        .expect("navigation should succeed");
    let location = manager
        .navigator()
        .current_location()
        .expect("navigator should have a location");
    manager.add_tab(&location)
}

pub fn ordered_keys(manager: &TestManager) -> Vec<String> {
    manager.tabs().into_iter().map(|t| t.key).collect()
}

pub fn storage_keys(manager: &TestManager) -> Vec<String> {
    manager.snapshot().into_iter().map(|t| t.key).collect()
}

/// Subscribe and collect every event emitted afterwards
pub fn record_events(manager: &TestManager) -> Arc<Mutex<Vec<TabEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    manager.subscribe(move |event| sink.lock().push(event.clone()));
    events
}
