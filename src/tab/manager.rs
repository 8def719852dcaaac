//! Tab manager: lifecycle operations on the shared tab collection

use super::collection::TabCollection;
use super::observer::{SubscriptionId, TabEvent, TabObservers};
use super::refresh::{LoadingIndicator, NoopIndicator};
use super::{TabRecord, TabTitle};
use crate::config::TabPreferences;
use crate::error::TabError;
use crate::navigation::Navigator;
use crate::route::RouteTarget;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

/// Result of closing a single tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseOutcome {
    /// No tab has this key
    NotFound,
    /// The tab is pinned and stays open
    Pinned,
    /// An inactive tab was removed
    Removed,
    /// The active tab was removed and the router moved to `to`
    Navigated { to: String },
    /// The active tab is the only tab left; nothing changed
    LastTabRetained,
}

/// Result of a bulk close
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkCloseOutcome {
    /// Keys removed, in storage order
    pub closed: Vec<String>,
    /// Tab navigated to because the active tab was among the closed ones
    pub navigated_to: Option<String>,
}

/// Manages the open tabs of one shell window.
///
/// Cheap to clone: every clone shares the same collection, navigator and
/// observers. Construct one at startup and hand clones to the call sites that
/// need it.
pub struct TabManager<N> {
    pub(super) state: Arc<Mutex<TabCollection>>,
    pub(super) navigator: Arc<N>,
    pub(super) preferences: Arc<dyn TabPreferences>,
    pub(super) indicator: Arc<dyn LoadingIndicator>,
    pub(super) observers: Arc<TabObservers>,
}

impl<N> Clone for TabManager<N> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            navigator: Arc::clone(&self.navigator),
            preferences: Arc::clone(&self.preferences),
            indicator: Arc::clone(&self.indicator),
            observers: Arc::clone(&self.observers),
        }
    }
}

impl<N: Navigator> TabManager<N> {
    /// Create an empty tab manager
    pub fn new(navigator: Arc<N>, preferences: Arc<dyn TabPreferences>) -> Self {
        Self {
            state: Arc::new(Mutex::new(TabCollection::new())),
            navigator,
            preferences,
            indicator: Arc::new(NoopIndicator),
            observers: Arc::new(TabObservers::default()),
        }
    }

    /// Replace the loading indicator driven by `refresh`
    pub fn with_loading_indicator(mut self, indicator: Arc<dyn LoadingIndicator>) -> Self {
        self.indicator = indicator;
        self
    }

    pub fn navigator(&self) -> &Arc<N> {
        &self.navigator
    }

    // ========================================================================
    // Observers
    // ========================================================================

    /// Register a callback invoked after every structural change
    pub fn subscribe(&self, callback: impl Fn(&TabEvent) + Send + Sync + 'static) -> SubscriptionId {
        self.observers.subscribe(Arc::new(callback))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ========================================================================
    // Read views
    // ========================================================================

    /// Ordered snapshot: pinned tabs first, then unpinned in storage order
    pub fn tabs(&self) -> Vec<TabRecord> {
        self.state.lock().ordered().into_iter().cloned().collect()
    }

    /// Pinned tabs sorted by `affix_tab_order`
    pub fn affix_tabs(&self) -> Vec<TabRecord> {
        self.state.lock().affix_tabs().into_iter().cloned().collect()
    }

    /// Raw records in storage order (what the session store persists)
    pub fn snapshot(&self) -> Vec<TabRecord> {
        self.state.lock().records().to_vec()
    }

    pub fn tab_count(&self) -> usize {
        self.state.lock().len()
    }

    pub fn get_tab_by_key(&self, key: &str) -> Option<TabRecord> {
        self.state.lock().get(key).cloned()
    }

    /// View names that must stay mounted
    pub fn cached_tabs(&self) -> Vec<String> {
        self.state.lock().cached_names().iter().cloned().collect()
    }

    /// View names temporarily unmounted by a refresh
    pub fn excluded_cached_tabs(&self) -> Vec<String> {
        self.state.lock().excluded_names().iter().cloned().collect()
    }

    pub fn render_route_view(&self) -> bool {
        self.state.lock().render_route_view()
    }

    pub fn drag_revision(&self) -> u64 {
        self.state.lock().drag_revision()
    }

    pub fn revision(&self) -> u64 {
        self.state.lock().revision()
    }

    /// Key of the tab for the router's current location.
    ///
    /// A location carrying a precomputed key is matched by that key, the same
    /// way [`TabRecord::from_target`] keys the tab it opens.
    pub fn active_key(&self) -> Option<String> {
        self.navigator
            .current_location()
            .map(|location| TabRecord::key_for(&location))
    }

    // ========================================================================
    // Add / restore
    // ========================================================================

    /// Open a tab for `target`, or merge into the tab with the same key.
    ///
    /// Hidden targets are returned without being inserted. New tabs respect
    /// the per-route cap first and the global `max_count` second; only one
    /// eviction happens per call and pinned tabs are never evicted.
    pub fn add_tab(&self, target: &RouteTarget) -> TabRecord {
        let tab = TabRecord::from_target(target);
        if !tab.is_shown() {
            log::trace!("Tab {} is hidden, not adding", tab.key);
            return tab;
        }

        let max_count = self.preferences.max_count();
        let mut events = Vec::new();
        let result = {
            let mut state = self.state.lock();
            let result = match state.position(&tab.key) {
                Some(index) => {
                    let merged = state.records()[index].merged_with(&tab);
                    state.replace_at(index, merged.clone());
                    log::debug!("Merged tab {} at index {}", merged.key, index);
                    events.push(TabEvent::Updated(merged.key.clone()));
                    merged
                }
                None => {
                    if let Some(evicted) = Self::evict_for(&mut state, &tab, max_count) {
                        events.push(TabEvent::Removed(vec![evicted]));
                    }
                    state.push(tab.clone());
                    log::info!("Opened tab {} (total: {})", tab.key, state.len());
                    events.push(TabEvent::Added(tab.key.clone()));
                    tab
                }
            };
            state.refresh_cache();
            result
        };
        self.observers.emit_all(events);
        result
    }

    /// Apply the per-route cap, or failing that the global cap
    fn evict_for(state: &mut TabCollection, tab: &TabRecord, max_count: usize) -> Option<String> {
        let per_name = tab.meta.max_num_of_open_tab.unwrap_or(-1);
        let candidate = if per_name > 0 && state.count_named(&tab.name) as i64 >= per_name {
            state.first_unpinned_named(&tab.name)
        } else if max_count > 0 && state.len() >= max_count {
            state.first_unpinned()
        } else {
            None
        };
        let index = candidate?;
        let evicted = state.remove_at(index);
        log::debug!(
            "Evicted tab {} to make room for {} (total: {})",
            evicted.key,
            tab.key,
            state.len()
        );
        Some(evicted.key)
    }

    /// Open every target as a pinned tab
    pub fn add_affix_tabs(&self, targets: &[RouteTarget]) {
        for target in targets {
            let mut target = target.clone();
            target.meta.affix_tab = Some(true);
            self.add_tab(&target);
        }
    }

    /// Replace the whole list from persisted records.
    ///
    /// Duplicate keys keep their first occurrence; the cache set is rebuilt
    /// and any pending refresh exclusions are dropped.
    pub fn restore(&self, records: Vec<TabRecord>) -> usize {
        let count = self.state.lock().reset(records);
        log::info!("Restored {} tabs", count);
        self.observers.emit(&TabEvent::Restored(count));
        count
    }

    // ========================================================================
    // Close
    // ========================================================================

    /// Close a tab.
    ///
    /// Pinned tabs stay. Closing the active tab moves the router to the tab
    /// after it in the ordered view, or the one before it; the last remaining
    /// tab is never closed.
    pub async fn close_tab(&self, key: &str) -> Result<CloseOutcome, TabError> {
        let active_key = self.active_key();
        let fallback = {
            let mut state = self.state.lock();
            let Some(tab) = state.get(key) else {
                return Ok(CloseOutcome::NotFound);
            };
            if tab.is_pinned() {
                log::debug!("Tab {} is pinned, not closing", key);
                return Ok(CloseOutcome::Pinned);
            }

            if active_key.as_deref() != Some(key) {
                Self::remove_single(&mut state, key);
                None
            } else {
                let ordered = state.ordered();
                let index = ordered.iter().position(|t| t.key == key);
                let neighbor = index.and_then(|i| {
                    ordered
                        .get(i + 1)
                        .or_else(|| i.checked_sub(1).and_then(|prev| ordered.get(prev)))
                });
                let Some(neighbor) = neighbor else {
                    log::error!("Failed to close the tab; only one tab remains open");
                    return Ok(CloseOutcome::LastTabRetained);
                };
                let fallback = (neighbor.key.clone(), neighbor.location());
                Self::remove_single(&mut state, key);
                Some(fallback)
            }
        };

        self.observers.emit(&TabEvent::Removed(vec![key.to_string()]));

        match fallback {
            None => Ok(CloseOutcome::Removed),
            Some((to, location)) => {
                self.navigator.replace(location).await?;
                Ok(CloseOutcome::Navigated { to })
            }
        }
    }

    fn remove_single(state: &mut TabCollection, key: &str) {
        if let Some(index) = state.position(key) {
            state.remove_at(index);
            state.refresh_cache();
            log::info!("Closed tab {} (total: {})", key, state.len());
        }
    }

    /// Close every unpinned tab left of `key` in the ordered view
    pub async fn close_left_tabs(&self, key: &str) -> Result<BulkCloseOutcome, TabError> {
        self.bulk_close(|ordered| {
            let index = ordered.iter().position(|t| t.key == key)?;
            Some(ordered[..index].iter().map(|t| t.key.clone()).collect())
        })
        .await
    }

    /// Close every unpinned tab right of `key` in the ordered view
    pub async fn close_right_tabs(&self, key: &str) -> Result<BulkCloseOutcome, TabError> {
        self.bulk_close(|ordered| {
            let index = ordered.iter().position(|t| t.key == key)?;
            Some(ordered[index + 1..].iter().map(|t| t.key.clone()).collect())
        })
        .await
    }

    /// Close every unpinned tab except `key`
    pub async fn close_other_tabs(&self, key: &str) -> Result<BulkCloseOutcome, TabError> {
        self.bulk_close(|ordered| {
            if !ordered.iter().any(|t| t.key == key) {
                return None;
            }
            Some(
                ordered
                    .iter()
                    .filter(|t| t.key != key)
                    .map(|t| t.key.clone())
                    .collect(),
            )
        })
        .await
    }

    /// Close every unpinned tab. With no pinned tabs the first tab survives.
    pub async fn close_all_tabs(&self) -> Result<BulkCloseOutcome, TabError> {
        self.bulk_close(|ordered| {
            let any_pinned = ordered.iter().any(|t| t.is_pinned());
            let skip = usize::from(!any_pinned);
            Some(ordered.iter().skip(skip).map(|t| t.key.clone()).collect())
        })
        .await
    }

    /// Remove the keys picked by `select` (minus pinned tabs) as one batch,
    /// then move the router to the first tab if the active tab went away
    async fn bulk_close(
        &self,
        select: impl FnOnce(&[&TabRecord]) -> Option<Vec<String>>,
    ) -> Result<BulkCloseOutcome, TabError> {
        let active_key = self.active_key();
        let (closed, fallback) = {
            let mut state = self.state.lock();
            let keys: HashSet<String> = {
                let ordered = state.ordered();
                let Some(candidates) = select(&ordered) else {
                    return Ok(BulkCloseOutcome::default());
                };
                candidates
                    .into_iter()
                    .filter(|k| state.get(k).is_some_and(|t| !t.is_pinned()))
                    .collect()
            };
            let closed = state.remove_keys(&keys);
            if closed.is_empty() {
                return Ok(BulkCloseOutcome::default());
            }
            state.refresh_cache();
            log::info!("Closed {} tabs (total: {})", closed.len(), state.len());

            let active_closed = active_key.as_ref().is_some_and(|k| keys.contains(k));
            let fallback = if active_closed {
                state
                    .ordered()
                    .first()
                    .map(|t| (t.key.clone(), t.location()))
            } else {
                None
            };
            (closed, fallback)
        };

        self.observers.emit(&TabEvent::Removed(closed.clone()));

        let navigated_to = match fallback {
            Some((to, location)) => {
                self.navigator.replace(location).await?;
                Some(to)
            }
            None => None,
        };
        Ok(BulkCloseOutcome {
            closed,
            navigated_to,
        })
    }

    // ========================================================================
    // Pin / reorder
    // ========================================================================

    /// Pin a tab and move it into the pinned range
    pub fn pin_tab(&self, key: &str) -> bool {
        self.set_pinned(key, true)
    }

    /// Unpin a tab and move it to the first unpinned slot
    pub fn unpin_tab(&self, key: &str) -> bool {
        self.set_pinned(key, false)
    }

    pub fn toggle_tab_pin(&self, key: &str) -> bool {
        let pinned = match self.state.lock().get(key) {
            Some(tab) => tab.is_pinned(),
            None => return false,
        };
        self.set_pinned(key, !pinned)
    }

    fn set_pinned(&self, key: &str, pinned: bool) -> bool {
        let drag_revision = {
            let mut state = self.state.lock();
            let Some(index) = state.position(key) else {
                return false;
            };
            let mut tab = state.records()[index].clone();
            tab.meta.affix_tab = Some(pinned);
            state.replace_at(index, tab);

            let new_index = if pinned {
                state
                    .records()
                    .iter()
                    .filter(|t| t.is_pinned())
                    .position(|t| t.key == key)
                    .unwrap_or(0)
            } else {
                // Ahead of every other unpinned record, counted without itself
                state
                    .records()
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != index)
                    .position(|(_, t)| !t.is_pinned())
                    .unwrap_or(state.len() - 1)
            };
            state.move_tab(index, new_index);
            log::debug!(
                "{} tab {} (index {} -> {})",
                if pinned { "Pinned" } else { "Unpinned" },
                key,
                index,
                new_index
            );
            state.drag_revision()
        };
        self.observers.emit_all([
            TabEvent::PinChanged {
                key: key.to_string(),
                pinned,
            },
            TabEvent::Reordered {
                key: key.to_string(),
                drag_revision,
            },
        ]);
        true
    }

    /// Move the tab at storage index `old_index` to `new_index`
    pub fn sort_tabs(&self, old_index: usize, new_index: usize) -> bool {
        let moved = {
            let mut state = self.state.lock();
            let Some(key) = state.records().get(old_index).map(|t| t.key.clone()) else {
                return false;
            };
            state.move_tab(old_index, new_index);
            log::debug!("Moved tab {} from index {} to {}", key, old_index, new_index);
            TabEvent::Reordered {
                key,
                drag_revision: state.drag_revision(),
            }
        };
        self.observers.emit(&moved);
        true
    }

    // ========================================================================
    // Titles
    // ========================================================================

    /// Give a tab a custom title that survives re-navigation
    pub fn set_tab_title(&self, key: &str, title: impl Into<TabTitle>) -> bool {
        {
            let mut state = self.state.lock();
            let Some(tab) = state.get_mut(key) else {
                return false;
            };
            tab.meta.new_tab_title = Some(title.into());
        }
        self.observers.emit(&TabEvent::Renamed(key.to_string()));
        true
    }

    /// Drop a tab's custom title
    pub fn reset_tab_title(&self, key: &str) -> bool {
        {
            let mut state = self.state.lock();
            let Some(tab) = state.get_mut(key) else {
                return false;
            };
            if tab.meta.new_tab_title.take().is_none() {
                return false;
            }
        }
        self.observers.emit(&TabEvent::Renamed(key.to_string()));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::MemoryNavigator;
    use crate::tab::TabMeta;

    fn manager_with(paths: &[&str], max_count: usize) -> TabManager<MemoryNavigator> {
        let routes = paths
            .iter()
            .map(|p| RouteTarget::new(p.trim_start_matches('/'), *p))
            .collect();
        let manager = TabManager::new(Arc::new(MemoryNavigator::new(routes)), Arc::new(max_count));
        for p in paths {
            manager.add_tab(&RouteTarget::new(p.trim_start_matches('/'), *p));
        }
        manager
    }

    fn storage_keys(manager: &TabManager<MemoryNavigator>) -> Vec<String> {
        manager.snapshot().into_iter().map(|t| t.key).collect()
    }

    fn ordered_keys(manager: &TabManager<MemoryNavigator>) -> Vec<String> {
        manager.tabs().into_iter().map(|t| t.key).collect()
    }

    #[test]
    fn test_add_tab_merges_same_key() {
        let manager = manager_with(&["/a", "/b"], 0);
        let merged = manager.add_tab(&RouteTarget::new("renamed", "/a"));
        assert_eq!(merged.name, "renamed");
        assert_eq!(storage_keys(&manager), vec!["/a", "/b"]);
    }

    #[test]
    fn test_add_hidden_tab_not_inserted() {
        let manager = manager_with(&["/a"], 0);
        let hidden = RouteTarget::new("h", "/h").with_meta(TabMeta {
            hide_in_tab: Some(true),
            ..TabMeta::default()
        });
        let record = manager.add_tab(&hidden);
        assert_eq!(record.key, "/h");
        assert_eq!(manager.tab_count(), 1);
    }

    #[test]
    fn test_add_reuses_precomputed_key() {
        let manager = manager_with(&[], 0);
        let record = manager.add_tab(&RouteTarget::new("a", "/a").with_key("custom"));
        assert_eq!(record.key, "custom");
        assert!(manager.get_tab_by_key("custom").is_some());
    }

    #[test]
    fn test_per_name_cap_evicts_first_same_name() {
        let manager = manager_with(&["/home"], 0);
        let detail = |id: &str| {
            RouteTarget::new("Detail", "/detail")
                .with_query("id", id)
                .with_meta(TabMeta {
                    max_num_of_open_tab: Some(2),
                    ..TabMeta::default()
                })
        };
        manager.add_tab(&detail("1"));
        manager.add_tab(&detail("2"));
        manager.add_tab(&detail("3"));
        assert_eq!(
            storage_keys(&manager),
            vec!["/home", "/detail?id=2", "/detail?id=3"]
        );
    }

    #[test]
    fn test_per_name_cap_takes_precedence_over_global_cap() {
        // Both caps are reached; only the per-name eviction happens
        let manager = manager_with(&["/x"], 2);
        let detail = |id: &str| {
            RouteTarget::new("Detail", "/detail")
                .with_query("id", id)
                .with_meta(TabMeta {
                    max_num_of_open_tab: Some(1),
                    ..TabMeta::default()
                })
        };
        manager.add_tab(&detail("1"));
        manager.add_tab(&detail("2"));
        assert_eq!(storage_keys(&manager), vec!["/x", "/detail?id=2"]);
    }

    #[test]
    fn test_pin_moves_into_pinned_range() {
        let manager = manager_with(&["/a", "/b", "/c"], 0);
        assert!(manager.pin_tab("/a"));
        assert!(manager.pin_tab("/c"));
        assert_eq!(storage_keys(&manager), vec!["/a", "/c", "/b"]);
        assert_eq!(manager.drag_revision(), 2);
    }

    #[test]
    fn test_unpin_moves_after_last_pinned() {
        let manager = manager_with(&["/a", "/b", "/c"], 0);
        manager.pin_tab("/a");
        manager.pin_tab("/b");
        assert!(manager.unpin_tab("/a"));
        assert_eq!(storage_keys(&manager), vec!["/b", "/a", "/c"]);
        assert!(!manager.get_tab_by_key("/a").unwrap().is_pinned());
    }

    #[test]
    fn test_pin_preserves_title() {
        let manager = manager_with(&[], 0);
        manager.add_tab(&RouteTarget::new("a", "/a").with_meta(TabMeta {
            title: Some("Alpha".to_string()),
            ..TabMeta::default()
        }));
        manager.pin_tab("/a");
        assert_eq!(
            manager.get_tab_by_key("/a").unwrap().meta.title.as_deref(),
            Some("Alpha")
        );
    }

    #[test]
    fn test_toggle_and_unknown_keys_are_noops() {
        let manager = manager_with(&["/a"], 0);
        assert!(manager.toggle_tab_pin("/a"));
        assert!(manager.get_tab_by_key("/a").unwrap().is_pinned());
        assert!(manager.toggle_tab_pin("/a"));
        assert!(!manager.get_tab_by_key("/a").unwrap().is_pinned());

        assert!(!manager.pin_tab("/missing"));
        assert!(!manager.unpin_tab("/missing"));
        assert!(!manager.toggle_tab_pin("/missing"));
        assert!(!manager.sort_tabs(9, 0));
        assert!(!manager.set_tab_title("/missing", "x"));
    }

    #[test]
    fn test_sort_tabs_reorders_storage() {
        let manager = manager_with(&["/a", "/b", "/c"], 0);
        assert!(manager.sort_tabs(2, 0));
        assert_eq!(ordered_keys(&manager), vec!["/c", "/a", "/b"]);
        assert_eq!(manager.drag_revision(), 1);
    }

    #[test]
    fn test_set_and_reset_title() {
        let manager = manager_with(&["/a"], 0);
        assert!(!manager.reset_tab_title("/a"));
        assert!(manager.set_tab_title("/a", "Custom"));
        assert_eq!(manager.get_tab_by_key("/a").unwrap().display_title(), "Custom");
        assert!(manager.reset_tab_title("/a"));
        assert_eq!(manager.get_tab_by_key("/a").unwrap().display_title(), "a");
    }

    #[test]
    fn test_add_affix_tabs_pins_targets() {
        let manager = manager_with(&["/a"], 0);
        manager.add_affix_tabs(&[RouteTarget::new("dash", "/dash")]);
        assert_eq!(ordered_keys(&manager), vec!["/dash", "/a"]);
    }

    #[tokio::test]
    async fn test_close_inactive_tab() {
        let manager = manager_with(&["/a", "/b"], 0);
        let outcome = manager.close_tab("/a").await.unwrap();
        assert_eq!(outcome, CloseOutcome::Removed);
        assert_eq!(storage_keys(&manager), vec!["/b"]);
        assert!(manager.navigator().history().is_empty());
    }

    #[tokio::test]
    async fn test_close_unknown_and_pinned() {
        let manager = manager_with(&["/a", "/b"], 0);
        manager.pin_tab("/a");
        assert_eq!(manager.close_tab("/zzz").await.unwrap(), CloseOutcome::NotFound);
        assert_eq!(manager.close_tab("/a").await.unwrap(), CloseOutcome::Pinned);
        assert_eq!(manager.tab_count(), 2);
    }

    #[tokio::test]
    async fn test_bulk_close_left_right() {
        let manager = manager_with(&["/a", "/b", "/c", "/d"], 0);
        let left = manager.close_left_tabs("/b").await.unwrap();
        assert_eq!(left.closed, vec!["/a"]);
        let right = manager.close_right_tabs("/b").await.unwrap();
        assert_eq!(right.closed, vec!["/c", "/d"]);
        assert_eq!(storage_keys(&manager), vec!["/b"]);
        assert!(right.navigated_to.is_none());
    }

    #[tokio::test]
    async fn test_bulk_close_edges_are_noops() {
        let manager = manager_with(&["/a", "/b"], 0);
        assert!(manager.close_left_tabs("/a").await.unwrap().closed.is_empty());
        assert!(manager.close_right_tabs("/b").await.unwrap().closed.is_empty());
        assert!(manager.close_left_tabs("/missing").await.unwrap().closed.is_empty());
        let others = manager.close_other_tabs("/missing").await.unwrap();
        assert!(others.closed.is_empty());
        assert_eq!(manager.tab_count(), 2);
    }

    #[test]
    fn test_unpin_lands_first_among_unpinned_in_mixed_storage() {
        // Pinned routes opened after `/a` sit behind it in storage
        let manager = manager_with(&["/a"], 0);
        let pinned = |p: &str| {
            RouteTarget::new(p.trim_start_matches('/'), p).with_meta(TabMeta {
                affix_tab: Some(true),
                ..TabMeta::default()
            })
        };
        manager.add_tab(&pinned("/p1"));
        manager.add_tab(&pinned("/p2"));
        assert_eq!(storage_keys(&manager), vec!["/a", "/p1", "/p2"]);

        assert!(manager.unpin_tab("/p2"));
        assert_eq!(ordered_keys(&manager), vec!["/p1", "/p2", "/a"]);
        assert!(manager.unpin_tab("/p1"));
        assert_eq!(ordered_keys(&manager), vec!["/p1", "/p2", "/a"]);
    }

    #[test]
    fn test_unpin_only_tab() {
        let manager = manager_with(&["/a"], 0);
        manager.pin_tab("/a");
        assert!(manager.unpin_tab("/a"));
        assert_eq!(storage_keys(&manager), vec!["/a"]);
    }

    #[test]
    fn test_active_key_prefers_location_key() {
        let manager = manager_with(&["/a"], 0);
        let target = RouteTarget::new("b", "/b").with_key("custom");
        manager.add_tab(&target);
        manager.navigator().set_current(target);
        assert_eq!(manager.active_key().as_deref(), Some("custom"));
    }
}
