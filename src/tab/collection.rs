//! Ordered tab storage and its derived views.
//!
//! `TabCollection` is the single owner of the tab list. It keeps keys unique,
//! exposes the pinned-first ordered view and maintains the derived cache and
//! exclude sets. Policy (caps, merge rules, navigation) lives in
//! [`TabManager`](super::TabManager).

use super::TabRecord;
use super::cache::compute_cached_names;
use std::collections::{BTreeSet, HashSet};

/// Tab list plus derived state
#[derive(Debug, Clone)]
pub struct TabCollection {
    /// Records in storage (insertion/manipulation) order
    tabs: Vec<TabRecord>,
    /// View names that must stay mounted
    cached_names: BTreeSet<String>,
    /// View names temporarily unmounted by a refresh
    excluded_names: BTreeSet<String>,
    /// False while the active view is being re-rendered
    render_route_view: bool,
    /// Bumped by every reorder
    drag_revision: u64,
    /// Bumped by every mutation
    revision: u64,
}

impl Default for TabCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl TabCollection {
    pub fn new() -> Self {
        Self {
            tabs: Vec::new(),
            cached_names: BTreeSet::new(),
            excluded_names: BTreeSet::new(),
            render_route_view: true,
            drag_revision: 0,
            revision: 0,
        }
    }

    /// Build a collection from persisted records.
    ///
    /// Later duplicates of a key and hidden tabs are dropped.
    pub fn from_records(records: impl IntoIterator<Item = TabRecord>) -> Self {
        let mut collection = Self::new();
        collection.reset(records);
        collection
    }

    /// Replace every record, keeping the first occurrence of each key
    pub fn reset(&mut self, records: impl IntoIterator<Item = TabRecord>) -> usize {
        let mut seen = HashSet::new();
        self.tabs = records
            .into_iter()
            .filter(|tab| tab.is_shown() && seen.insert(tab.key.clone()))
            .collect();
        self.excluded_names.clear();
        self.render_route_view = true;
        self.refresh_cache();
        self.bump();
        self.tabs.len()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    /// Records in storage order
    pub fn records(&self) -> &[TabRecord] {
        &self.tabs
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.key == key)
    }

    pub fn get(&self, key: &str) -> Option<&TabRecord> {
        self.tabs.iter().find(|t| t.key == key)
    }

    pub(crate) fn get_mut(&mut self, key: &str) -> Option<&mut TabRecord> {
        self.tabs.iter_mut().find(|t| t.key == key)
    }

    /// Pinned tabs sorted by `affix_tab_order` (stable, missing order = 0)
    pub fn affix_tabs(&self) -> Vec<&TabRecord> {
        let mut pinned: Vec<&TabRecord> = self
            .tabs
            .iter()
            .filter(|t| t.is_pinned() && t.is_shown())
            .collect();
        pinned.sort_by_key(|t| t.meta.affix_tab_order.unwrap_or(0));
        pinned
    }

    /// Outward-facing order: sorted pinned tabs, then unpinned in storage order
    pub fn ordered(&self) -> Vec<&TabRecord> {
        let mut ordered = self.affix_tabs();
        ordered.extend(self.tabs.iter().filter(|t| !t.is_pinned() && t.is_shown()));
        ordered
    }

    pub fn count_named(&self, name: &str) -> usize {
        self.tabs.iter().filter(|t| t.name == name).count()
    }

    pub fn first_unpinned(&self) -> Option<usize> {
        self.tabs.iter().position(|t| !t.is_pinned())
    }

    pub fn first_unpinned_named(&self, name: &str) -> Option<usize> {
        self.tabs
            .iter()
            .position(|t| t.name == name && !t.is_pinned())
    }

    /// Append a record. Callers guarantee the key is not present.
    pub(crate) fn push(&mut self, tab: TabRecord) {
        debug_assert!(self.position(&tab.key).is_none());
        self.tabs.push(tab);
        self.bump();
    }

    pub(crate) fn replace_at(&mut self, index: usize, tab: TabRecord) {
        self.tabs[index] = tab;
        self.bump();
    }

    pub(crate) fn remove_at(&mut self, index: usize) -> TabRecord {
        let removed = self.tabs.remove(index);
        self.bump();
        removed
    }

    /// Remove every record whose key is in `keys`, returning the removed keys
    pub(crate) fn remove_keys(&mut self, keys: &HashSet<String>) -> Vec<String> {
        if keys.is_empty() {
            return Vec::new();
        }
        let mut removed = Vec::new();
        self.tabs.retain(|t| {
            if keys.contains(&t.key) {
                removed.push(t.key.clone());
                false
            } else {
                true
            }
        });
        if !removed.is_empty() {
            self.bump();
        }
        removed
    }

    /// Remove the record at `old_index` and reinsert it at `new_index`.
    ///
    /// The target is clamped to the end of the list. Returns `false` when
    /// `old_index` is out of range.
    pub fn move_tab(&mut self, old_index: usize, new_index: usize) -> bool {
        if old_index >= self.tabs.len() {
            return false;
        }
        let tab = self.tabs.remove(old_index);
        let target = new_index.min(self.tabs.len());
        self.tabs.insert(target, tab);
        self.drag_revision += 1;
        self.bump();
        true
    }

    /// Recompute the cache-name set; returns true when it changed
    pub fn refresh_cache(&mut self) -> bool {
        let names = compute_cached_names(&self.tabs);
        if names == self.cached_names {
            return false;
        }
        self.cached_names = names;
        true
    }

    pub fn cached_names(&self) -> &BTreeSet<String> {
        &self.cached_names
    }

    pub fn excluded_names(&self) -> &BTreeSet<String> {
        &self.excluded_names
    }

    pub(crate) fn exclude(&mut self, name: &str) {
        self.excluded_names.insert(name.to_string());
    }

    pub(crate) fn include(&mut self, name: &str) {
        self.excluded_names.remove(name);
    }

    pub fn render_route_view(&self) -> bool {
        self.render_route_view
    }

    pub(crate) fn set_render_route_view(&mut self, render: bool) {
        self.render_route_view = render;
    }

    pub fn drag_revision(&self) -> u64 {
        self.drag_revision
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}
