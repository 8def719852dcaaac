//! Tab record model: the entity stored for each open tab.

use super::key::resolve_tab_key;
use crate::navigation::NavigationRequest;
use crate::route::{MatchedRoute, RouteParams, RouteQuery, RouteTarget};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// Custom tab title: either a fixed string or a closure evaluated at read time
#[derive(Clone)]
pub enum TabTitle {
    Static(String),
    Computed(Arc<dyn Fn() -> String + Send + Sync>),
}

impl TabTitle {
    /// Build a title recomputed every time it is read
    pub fn computed(f: impl Fn() -> String + Send + Sync + 'static) -> Self {
        TabTitle::Computed(Arc::new(f))
    }

    pub fn resolve(&self) -> String {
        match self {
            TabTitle::Static(title) => title.clone(),
            TabTitle::Computed(f) => f(),
        }
    }
}

impl fmt::Debug for TabTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabTitle::Static(title) => f.debug_tuple("Static").field(title).finish(),
            TabTitle::Computed(_) => f.debug_tuple("Computed").field(&self.resolve()).finish(),
        }
    }
}

impl PartialEq for TabTitle {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TabTitle::Static(a), TabTitle::Static(b)) => a == b,
            (TabTitle::Computed(a), TabTitle::Computed(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&str> for TabTitle {
    fn from(title: &str) -> Self {
        TabTitle::Static(title.to_string())
    }
}

impl From<String> for TabTitle {
    fn from(title: String) -> Self {
        TabTitle::Static(title)
    }
}

// Computed titles are snapshotted: persistence only ever sees the string.
impl Serialize for TabTitle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.resolve())
    }
}

impl<'de> Deserialize<'de> for TabTitle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(TabTitle::Static)
    }
}

/// Recognized route meta keys. Anything else in the input is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabMeta {
    /// Pinned: cannot be closed or evicted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affix_tab: Option<bool>,
    /// Sort key among pinned tabs (missing = 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affix_tab_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// User-assigned title overriding `title`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_tab_title: Option<TabTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_in_tab: Option<bool>,
    /// `Some(false)` keys the tab by bare path instead of full path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_path_key: Option<bool>,
    /// Per-route-name cap on open tabs (<= 0 = unlimited)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_num_of_open_tab: Option<i64>,
}

impl TabMeta {
    pub fn is_pinned(&self) -> bool {
        self.affix_tab.unwrap_or(false)
    }

    pub fn is_hidden(&self) -> bool {
        self.hide_in_tab.unwrap_or(false)
    }

    pub fn keeps_alive(&self) -> bool {
        self.keep_alive.unwrap_or(false)
    }

    /// Merge meta from a fresh navigation over the stored meta.
    ///
    /// Fields set on `newer` win, except that pin state and the custom title
    /// stay with the stored record whenever it has them set.
    pub fn merged(older: &TabMeta, newer: &TabMeta) -> TabMeta {
        let mut merged = TabMeta {
            affix_tab: newer.affix_tab.or(older.affix_tab),
            affix_tab_order: newer.affix_tab_order.or(older.affix_tab_order),
            title: newer.title.clone().or_else(|| older.title.clone()),
            new_tab_title: newer
                .new_tab_title
                .clone()
                .or_else(|| older.new_tab_title.clone()),
            keep_alive: newer.keep_alive.or(older.keep_alive),
            hide_in_tab: newer.hide_in_tab.or(older.hide_in_tab),
            full_path_key: newer.full_path_key.or(older.full_path_key),
            max_num_of_open_tab: newer.max_num_of_open_tab.or(older.max_num_of_open_tab),
        };
        if older.affix_tab.is_some() {
            merged.affix_tab = older.affix_tab;
        }
        if older.new_tab_title.is_some() {
            merged.new_tab_title = older.new_tab_title.clone();
        }
        merged
    }
}

/// One open tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabRecord {
    /// Unique identity within the collection
    pub key: String,
    pub name: String,
    pub path: String,
    pub full_path: String,
    #[serde(default, skip_serializing_if = "RouteParams::is_empty")]
    pub params: RouteParams,
    #[serde(default, skip_serializing_if = "RouteQuery::is_empty")]
    pub query: RouteQuery,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched: Vec<MatchedRoute>,
    #[serde(default)]
    pub meta: TabMeta,
}

impl TabRecord {
    /// Key a tab for `target` would get: its precomputed key, else the resolved one
    pub fn key_for(target: &RouteTarget) -> String {
        target
            .key
            .clone()
            .unwrap_or_else(|| resolve_tab_key(target))
    }

    /// Copy a route target into a new record, reusing its key when present
    pub fn from_target(target: &RouteTarget) -> Self {
        Self {
            key: Self::key_for(target),
            name: target.name.clone(),
            path: target.path.clone(),
            full_path: target.full_path_or_path().to_string(),
            params: target.params.clone(),
            query: target.query.clone(),
            matched: target
                .matched
                .iter()
                .map(|m| MatchedRoute {
                    name: m.name.clone(),
                    path: m.path.clone(),
                    meta: m.meta.clone(),
                })
                .collect(),
            meta: target.meta.clone(),
        }
    }

    pub fn is_pinned(&self) -> bool {
        self.meta.is_pinned()
    }

    /// False when the tab or any matched ancestor sets `hide_in_tab`
    pub fn is_shown(&self) -> bool {
        !self.meta.is_hidden() && self.matched.iter().all(|m| !m.meta.is_hidden())
    }

    /// Custom title, then route title, then route name
    pub fn display_title(&self) -> String {
        if let Some(title) = &self.meta.new_tab_title {
            return title.resolve();
        }
        self.meta
            .title
            .clone()
            .unwrap_or_else(|| self.name.clone())
    }

    /// The location to navigate to when this tab is activated
    pub fn location(&self) -> NavigationRequest {
        NavigationRequest {
            path: self.path.clone(),
            params: self.params.clone(),
            query: self.query.clone(),
        }
    }

    /// Merge a fresh record for the same key over this one
    pub fn merged_with(&self, newer: &TabRecord) -> TabRecord {
        TabRecord {
            key: self.key.clone(),
            name: newer.name.clone(),
            path: newer.path.clone(),
            full_path: newer.full_path.clone(),
            params: newer.params.clone(),
            query: newer.query.clone(),
            matched: newer.matched.clone(),
            meta: TabMeta::merged(&self.meta, &newer.meta),
        }
    }
}
