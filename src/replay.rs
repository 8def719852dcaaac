//! Scripted replay of tab operations.
//!
//! A replay script registers a route table and then lists steps that drive a
//! [`TabManager`] backed by a [`MemoryNavigator`]. After each step the ordered
//! tabs and the cache set are captured in a [`StepReport`].
//!
//! ```yaml
//! routes:
//!   - name: Home
//!     path: /home
//!     meta: { affix_tab: true }
//!   - name: Users
//!     path: /users
//!     meta: { keep_alive: true }
//! steps:
//!   - open: { path: /users, query: { page: "2" } }
//!   - pin: /users?page=2
//!   - close_all
//! ```

use crate::navigation::{MemoryNavigator, NavigationRequest, Navigator};
use crate::route::{RouteParams, RouteQuery, RouteTarget};
use crate::tab::{CloseOutcome, RefreshTarget, TabManager, TabRecord};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A replay script: route table plus steps
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReplayScript {
    #[serde(default)]
    pub routes: Vec<RouteTarget>,
    #[serde(default)]
    pub steps: Vec<ReplayStep>,
}

impl ReplayScript {
    pub fn from_yaml(contents: &str) -> Result<Self> {
        serde_yaml_ng::from_str(contents).context("Failed to parse replay script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay script {:?}", path))?;
        Self::from_yaml(&contents).with_context(|| format!("Invalid replay script {:?}", path))
    }

    /// Routes that declare `affix_tab`, opened as pinned tabs at startup
    pub fn affix_routes(&self) -> Vec<RouteTarget> {
        self.routes
            .iter()
            .filter(|r| r.meta.is_pinned())
            .cloned()
            .collect()
    }
}

/// Navigation performed by an `open` step
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenStep {
    pub path: String,
    #[serde(default)]
    pub params: RouteParams,
    #[serde(default)]
    pub query: RouteQuery,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenameStep {
    pub key: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SortStep {
    pub from: usize,
    pub to: usize,
}

/// `refresh: {}` refreshes the active view, `refresh: { name: X }` view X
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RefreshStep {
    #[serde(default)]
    pub name: Option<String>,
}

/// One replayed operation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplayStep {
    Open(OpenStep),
    Close(String),
    CloseLeft(String),
    CloseRight(String),
    CloseOther(String),
    CloseAll,
    Pin(String),
    Unpin(String),
    TogglePin(String),
    Rename(RenameStep),
    ResetTitle(String),
    Sort(SortStep),
    Refresh(RefreshStep),
}

/// A tab as shown in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabSummary {
    pub key: String,
    pub title: String,
    pub pinned: bool,
}

impl From<&TabRecord> for TabSummary {
    fn from(tab: &TabRecord) -> Self {
        Self {
            key: tab.key.clone(),
            title: tab.display_title(),
            pinned: tab.is_pinned(),
        }
    }
}

/// State after one step
#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub step: usize,
    pub outcome: String,
    pub active: Option<String>,
    pub tabs: Vec<TabSummary>,
    pub cached: Vec<String>,
}

/// Build a navigator and manager for `script`
pub fn build_manager(
    script: &ReplayScript,
    preferences: std::sync::Arc<dyn crate::config::TabPreferences>,
) -> TabManager<MemoryNavigator> {
    let navigator = std::sync::Arc::new(MemoryNavigator::new(script.routes.clone()));
    TabManager::new(navigator, preferences)
}

/// Run every step in order, collecting a report after each one.
///
/// Navigation failures are reported in the step outcome and do not stop the
/// replay.
pub async fn run_script(
    manager: &TabManager<MemoryNavigator>,
    steps: &[ReplayStep],
) -> Vec<StepReport> {
    let mut reports = Vec::with_capacity(steps.len());
    for (index, step) in steps.iter().enumerate() {
        let outcome = apply_step(manager, step).await;
        log::debug!("Step {}: {}", index + 1, outcome);
        let tabs = manager.tabs();
        reports.push(StepReport {
            step: index + 1,
            outcome,
            active: manager.active_key(),
            tabs: tabs.iter().map(TabSummary::from).collect(),
            cached: manager.cached_tabs(),
        });
    }
    reports
}

async fn apply_step(manager: &TabManager<MemoryNavigator>, step: &ReplayStep) -> String {
    match step {
        ReplayStep::Open(open) => {
            let request = NavigationRequest {
                path: open.path.clone(),
                params: open.params.clone(),
                query: open.query.clone(),
            };
            if let Err(e) = manager.navigator().replace(request).await {
                return format!("open failed: {e}");
            }
            match manager.navigator().current_location() {
                Some(location) => {
                    let tab = manager.add_tab(&location);
                    format!("opened {}", tab.key)
                }
                None => "open failed: no current location".to_string(),
            }
        }
        ReplayStep::Close(key) => match manager.close_tab(key).await {
            Ok(CloseOutcome::NotFound) => format!("close {key}: not found"),
            Ok(CloseOutcome::Pinned) => format!("close {key}: pinned"),
            Ok(CloseOutcome::Removed) => format!("closed {key}"),
            Ok(CloseOutcome::Navigated { to }) => format!("closed {key}, navigated to {to}"),
            Ok(CloseOutcome::LastTabRetained) => format!("close {key}: last tab retained"),
            Err(e) => format!("closed {key}, {e}"),
        },
        ReplayStep::CloseLeft(key) => bulk(manager.close_left_tabs(key).await),
        ReplayStep::CloseRight(key) => bulk(manager.close_right_tabs(key).await),
        ReplayStep::CloseOther(key) => bulk(manager.close_other_tabs(key).await),
        ReplayStep::CloseAll => bulk(manager.close_all_tabs().await),
        ReplayStep::Pin(key) => flag("pin", key, manager.pin_tab(key)),
        ReplayStep::Unpin(key) => flag("unpin", key, manager.unpin_tab(key)),
        ReplayStep::TogglePin(key) => flag("toggle_pin", key, manager.toggle_tab_pin(key)),
        ReplayStep::Rename(rename) => flag(
            "rename",
            &rename.key,
            manager.set_tab_title(&rename.key, rename.title.as_str()),
        ),
        ReplayStep::ResetTitle(key) => flag("reset_title", key, manager.reset_tab_title(key)),
        ReplayStep::Sort(sort) => {
            if manager.sort_tabs(sort.from, sort.to) {
                format!("moved {} -> {}", sort.from, sort.to)
            } else {
                format!("sort {}: no such index", sort.from)
            }
        }
        ReplayStep::Refresh(refresh) => {
            let target = match &refresh.name {
                Some(name) => RefreshTarget::Named(name.clone()),
                None => RefreshTarget::Active,
            };
            match manager.refresh(target).await {
                Some(name) => format!("refreshed {name}"),
                None => "refresh: no active view".to_string(),
            }
        }
    }
}

fn bulk(result: Result<crate::tab::BulkCloseOutcome, crate::error::TabError>) -> String {
    match result {
        Ok(outcome) => match outcome.navigated_to {
            Some(to) => format!("closed {} tabs, navigated to {}", outcome.closed.len(), to),
            None => format!("closed {} tabs", outcome.closed.len()),
        },
        Err(e) => format!("bulk close: {e}"),
    }
}

fn flag(action: &str, key: &str, applied: bool) -> String {
    if applied {
        format!("{action} {key}")
    } else {
        format!("{action} {key}: unchanged")
    }
}

/// Render reports as plain text
pub fn format_reports(reports: &[StepReport]) -> String {
    let mut out = String::new();
    for report in reports {
        out.push_str(&format!("#{} {}\n", report.step, report.outcome));
        for tab in &report.tabs {
            let marker = if report.active.as_deref() == Some(tab.key.as_str()) {
                '*'
            } else {
                ' '
            };
            let pin = if tab.pinned { " [pinned]" } else { "" };
            out.push_str(&format!("  {marker} {} ({}){pin}\n", tab.key, tab.title));
        }
        if !report.cached.is_empty() {
            out.push_str(&format!("  cached: {}\n", report.cached.join(", ")));
        }
    }
    out
}
