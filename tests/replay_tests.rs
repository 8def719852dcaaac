//! Integration tests for scripted replay

mod common;

use par_tabs::replay::{self, ReplayScript};
use std::sync::Arc;
use tempfile::TempDir;

const SCRIPT: &str = r#"
routes:
  - name: Dashboard
    path: /dashboard
    meta: { affix_tab: true, title: Overview }
  - name: Detail
    path: /detail
    meta: { max_num_of_open_tab: 2, keep_alive: true }
steps:
  - open: { path: /detail, query: { id: "1" } }
  - open: { path: /detail, query: { id: "2" } }
  - open: { path: /detail, query: { id: "3" } }
  - close: /dashboard
  - close_right: /detail?id=2
  - toggle_pin: /detail?id=2
  - reset_title: /detail?id=2
  - open: { path: /missing }
"#;

#[tokio::test(start_paused = true)]
async fn test_replay_script_file() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("script.yaml");
    std::fs::write(&path, SCRIPT).unwrap();

    let script = ReplayScript::load(&path).unwrap();
    let manager = replay::build_manager(&script, Arc::new(0usize));
    manager.add_affix_tabs(&script.affix_routes());
    let reports = replay::run_script(&manager, &script.steps).await;

    // Per-route cap of 2 evicts the first detail tab
    let keys: Vec<&str> = reports[2].tabs.iter().map(|t| t.key.as_str()).collect();
    assert_eq!(keys, vec!["/dashboard", "/detail?id=2", "/detail?id=3"]);
    assert_eq!(reports[2].tabs[0].title, "Overview");

    assert_eq!(reports[3].outcome, "close /dashboard: pinned");
    assert_eq!(reports[4].outcome, "closed 1 tabs, navigated to /dashboard");
    assert_eq!(reports[5].outcome, "toggle_pin /detail?id=2");
    assert!(reports[5].tabs.iter().all(|t| t.pinned));
    assert_eq!(reports[6].outcome, "reset_title /detail?id=2: unchanged");
    assert!(reports[7].outcome.starts_with("open failed"));
    assert_eq!(reports[7].cached, vec!["Detail"]);

    let json = serde_json::to_value(&reports).unwrap();
    assert_eq!(json[0]["tabs"][1]["key"], "/detail?id=1");
}

#[test]
fn test_missing_script_reports_path() {
    let err = ReplayScript::load(std::path::Path::new("/nonexistent/script.yaml")).unwrap_err();
    assert!(format!("{err:#}").contains("script.yaml"));
}
