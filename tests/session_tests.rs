//! Integration tests for session persistence
//!
//! Sessions persist only the raw tab list; derived state (cache set, exclude
//! set) must come back from the records alone.

mod common;

use common::*;
use par_tabs::config::Config;
use par_tabs::session::{
    capture_session, clear_session_at, load_session_from, restore_session, save_session_to,
    session_path,
};
use par_tabs::tab::TabTitle;
use tempfile::TempDir;

#[tokio::test]
async fn test_session_survives_restart() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = session_path("restart", Some(temp.path()));

    let before = manager_for(&["/home", "/users"], 0);
    open(&before, "/home").await;
    open(&before, "/users").await;
    before.add_tab(&nested_keep_alive("/reports", "Layout"));
    before.pin_tab("/users");
    before.set_tab_title("/home", TabTitle::computed(|| "Start".to_string()));
    save_session_to(&capture_session(&before), &path).unwrap();

    let after = manager_for(&["/home", "/users"], 0);
    let saved = load_session_from(&path).unwrap().expect("session should exist");
    assert_eq!(restore_session(&after, saved), 3);

    assert_eq!(ordered_keys(&after), ordered_keys(&before));
    assert_eq!(after.cached_tabs(), vec!["Layout", "reports"]);
    assert_eq!(after.get_tab_by_key("/home").unwrap().display_title(), "Start");
    assert!(after.get_tab_by_key("/users").unwrap().is_pinned());
}

#[test]
fn test_session_dir_from_config() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config = Config {
        session_dir: Some(temp.path().to_path_buf()),
        ..Config::default()
    };
    let path = session_path("abc", config.session_dir.as_deref());
    assert!(path.starts_with(temp.path()));
}

#[test]
fn test_sessions_are_independent() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let manager = manager_for(&[], 0);
    manager.add_tab(&route("/a"));

    let first = session_path("one", Some(temp.path()));
    let second = session_path("two", Some(temp.path()));
    save_session_to(&capture_session(&manager), &first).unwrap();

    assert!(load_session_from(&second).unwrap().is_none());
    clear_session_at(&first).unwrap();
    assert!(load_session_from(&first).unwrap().is_none());
}
