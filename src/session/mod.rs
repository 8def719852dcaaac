//! Session state types for persisting the open tabs
//!
//! Only the raw tab list is persisted. The cache and exclude sets are derived
//! state and are rebuilt when a session is restored.

pub mod capture;
pub mod restore;
pub mod storage;

pub use capture::capture_session;
pub use restore::restore_session;
pub use storage::{clear_session_at, load_session_from, save_session_to, session_path};

use crate::tab::TabRecord;
use serde::{Deserialize, Serialize};

/// Persisted tab list for one browser-style session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTabs {
    /// Timestamp when the session was saved (ISO 8601)
    pub saved_at: String,
    /// Tabs in storage order
    #[serde(default)]
    pub tabs: Vec<TabRecord>,
}
