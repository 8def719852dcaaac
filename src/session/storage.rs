//! File I/O for session persistence
//!
//! Sessions are scoped to one run of the shell: each lives in
//! `<runtime dir>/par-tabs/session-<id>.yaml` (temp dir when the platform has
//! no runtime dir) unless the config overrides the directory.

use super::SessionTabs;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get the path to the session file for `session_id`
pub fn session_path(session_id: &str, dir_override: Option<&Path>) -> PathBuf {
    let dir = match dir_override {
        Some(dir) => dir.to_path_buf(),
        None => dirs::runtime_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("par-tabs"),
    };
    dir.join(format!("session-{}.yaml", session_id))
}

/// Save a session to a specific file
pub fn save_session_to(session: &SessionTabs, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create session directory {:?}", parent))?;
    }

    let contents = serde_yaml_ng::to_string(session).context("Failed to serialize session")?;

    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write session to {:?}", path))?;

    log::info!("Saved session ({} tabs) to {:?}", session.tabs.len(), path);
    Ok(())
}

/// Load a session from a specific file
///
/// Returns `None` if the file doesn't exist or is empty.
/// Returns an error if the file exists but is corrupt.
pub fn load_session_from(path: &Path) -> Result<Option<SessionTabs>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read session from {:?}", path))?;

    if contents.trim().is_empty() {
        return Ok(None);
    }

    let session: SessionTabs = serde_yaml_ng::from_str(&contents)
        .with_context(|| format!("Failed to parse session from {:?}", path))?;

    log::info!("Loaded session ({} tabs) from {:?}", session.tabs.len(), path);
    Ok(Some(session))
}

/// Remove a session file; a missing file is not an error
pub fn clear_session_at(path: &Path) -> Result<()> {
    if path.exists() {
        std::fs::remove_file(path)
            .with_context(|| format!("Failed to remove session file {:?}", path))?;
        log::debug!("Removed session file {:?}", path);
    }
    Ok(())
}
