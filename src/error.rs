//! Typed error types for the tab subsystem.
//!
//! Tab collection operations never fail on their own: unknown keys are
//! no-ops and duplicate keys merge. The only error a caller sees comes from
//! the router while closing the active tab.

use crate::navigation::NavigationError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabError {
    /// The router failed to move to the fallback tab. The close itself has
    /// already been applied.
    #[error("navigation after closing tab failed: {0}")]
    Navigation(#[from] NavigationError),
}
