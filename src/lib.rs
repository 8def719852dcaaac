// Library exports for testing and embedding
//
// # Mutex Usage Policy
//
// The tab collection lives behind a `parking_lot::Mutex` that is only held for
// synchronous sections. Never hold it across an `.await`: async operations
// (close with navigation, refresh) copy what they need out of the lock, drop
// the guard, then await.

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod config;
pub mod debug;
pub mod error;
pub mod navigation;
pub mod replay;
pub mod route;
pub mod session;
pub mod tab;
