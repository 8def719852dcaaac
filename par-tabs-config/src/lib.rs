//! Configuration system for par-tabs.
//!
//! This crate provides configuration loading, saving, and default values
//! for the session tab manager. It includes:
//!
//! - The top-level [`Config`] and its [`TabBarConfig`] section
//! - Default value functions used by serde
//! - Typed [`ConfigError`] variants for I/O, parse and validation failures

pub mod config;
pub mod defaults;
mod error;
mod types;

pub use config::Config;
pub use error::ConfigError;
pub use types::{LogLevel, TabBarConfig};
