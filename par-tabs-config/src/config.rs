//! Top-level `Config` struct plus load/save and path resolution.
//!
//! The config file lives at `~/.config/par-tabs/config.yaml` (XDG convention
//! on every platform except Windows, which uses the roaming config dir).

use crate::error::ConfigError;
use crate::types::{LogLevel, TabBarConfig};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Tab bar preferences (`max_count`, `persist`)
    #[serde(default = "crate::defaults::tab_bar")]
    pub tab_bar: TabBarConfig,

    /// Log level for the stderr log bridge
    #[serde(default = "crate::defaults::log_level")]
    pub log_level: LogLevel,

    /// Directory for session snapshots.
    ///
    /// When unset, snapshots go to the user's runtime directory (cleared at
    /// logout) or the system temp directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_bar: crate::defaults::tab_bar(),
            log_level: crate::defaults::log_level(),
            session_dir: None,
        }
    }
}

impl Config {
    /// Load configuration from the default path, creating it if missing
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            if let Err(e) = config.save() {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            Ok(config)
        }
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path).map_err(ConfigError::from)?;
        let config: Config = serde_yaml_ng::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to a specific file.
    ///
    /// Writes a temp file next to the target and renames it into place.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        log::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Check semantic constraints that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dir) = &self.session_dir
            && !dir.is_absolute()
        {
            return Err(ConfigError::Validation(format!(
                "session_dir must be an absolute path, got {:?}",
                dir
            )));
        }
        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir()
                .map(|dir| dir.join("par-tabs"))
                .unwrap_or_else(|| PathBuf::from("."))
        }
        #[cfg(not(target_os = "windows"))]
        {
            dirs::home_dir()
                .map(|home| home.join(".config").join("par-tabs"))
                .unwrap_or_else(|| PathBuf::from("."))
        }
    }
}
