//! Command-line interface for par-tabs.
//!
//! This module handles CLI argument parsing and the subcommands: replaying a
//! tab script and inspecting or clearing persisted sessions.

use crate::config::Config;
use crate::replay::{self, ReplayScript};
use crate::session::{self, SessionTabs};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// par-tabs - Route-based tab manager
#[derive(Parser)]
#[command(name = "par-tabs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace); overrides RUST_LOG and config
    #[arg(long, value_name = "LEVEL", global = true, value_parser = parse_level_filter)]
    pub log_level: Option<LevelFilter>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a YAML script of tab operations and print the tabs after each step
    Replay {
        /// Script file
        script: PathBuf,

        /// Session to restore from and persist to (new session when omitted)
        #[arg(long, value_name = "ID")]
        session: Option<String>,

        /// Print reports as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a persisted session
    ShowSession {
        #[arg(long, value_name = "ID")]
        session: String,
    },
    /// Delete a persisted session
    ClearSession {
        #[arg(long, value_name = "ID")]
        session: String,
    },
}

fn parse_level_filter(value: &str) -> Result<LevelFilter, String> {
    value
        .parse()
        .map_err(|_| format!("invalid log level '{}'", value))
}

/// Load the config from `--config` or the default location
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Run a parsed command against `config`
pub async fn run(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Replay {
            script,
            session,
            json,
        } => run_replay(&script, session, json, config).await,
        Commands::ShowSession { session } => show_session(&session, &config),
        Commands::ClearSession { session } => {
            let path = session::session_path(&session, config.session_dir.as_deref());
            session::clear_session_at(&path)?;
            println!("Cleared session {}", session);
            Ok(())
        }
    }
}

async fn run_replay(
    script_path: &Path,
    session_id: Option<String>,
    json: bool,
    config: Config,
) -> Result<()> {
    let script = ReplayScript::load(script_path)?;
    let session_id = session_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let session_path = session::session_path(&session_id, config.session_dir.as_deref());
    let persist = config.tab_bar.persist;

    let manager = replay::build_manager(&script, Arc::new(config));
    manager.add_affix_tabs(&script.affix_routes());

    if persist && let Some(saved) = session::load_session_from(&session_path)? {
        session::restore_session(&manager, saved);
    }

    let reports = replay::run_script(&manager, &script.steps).await;

    if json {
        let out = serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?;
        println!("{}", out);
    } else {
        print!("{}", replay::format_reports(&reports));
    }

    if persist {
        session::save_session_to(&session::capture_session(&manager), &session_path)?;
        log::info!("Session {} saved", session_id);
        if !json {
            println!("session: {}", session_id);
        }
    }
    Ok(())
}

fn show_session(session_id: &str, config: &Config) -> Result<()> {
    let path = session::session_path(session_id, config.session_dir.as_deref());
    let Some(saved): Option<SessionTabs> = session::load_session_from(&path)? else {
        println!("No session {} at {}", session_id, path.display());
        return Ok(());
    };
    println!("Session {} (saved {})", session_id, saved.saved_at);
    for tab in &saved.tabs {
        let pin = if tab.is_pinned() { " [pinned]" } else { "" };
        println!("  {} ({}){}", tab.key, tab.display_title(), pin);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_replay_with_globals() {
        let cli = Cli::parse_from([
            "par-tabs",
            "replay",
            "script.yaml",
            "--json",
            "--log-level",
            "debug",
        ]);
        assert_eq!(cli.log_level, Some(LevelFilter::Debug));
        assert!(Cli::try_parse_from(["par-tabs", "--log-level", "loud", "replay", "x"]).is_err());
        match cli.command {
            Commands::Replay {
                script,
                session,
                json,
            } => {
                assert_eq!(script, PathBuf::from("script.yaml"));
                assert!(session.is_none());
                assert!(json);
            }
            _ => panic!("expected replay"),
        }
    }
}
