use anyhow::Result;
use clap::Parser;
use par_tabs::cli::{self, Cli};
use tokio::runtime::Runtime;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // CLI --log-level takes highest precedence, then RUST_LOG, then config (applied below).
    par_tabs::debug::init_log_bridge(cli.log_level);

    let config = cli::load_config(cli.config.as_deref())?;
    par_tabs::debug::apply_config_level(config.log_level.to_level_filter());

    log::info!("Starting par-tabs {}", par_tabs::VERSION);

    let runtime = Runtime::new()?;
    let result = runtime.block_on(cli::run(cli.command, config));

    if let Err(ref e) = result {
        eprintln!("par-tabs: error: {e:#}");
    }
    result
}
