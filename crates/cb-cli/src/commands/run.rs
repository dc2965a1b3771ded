//! Run command
//!
//! Start the comment board TUI.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use cb_core::config::Config;
use cb_net::HttpCommentsGateway;
use cb_ui::App;

/// Arguments for the run command
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Comments endpoint override
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Event poll interval override in milliseconds
    #[arg(long)]
    pub tick_rate: Option<u64>,
}

/// Execute the run command
pub fn execute(args: RunArgs, config_path: Option<PathBuf>) -> Result<()> {
    let mut config = Config::load_or_default(config_path.as_deref())
        .context("Failed to load configuration")?;
    if let Some(endpoint) = args.endpoint {
        config.fetch.endpoint = endpoint;
    }
    if let Some(tick_rate) = args.tick_rate {
        config.ui.tick_rate_ms = tick_rate;
    }
    tracing::info!(endpoint = %config.fetch.endpoint, "starting comment board");

    // The TUI loop is synchronous; the runtime serves the spawned fetches.
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let _guard = runtime.enter();

    let gateway = HttpCommentsGateway::from_config(&config.fetch)
        .context("Failed to construct comments gateway")?;
    let mut app = App::new(config.ui, Arc::new(gateway));
    app.run()
}
