//! Fetch command
//!
//! One-shot fetch of the comments collection, printed to stdout.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use cb_core::config::Config;
use cb_net::{CommentsGateway, HttpCommentsGateway};

/// Arguments for the fetch command
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Comments endpoint override
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Print the comments as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Execute the fetch command
pub fn execute(args: FetchArgs, config_path: Option<PathBuf>) -> Result<()> {
    use colored::Colorize;

    let mut config = Config::load_or_default(config_path.as_deref())
        .context("Failed to load configuration")?;
    if let Some(endpoint) = args.endpoint {
        config.fetch.endpoint = endpoint;
    }

    let gateway = HttpCommentsGateway::from_config(&config.fetch)
        .context("Failed to construct comments gateway")?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let records = runtime
        .block_on(gateway.fetch_comments())
        .context("Fetch failed")?;
    let comments: Vec<_> = records
        .into_iter()
        .map(cb_net::CommentRecord::into_comment)
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comments)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("Fetched {} comments", comments.len()).green()
    );
    for (index, comment) in comments.iter().enumerate() {
        println!("  {}. {}", (index + 1).to_string().dimmed(), comment);
    }

    Ok(())
}
