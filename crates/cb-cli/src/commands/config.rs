//! Config command
//!
//! Manage comment-board configuration.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Subcommand;

use cb_core::config::Config;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config_path: Option<PathBuf>) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(json, config_path),
        ConfigCommand::Init { force } => init_config(force, config_path),
        ConfigCommand::Path => print_path(config_path),
    }
}

fn resolve_path(config_path: Option<PathBuf>) -> Result<PathBuf> {
    config_path
        .or_else(Config::default_path)
        .ok_or_else(|| anyhow!("No configuration directory available on this system"))
}

fn show_config(as_json: bool, config_path: Option<PathBuf>) -> Result<()> {
    use colored::Colorize;

    let path = resolve_path(config_path)?;

    if !path.exists() {
        eprintln!(
            "{} Configuration not found. Run '{}' to create.",
            "⚠".yellow(),
            "comment-board config init".cyan()
        );
        return Ok(());
    }

    let content = std::fs::read_to_string(&path)?;

    if as_json {
        let config: toml::Value = toml::from_str(&content)?;
        let json = serde_json::to_string_pretty(&config)?;
        println!("{}", json);
    } else {
        println!("{}", "Configuration:".bold().underline());
        println!("{}", path.display().to_string().dimmed());
        println!();
        println!("{}", content);
    }

    Ok(())
}

fn init_config(force: bool, config_path: Option<PathBuf>) -> Result<()> {
    use colored::Colorize;

    let path = resolve_path(config_path)?;

    if path.exists() && !force {
        eprintln!(
            "{} {} already exists. Use {} to overwrite.",
            "⚠".yellow(),
            path.display(),
            "--force".cyan()
        );
        return Ok(());
    }

    Config::default()
        .save(&path)
        .context("Failed to write configuration")?;
    println!("{} Wrote {}", "✓".green(), path.display());
    Ok(())
}

fn print_path(config_path: Option<PathBuf>) -> Result<()> {
    let path = resolve_path(config_path)?;
    println!("{}", path.display());
    Ok(())
}
