//! Tinker - terminal chat agent for Claude
//!
//! CLI entry point.

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::info;

use tinker::cli::{Cli, Command};
use tinker::config::Config;
use tinker::tools::ToolRegistry;

fn setup_logging(verbose: bool) -> Result<()> {
    // Diagnostics go to a file so stdout stays a clean transcript
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tinker")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(log_dir.join("tinker.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!(
        "Loaded config: provider={}, model={}",
        config.llm.provider, config.llm.model
    );

    match cli.command {
        Some(Command::Chat { message }) => tinker::agent::run_chat(&config, message).await,
        Some(Command::Tools) => cmd_tools(&config),
        None => tinker::agent::run_chat(&config, None).await,
    }
}

/// List the registered tools
///
/// Works without an API key: the registry is local.
fn cmd_tools(config: &Config) -> Result<()> {
    let registry = ToolRegistry::standard(&config.tools);

    println!("{}", "Available tools:".bright_cyan());
    println!();
    for def in registry.definitions() {
        println!("  {}", def.name.yellow());
        for line in def.description.lines() {
            if !line.trim().is_empty() {
                println!("    {}", line.trim());
            }
        }
        println!();
    }

    Ok(())
}
