//! Tictally CLI entry point.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Parser;
use tictally::{Cli, Command, run_tui};
use tictally_stats::{KEY_VAR, StatsConfig, StatsStore, URL_VAR};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,tictally=debug";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or_default();

    match &command {
        Command::Play { log_file } => init_file_tracing(log_file)?,
        Command::Stats { .. } | Command::Config => init_stderr_tracing(),
    }

    let config = load_config(cli.env_file.as_deref(), &cli.table)?;

    match command {
        Command::Play { .. } => run_tui(StatsStore::from_config(&config)).await,
        Command::Stats { names, json } => print_stats(&config, &names, json).await,
        Command::Config => {
            print_config(&config);
            Ok(())
        }
    }
}

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Logs to a file so output never lands on the game screen.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)?;
    tracing_subscriber::registry()
        .with(filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(log_file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

fn init_stderr_tracing() {
    tracing_subscriber::registry()
        .with(filter())
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Reads stats settings from `--env-file`, or from `.env` and the process
/// environment when none is given.
#[instrument]
fn load_config(env_file: Option<&Path>, table: &str) -> Result<StatsConfig> {
    let config = match env_file {
        Some(path) => StatsConfig::from_env_file(path)?,
        None => {
            dotenvy::dotenv().ok();
            StatsConfig::from_env()
        }
    };
    info!(status = config.describe(), table, "Stats config loaded");
    Ok(config.with_table(table))
}

async fn print_stats(config: &StatsConfig, names: &[String], json: bool) -> Result<()> {
    let store = StatsStore::from_config(config);
    if !store.is_enabled() {
        bail!("Stats store not configured: set {} and {}", URL_VAR, KEY_VAR);
    }

    let stats = store.fetch_stats(names).await;
    if json {
        let ordered: std::collections::BTreeMap<_, _> = stats.iter().collect();
        println!("{}", serde_json::to_string_pretty(&ordered)?);
        return Ok(());
    }
    for name in names {
        match stats.get(name) {
            Some(s) => println!("{}: {} wins, {} draws", name, s.wins, s.draws),
            None => println!("{}: no record", name),
        }
    }
    Ok(())
}

fn print_config(config: &StatsConfig) {
    println!("{}", config.describe());
    match config.endpoint() {
        Some(endpoint) => {
            println!("  url:   {}", endpoint.url());
            println!("  table: {}", endpoint.table());
        }
        None => println!("  set {} and {} to save results", URL_VAR, KEY_VAR),
    }
}
