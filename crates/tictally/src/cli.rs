//! Command-line interface for tictally.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tictally_stats::DEFAULT_TABLE;

/// Default log file for the terminal UI.
pub const DEFAULT_LOG_FILE: &str = "tictally.log";

/// Tictally - two-player tic-tac-toe with win/draw stats
#[derive(Parser, Debug)]
#[command(name = "tictally")]
#[command(about = "Two-player terminal tic-tac-toe with per-player stats", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Dotenv file holding SUPABASE_URL and SUPABASE_KEY (default: ./.env if present)
    #[arg(long, global = true)]
    pub env_file: Option<PathBuf>,

    /// Remote stats table
    #[arg(long, global = true, default_value = DEFAULT_TABLE)]
    pub table: String,

    /// Subcommand to run (defaults to play)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// File the TUI writes its logs to
        #[arg(long, default_value = DEFAULT_LOG_FILE)]
        log_file: PathBuf,
    },

    /// Print stored stats for players
    Stats {
        /// Player names
        #[arg(required = true)]
        names: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Report whether the stats store is configured
    Config,
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}
