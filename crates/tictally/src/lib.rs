//! Tictally - two-player terminal tic-tac-toe with per-player stats.
//!
//! The binary builds one [`StatsStore`](tictally_stats::StatsStore) from
//! the environment and injects it into the terminal UI, which runs every
//! persistence [`Effect`](tictally_game::Effect) through [`run_effect`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod session;
mod tui;

pub use cli::{Cli, Command, DEFAULT_LOG_FILE};
pub use session::{EffectRunner, StatsCache, run_effect};
pub use tui::{
    App, Control, MAX_NAME_LEN, NameEntry, NameField, digit_position, move_cursor, run_tui,
};
