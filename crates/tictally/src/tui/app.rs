//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_getters::Getters;
use tictally_game::{Effect, GameState, Intent, Mark, Position};
use tictally_stats::{PlayerStats, StatsMap};
use tracing::{debug, info, instrument};

use super::input::{digit_position, move_cursor};
use super::names::NameEntry;
use crate::session::StatsCache;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
    /// Keep running, dispatching these effects.
    Continue(Vec<Effect>),
    /// Leave the terminal.
    Quit,
}

impl Control {
    fn idle() -> Self {
        Control::Continue(Vec::new())
    }
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    /// Game being played.
    game: GameState,
    /// Highlighted cell.
    cursor: Position,
    /// Name overlay, present until players are identified.
    names: Option<NameEntry>,
    /// Last fetched stats.
    stats: StatsCache,
    /// Whether results will be persisted.
    stats_enabled: bool,
}

impl App {
    /// Creates a fresh app with the name overlay open.
    pub fn new(stats_enabled: bool) -> Self {
        Self {
            game: GameState::new(),
            cursor: Position::Center,
            names: Some(NameEntry::new()),
            stats: StatsCache::new(),
            stats_enabled,
        }
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(overlay = self.names.is_some()))]
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("Interrupted");
            return Control::Quit;
        }
        if self.names.is_some() {
            self.handle_name_key(key.code)
        } else {
            self.handle_board_key(key.code)
        }
    }

    fn handle_name_key(&mut self, code: KeyCode) -> Control {
        let Some(entry) = self.names.as_mut() else {
            return Control::idle();
        };
        match code {
            KeyCode::Esc => return Control::Quit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => entry.toggle_focus(),
            KeyCode::Backspace => entry.pop(),
            KeyCode::Char(c) => entry.push(c),
            KeyCode::Enter if entry.is_complete() => {
                let intent = entry.intent();
                return Control::Continue(self.dispatch(intent));
            }
            KeyCode::Enter => entry.toggle_focus(),
            _ => {}
        }
        Control::idle()
    }

    fn handle_board_key(&mut self, code: KeyCode) -> Control {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                Control::Quit
            }
            KeyCode::Char('r') => Control::Continue(self.dispatch(Intent::Reset)),
            KeyCode::Enter | KeyCode::Char(' ') => {
                Control::Continue(self.dispatch(Intent::Place(self.cursor)))
            }
            KeyCode::Char(c) => match digit_position(c) {
                Some(pos) => {
                    self.cursor = pos;
                    Control::Continue(self.dispatch(Intent::Place(pos)))
                }
                None => Control::idle(),
            },
            arrow => {
                self.cursor = move_cursor(self.cursor, arrow);
                Control::idle()
            }
        }
    }

    /// Applies an intent to the game, closing the overlay once names stick.
    pub fn dispatch(&mut self, intent: Intent) -> Vec<Effect> {
        let effects = self.game.apply(intent);
        if self.names.is_some() && self.game.is_identified() {
            debug!("Players set, closing name overlay");
            self.names = None;
        }
        effects
    }

    /// Re-checks the game for a result that still needs recording.
    pub fn settle(&mut self) -> Option<Effect> {
        self.game.settle()
    }

    /// Replaces the cached stats with a fresh fetch.
    pub fn refresh_stats(&mut self, stats: StatsMap) {
        self.stats.replace(stats);
    }

    /// Cached stats for the player holding a mark, once identified.
    pub fn player_stats(&self, mark: Mark) -> Option<(String, PlayerStats)> {
        let players = self.game.players()?;
        let name = players.name(mark);
        Some((name.to_string(), self.stats.get(name)))
    }

    /// Footer text describing whether stats are saved.
    pub fn stats_indicator(&self) -> &'static str {
        if self.stats_enabled {
            "Stats: saving to remote table"
        } else {
            "Stats: not configured"
        }
    }
}
