//! Game state machine for tic-tac-toe.
//!
//! Every transition returns the effects it leaves behind instead of
//! performing them. The outcome is never stored: it is re-derived from the
//! board on each read, and the record latch alone decides whether a
//! terminal outcome still needs persisting.

use tracing::{debug, info, instrument};

use super::action::{Effect, Intent};
use super::outcome::Outcome;
use super::players::PlayerIdentity;
use super::position::Position;
use super::rules;
use super::types::{Board, Cell, Mark};

/// Complete state of one tic-tac-toe session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    board: Board,
    turn: Turn,
    players: Option<PlayerIdentity>,
    recorded: bool,
}

/// Mark to move next. X opens every round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Turn(Mark);

impl Default for Turn {
    fn default() -> Self {
        Self(Mark::X)
    }
}

impl GameState {
    /// Creates a game with an empty board and no players.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a game with players already identified.
    #[instrument]
    pub fn with_players(players: PlayerIdentity) -> Self {
        Self {
            players: Some(players),
            ..Self::default()
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn turn(&self) -> Mark {
        self.turn.0
    }

    /// Returns the players, once identified.
    pub fn players(&self) -> Option<&PlayerIdentity> {
        self.players.as_ref()
    }

    /// Checks whether both names have been supplied.
    pub fn is_identified(&self) -> bool {
        self.players.is_some()
    }

    /// Checks whether this round's result has been handed off for persistence.
    pub fn is_recorded(&self) -> bool {
        self.recorded
    }

    /// Derives the outcome from the board.
    pub fn outcome(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Checks whether a move at the position would be accepted.
    pub fn can_play(&self, pos: Position) -> bool {
        self.is_identified() && !self.outcome().is_terminal() && self.board.is_empty(pos)
    }

    /// Dispatches a user intent.
    #[instrument(skip(self))]
    pub fn apply(&mut self, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::Place(pos) => self.place(pos),
            Intent::Reset => {
                self.reset();
                Vec::new()
            }
            Intent::SetPlayers { x, o } => self.set_players(&x, &o),
        }
    }

    /// Supplies the player names.
    ///
    /// Accepted once, when both names are non-blank after trimming. Returns
    /// the register-and-fetch effect on acceptance and nothing otherwise.
    #[instrument(skip(self))]
    pub fn set_players(&mut self, x: &str, o: &str) -> Vec<Effect> {
        if self.players.is_some() {
            debug!("Players already identified, ignoring");
            return Vec::new();
        }
        match PlayerIdentity::new(x, o) {
            Ok(players) => {
                info!(x = %players.x(), o = %players.o(), "Players identified");
                self.players = Some(players.clone());
                vec![Effect::RegisterPlayers(players)]
            }
            Err(e) => {
                debug!(error = %e, "Player names rejected");
                Vec::new()
            }
        }
    }

    /// Places the current mark at a board index (0-8).
    ///
    /// Out-of-range indices are ignored like any other rejected move.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> Vec<Effect> {
        match Position::from_index(index) {
            Some(pos) => self.place(pos),
            None => {
                debug!(index, "Index off the board, ignoring");
                Vec::new()
            }
        }
    }

    /// Places the current mark at a position.
    ///
    /// A no-op unless players are identified, the game is ongoing, and the
    /// cell is empty. An accepted move flips the turn and runs [`settle`].
    ///
    /// [`settle`]: GameState::settle
    #[instrument(skip(self), fields(turn = %self.turn.0))]
    pub fn place(&mut self, pos: Position) -> Vec<Effect> {
        if !self.can_play(pos) {
            debug!(position = %pos, "Move ignored");
            return Vec::new();
        }

        let mark = self.turn.0;
        self.board.set(pos, Cell::Occupied(mark));
        self.turn = Turn(mark.opponent());
        debug!(position = %pos, mark = %mark, "Move accepted");

        self.settle().into_iter().collect()
    }

    /// Hands off a terminal result for persistence, at most once per round.
    ///
    /// Safe to call any number of times. The latch is flipped before the
    /// effect is returned, so only the first call after the game ends
    /// yields anything.
    #[instrument(skip(self), fields(recorded = self.recorded))]
    pub fn settle(&mut self) -> Option<Effect> {
        if self.recorded {
            return None;
        }
        let players = self.players.clone()?;
        let effect = match self.outcome() {
            Outcome::Ongoing => return None,
            Outcome::Won { mark, .. } => Effect::RecordWin {
                winner: players.name(mark).to_string(),
                players,
            },
            Outcome::Drawn => Effect::RecordDraw(players),
        };
        self.recorded = true;
        info!(effect = %effect, "Result latched");
        Some(effect)
    }

    /// Clears the board for a new round, keeping the players.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Turn::default();
        self.recorded = false;
        info!("Game reset");
    }

    /// Status readout: next to move, winner, or draw.
    pub fn status(&self) -> String {
        match self.outcome() {
            Outcome::Won { mark, .. } => {
                format!("Winner: {} ({})", mark, self.display_name(mark))
            }
            Outcome::Drawn => "Draw!".to_string(),
            Outcome::Ongoing => format!("Next: {}", self.turn.0),
        }
    }

    /// Name for a mark, falling back to "Player X" / "Player O".
    pub fn display_name(&self, mark: Mark) -> String {
        match &self.players {
            Some(players) => players.name(mark).to_string(),
            None => format!("Player {}", mark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identified() -> GameState {
        GameState::with_players(PlayerIdentity::new("Alice", "Bob").expect("valid names"))
    }

    #[test]
    fn test_new_game_waits_for_x() {
        let game = GameState::new();
        assert_eq!(game.turn(), Mark::X);
        assert_eq!(game.outcome(), Outcome::Ongoing);
        assert!(!game.is_recorded());
        assert_eq!(game.status(), "Next: X");
    }

    #[test]
    fn test_moves_ignored_before_players() {
        let mut game = GameState::new();
        assert!(game.apply_move(4).is_empty());
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.turn(), Mark::X);
    }

    #[test]
    fn test_set_players_only_once() {
        let mut game = GameState::new();
        let effects = game.set_players("Alice", "Bob");
        assert_eq!(effects.len(), 1);
        assert!(!effects[0].is_record());

        assert!(game.set_players("Carol", "Dave").is_empty());
        assert_eq!(game.players().map(|p| p.x().as_str()), Some("Alice"));
    }

    #[test]
    fn test_out_of_range_index_ignored() {
        let mut game = identified();
        assert!(game.apply_move(9).is_empty());
        assert_eq!(game.turn(), Mark::X);
    }

    #[test]
    fn test_status_names_winner() {
        let mut game = identified();
        for idx in [0, 3, 1, 4, 2] {
            game.apply_move(idx);
        }
        assert_eq!(game.status(), "Winner: X (Alice)");
    }

    #[test]
    fn test_display_name_fallback() {
        let game = GameState::new();
        assert_eq!(game.display_name(Mark::O), "Player O");
    }

    #[test]
    fn test_reset_keeps_players() {
        let mut game = identified();
        for idx in [0, 3, 1, 4, 2] {
            game.apply_move(idx);
        }
        assert!(game.is_recorded());

        game.reset();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.turn(), Mark::X);
        assert!(!game.is_recorded());
        assert!(game.is_identified());
    }

    #[test]
    fn test_apply_dispatches_intents() {
        let mut game = GameState::new();
        let effects = game.apply(Intent::SetPlayers {
            x: "Alice".to_string(),
            o: "Bob".to_string(),
        });
        assert_eq!(effects.len(), 1);

        assert!(game.apply(Intent::Place(Position::Center)).is_empty());
        assert_eq!(game.board().get(Position::Center), Cell::Occupied(Mark::X));

        assert!(game.apply(Intent::Reset).is_empty());
        assert!(game.board().is_empty(Position::Center));
    }
}
