//! First-class intents and effects.
//!
//! Intents are what the user asked for; effects are the persistence work a
//! transition leaves for the caller. The game never performs I/O itself.

use super::players::PlayerIdentity;
use super::position::Position;

/// A user intent dispatched into [`GameState::apply`](crate::GameState::apply).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Place the current mark at a position.
    Place(Position),
    /// Start a new round with the same players.
    Reset,
    /// Submit the two player names.
    SetPlayers {
        /// Raw X-side name.
        x: String,
        /// Raw O-side name.
        o: String,
    },
}

/// Pending persistence work returned by a transition.
///
/// Each variant is an ordered chain ending with a stats refresh for both
/// players. The caller runs it exactly once.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Effect {
    /// Ensure stats rows exist for both players, then fetch them.
    #[display("register {} and {}", _0.x(), _0.o())]
    RegisterPlayers(PlayerIdentity),
    /// Increment the winner's win count, then refresh.
    #[display("record win for {}", winner)]
    RecordWin {
        /// Name of the winning player.
        winner: String,
        /// Both players, for the refresh.
        players: PlayerIdentity,
    },
    /// Increment both players' draw counts, then refresh.
    #[display("record draw for {} and {}", _0.x(), _0.o())]
    RecordDraw(PlayerIdentity),
}

impl Effect {
    /// Returns the players whose stats are refreshed at the end of the chain.
    pub fn players(&self) -> &PlayerIdentity {
        match self {
            Effect::RegisterPlayers(players) | Effect::RecordDraw(players) => players,
            Effect::RecordWin { players, .. } => players,
        }
    }

    /// Returns true for the result-recording variants.
    pub fn is_record(&self) -> bool {
        !matches!(self, Effect::RegisterPlayers(_))
    }
}
