//! Tic-tac-toe game logic for tictally.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Cell`], [`Board`], [`Position`]
//! - **Rules**: [`evaluate`] derives an [`Outcome`] from a board
//! - **State**: [`GameState`] applies [`Intent`]s and returns [`Effect`]s
//!
//! The crate performs no I/O. Persisting results is the caller's job: a
//! transition that ends the game returns a single recording effect, and the
//! game's latch keeps it from being returned again until the next round.
//!
//! # Example
//!
//! ```
//! use tictally_game::{Effect, GameState, Mark, Outcome};
//!
//! let mut game = GameState::new();
//! game.set_players("Alice", "Bob");
//!
//! let mut effects = Vec::new();
//! for index in [0, 4, 1, 8, 2] {
//!     effects.extend(game.apply_move(index));
//! }
//!
//! assert_eq!(game.outcome().winner(), Some(Mark::X));
//! assert!(matches!(effects.as_slice(), [Effect::RecordWin { .. }]));
//! assert!(game.settle().is_none());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod outcome;
mod players;
mod position;
pub mod rules;
mod types;

pub use action::{Effect, Intent};
pub use game::GameState;
pub use outcome::{Line, Outcome};
pub use players::{NameError, PlayerIdentity};
pub use position::Position;
pub use rules::evaluate;
pub use types::{Board, Cell, Mark};
