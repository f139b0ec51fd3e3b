//! Derived game result.

use super::position::Position;
use super::types::Mark;

/// Three positions forming a row, column, or diagonal.
pub type Line = [Position; 3];

/// Result of evaluating a board.
///
/// Always derived from the board; never stored alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// No completed line and at least one empty cell.
    Ongoing,
    /// A line of three identical marks.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The first completed line in scan order.
        line: Line,
    },
    /// Full board with no completed line.
    Drawn,
}

impl Outcome {
    /// Returns true for `Won` and `Drawn`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line, if any.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Checks whether the position is part of the winning line.
    pub fn highlights(&self, pos: Position) -> bool {
        self.line().is_some_and(|line| line.contains(&pos))
    }
}
