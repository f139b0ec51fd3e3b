//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from the
//! game state so the outcome is always recomputed from the board alone.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winning_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates the board.
///
/// Returns the first completed line in scan order (rows, columns,
/// diagonals) as [`Outcome::Won`], [`Outcome::Drawn`] for a full board
/// without a line, and [`Outcome::Ongoing`] otherwise.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = winning_line(board) {
        return Outcome::Won { mark, line };
    }
    if is_full(board) {
        Outcome::Drawn
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark, Position};

    fn board_from(layout: &str) -> Board {
        let mut cells = [Cell::Empty; 9];
        for (cell, ch) in cells.iter_mut().zip(layout.chars().filter(|c| !c.is_whitespace())) {
            *cell = match ch {
                'X' => Cell::Occupied(Mark::X),
                'O' => Cell::Occupied(Mark::O),
                _ => Cell::Empty,
            };
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
    }

    #[test]
    fn test_full_board_without_line_is_drawn() {
        assert_eq!(evaluate(&board_from("XOX OXO OXO")), Outcome::Drawn);
        assert_eq!(evaluate(&board_from("XOX XOO OXX")), Outcome::Drawn);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let outcome = evaluate(&board_from("XXX OOX OXO"));
        assert_eq!(
            outcome,
            Outcome::Won {
                mark: Mark::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            }
        );
    }

    #[test]
    fn test_first_line_in_scan_order_is_reported() {
        // Top row and left column both complete; the row is scanned first.
        let outcome = evaluate(&board_from("XXX X.. X.."));
        assert_eq!(
            outcome.line(),
            Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
        );
    }

    #[test]
    fn test_partial_board_is_ongoing() {
        assert_eq!(evaluate(&board_from("XO. .X. ..O")), Outcome::Ongoing);
    }
}
