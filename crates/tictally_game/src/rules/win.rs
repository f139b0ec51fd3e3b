//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Line, Mark, Position};

/// The eight lines in scan order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and its mark.
pub fn winning_line(board: &Board) -> Option<(Mark, Line)> {
    for line @ [a, b, c] in LINES {
        let cell = board.get(a);
        if let Cell::Occupied(mark) = cell
            && cell == board.get(b)
            && cell == board.get(c)
        {
            return Some((mark, line));
        }
    }

    None
}
