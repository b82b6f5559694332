//! Sliding pieces: rook, bishop, queen

use super::distance;
use crate::board::Board;
use crate::types::Square;

pub(super) fn is_valid_rook_move(board: &Board, from: Square, to: Square) -> bool {
    // Must move horizontally or vertically
    if from.row() != to.row() && from.col() != to.col() {
        return false;
    }

    is_path_clear(board, from, to)
}

pub(super) fn is_valid_bishop_move(board: &Board, from: Square, to: Square) -> bool {
    let (dr, dc) = distance(from, to);

    // Must move diagonally
    if dr != dc {
        return false;
    }

    is_path_clear(board, from, to)
}

pub(super) fn is_valid_queen_move(board: &Board, from: Square, to: Square) -> bool {
    is_valid_rook_move(board, from, to) || is_valid_bishop_move(board, from, to)
}

/// Whether every square strictly between `from` and `to` is empty.
///
/// Walks unit steps along the line implied by the two squares; callers only
/// pass squares sharing a row, a column or a diagonal.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let dy = (to.row() as i8 - from.row() as i8).signum();
    let dx = (to.col() as i8 - from.col() as i8).signum();

    let mut current = from.offset(dy, dx);
    while let Some(square) = current {
        if square == to {
            return true;
        }
        if !board.is_empty(square) {
            return false;
        }
        current = square.offset(dy, dx);
    }

    // Walked off the board without meeting `to`: not on a line
    false
}
