//! Pawn movement

use crate::board::Board;
use crate::types::{Color, Square};

pub(super) fn is_valid_pawn_move(board: &Board, color: Color, from: Square, to: Square) -> bool {
    let direction = color.pawn_direction();
    let dy = to.row() as i8 - from.row() as i8;
    let dx = to.col() as i8 - from.col() as i8;

    // Forward move
    if dx == 0 && dy == direction {
        return board.is_empty(to);
    }

    // Double move from the home row
    if dx == 0 && dy == 2 * direction && from.row() == color.pawn_home_row() {
        return match from.offset(direction, 0) {
            Some(intermediate) => board.is_empty(intermediate) && board.is_empty(to),
            None => false,
        };
    }

    // Capture diagonally; the caller has already ruled out own pieces
    if dx.abs() == 1 && dy == direction {
        return !board.is_empty(to);
    }

    false
}
