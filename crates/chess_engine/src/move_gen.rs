//! Move legality and move generation
//!
//! Legality follows a simplified rule set:
//!
//! - a piece may never land on a square held by its own color
//! - pawns push one square, two from their home row, and capture one square
//!   diagonally forward
//! - rooks, bishops and queens slide along a clear path
//! - knights jump, kings step one square
//!
//! There is no check detection, castling, en passant or promotion. A move
//! that leaves the mover's own king capturable is still legal.
//!
//! # Module Structure
//!
//! - `pawn` - pawn pushes and diagonal captures
//! - `knight` - L-shaped jumps
//! - `sliding` - rook, bishop and queen geometry plus the path-clear walk
//! - `king` - single steps
//!
//! # Generation order
//!
//! [`all_moves`] walks source squares row-major and, for each, destination
//! squares row-major. The search breaks ties in favour of the earliest move,
//! so this order is part of the contract.

mod king;
mod knight;
mod pawn;
mod sliding;

#[cfg(test)]
mod tests;

pub use sliding::is_path_clear;

use crate::board::Board;
use crate::types::*;

/// Whether moving the piece on `from` to `to` is legal
pub fn is_legal(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };

    // Can't capture your own pieces (also rules out from == to)
    if board.color_at(to) == Some(piece.color) {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => pawn::is_valid_pawn_move(board, piece.color, from, to),
        PieceKind::Knight => knight::is_valid_knight_move(from, to),
        PieceKind::Bishop => sliding::is_valid_bishop_move(board, from, to),
        PieceKind::Rook => sliding::is_valid_rook_move(board, from, to),
        PieceKind::Queen => sliding::is_valid_queen_move(board, from, to),
        PieceKind::King => king::is_valid_king_move(from, to),
    }
}

/// Every legal move for `color`, in generation order
pub fn all_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();

    for from in Square::all() {
        if board.color_at(from) != Some(color) {
            continue;
        }
        for to in Square::all() {
            if is_legal(board, from, to) {
                moves.push(Move::new(from, to));
            }
        }
    }

    moves
}

/// Legal destinations of the piece on `from`, row-major. Empty for an empty square.
pub fn legal_destinations(board: &Board, from: Square) -> Vec<Square> {
    Square::all().filter(|&to| is_legal(board, from, to)).collect()
}

/// Whether `color` has at least one legal move. Stops at the first one found.
pub fn has_any_move(board: &Board, color: Color) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .any(|(from, _)| Square::all().any(|to| is_legal(board, from, to)))
}

/// Absolute row and column distance between two squares
#[inline]
pub(crate) fn distance(from: Square, to: Square) -> (u8, u8) {
    (from.row().abs_diff(to.row()), from.col().abs_diff(to.col()))
}
