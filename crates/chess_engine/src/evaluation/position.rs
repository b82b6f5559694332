//! Piece-square bonuses for pawns and knights

use crate::constants::{KNIGHT_TABLE, PAWN_TABLE};
use crate::types::{Piece, PieceKind, Square};

/// Positional bonus in hundredths of a pawn, from the piece owner's side.
///
/// Both colours read the same `(row, col)` entry; the tables are not
/// mirrored for Black.
pub fn positional_bonus(piece: Piece, square: Square) -> i32 {
    let table = match piece.kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        _ => return 0,
    };

    table[square.row() as usize][square.col() as usize]
}
