//! # Engine constants - starting layout, piece-square tables, search scores
//!
//! ## Material
//!
//! Material values live on [`PieceKind::value`](crate::types::PieceKind::value)
//! and are expressed in whole pawns: Pawn 1, Knight 3, Bishop 3, Rook 5,
//! Queen 9, King 0. The game controller reuses the same numbers for its
//! capture score (ten points per pawn of material).
//!
//! ## Piece-square tables
//!
//! Only pawns and knights carry a positional bonus. The tables are written
//! from White's side of the board: row 0 is the far (Black) back rank, row 7
//! is White's own back rank. Entries are in hundredths of a pawn and are
//! divided by [`PST_SCALE`] before they join the material score.
//!
//! Black reads the very same `(row, col)` entries without mirroring, so the
//! starting position is not balanced: it evaluates to +3.9 for Black.
//!
//! ## Terminal score
//!
//! [`TERMINAL_SCORE`] stands in for checkmate and stalemate alike when the
//! side to move has no legal move. It is deliberately not scaled against
//! material: a queen is worth 9 while a dead end is worth 1000.

use crate::types::PieceKind::{self, *};

/// Divisor applied to piece-square entries
pub const PST_SCALE: i32 = 100;

/// Magnitude returned by the search when the side to move has no moves
pub const TERMINAL_SCORE: f64 = 1000.0;

/// Back rank layout from column 0 to column 7 (same for both colors)
pub const BACK_RANK: [PieceKind; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

#[rustfmt::skip]
pub const PAWN_TABLE: [[i32; 8]; 8] = [
    [  0,   0,   0,   0,   0,   0,   0,   0],
    [ 50,  50,  50,  50,  50,  50,  50,  50],
    [ 10,  10,  20,  30,  30,  20,  10,  10],
    [  5,   5,  10,  25,  25,  10,   5,   5],
    [  0,   0,   0,  20,  20,   0,   0,   0],
    [  5,  -5, -10,   0,   0, -10,  -5,   5],
    [  5,  10,  10, -20, -20,  10,  10,   5],
    [  0,   0,   0,   0,   0,   0,   0,   0],
];

#[rustfmt::skip]
pub const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];
