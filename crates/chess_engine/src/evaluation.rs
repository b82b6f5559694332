//! Position evaluation
//!
//! Scores a board from Black's point of view: Black is always the computer
//! side, so a positive score is good for the engine. The score combines
//!
//! - material (see [`material`])
//! - piece-square bonuses for pawns and knights (see [`position`])
//!
//! There is no king safety, mobility or pawn-structure term.

pub mod material;
pub mod position;

pub use material::evaluate_material;
pub use position::positional_bonus;

use crate::board::Board;
use crate::constants::PST_SCALE;
use crate::types::{Color, Score};

/// Evaluate a board (positive favours Black)
pub fn evaluate(board: &Board) -> Score {
    // Accumulate in hundredths of a pawn and scale once
    let total: i32 = board
        .pieces()
        .map(|(square, piece)| {
            let contribution = piece.kind.value() as i32 * PST_SCALE + positional_bonus(piece, square);
            match piece.color {
                Color::White => -contribution,
                Color::Black => contribution,
            }
        })
        .sum();

    f64::from(total) / f64::from(PST_SCALE)
}
