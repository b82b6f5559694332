//! Material evaluation
//!
//! Counts piece values only, in whole pawns, Black-positive.

use crate::board::Board;
use crate::types::{Color, Score};

/// Evaluate material balance
pub fn evaluate_material(board: &Board) -> Score {
    let total: i32 = board
        .pieces()
        .map(|(_, piece)| {
            let value = piece.kind.value() as i32;
            match piece.color {
                Color::White => -value,
                Color::Black => value,
            }
        })
        .sum();

    f64::from(total)
}
