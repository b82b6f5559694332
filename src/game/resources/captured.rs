//! Captured pieces tracking
//!
//! Tracks pieces captured by each side and the resulting material balance.
//!
//! # Material Advantage
//!
//! Positive advantage means White is ahead, negative means Black is ahead.
//! Example: if White captured (Rook=5, Pawn=1) and Black captured (Knight=3),
//! White's advantage is (5+1) - 3 = +3 pawns.

use chess_engine::{Color, Piece, PieceKind};
use serde::{Deserialize, Serialize};

/// Pieces captured by both sides, in capture order. Append-only during a game.
///
/// # Usage
///
/// ```rust,ignore
/// captured.add_capture(Piece::black(PieceKind::Queen));
/// assert_eq!(captured.material_advantage(), 9);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    /// Pieces captured by white (black pieces taken)
    pub white_captured: Vec<PieceKind>,
    /// Pieces captured by black (white pieces taken)
    pub black_captured: Vec<PieceKind>,
}

impl CapturedPieces {
    /// Record a captured piece; the other side gets the credit
    pub fn add_capture(&mut self, captured: Piece) {
        match captured.color {
            Color::White => self.black_captured.push(captured.kind),
            Color::Black => self.white_captured.push(captured.kind),
        }
    }

    /// Pieces taken by `color`
    pub fn taken_by(&self, color: Color) -> &[PieceKind] {
        match color {
            Color::White => &self.white_captured,
            Color::Black => &self.black_captured,
        }
    }

    /// Material difference in pawns, White-positive
    pub fn material_advantage(&self) -> i32 {
        let white_score: u32 = self.white_captured.iter().map(|kind| kind.value()).sum();
        let black_score: u32 = self.black_captured.iter().map(|kind| kind.value()).sum();
        white_score as i32 - black_score as i32
    }
}
