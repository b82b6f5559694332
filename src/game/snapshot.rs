//! Read-only view of the game for front ends
//!
//! Snapshots are plain values: they are published on a watch channel by the
//! runner and serialise to JSON for any outer surface.

use crate::game::ai::Difficulty;
use crate::game::resources::MoveRecord;
use crate::game::status::GameStatus;
use chess_engine::{Color, Piece, PieceKind, Square};
use serde::{Deserialize, Serialize};

/// Remaining whole seconds per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockView {
    pub white: u32,
    pub black: u32,
}

/// Pieces taken by each side
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedView {
    /// Black pieces White has taken
    pub white: Vec<PieceKind>,
    /// White pieces Black has taken
    pub black: Vec<PieceKind>,
}

/// Everything a front end needs to draw the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub status: GameStatus,
    /// 64 cells, row-major from row 0
    pub board: Vec<Option<Piece>>,
    pub side_to_move: Color,
    pub clocks: ClockView,
    pub score: u32,
    pub captured: CapturedView,
    pub history: Vec<MoveRecord>,
    pub is_thinking: bool,
    /// `None` while in the menu
    pub difficulty: Option<Difficulty>,
    pub selected: Option<Square>,
    pub targets: Vec<Square>,
    /// Captured material, White-positive
    pub material_advantage: i32,
}

impl GameSnapshot {
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.get(square.index()).copied().flatten()
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }
}
