//! The state of one game, from start to reset

use crate::game::ai::Difficulty;
use crate::game::resources::{CapturedPieces, GameClock, MoveHistory, Selection};
use crate::game::status::GameStatus;
use chess_engine::{Board, Color};

/// Aggregate owned by the controller for the length of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    pub board: Board,
    pub side_to_move: Color,
    pub status: GameStatus,
    pub history: MoveHistory,
    pub captured: CapturedPieces,
    pub clock: GameClock,
    pub score: u32,
    pub difficulty: Difficulty,
    pub selection: Selection,
}

impl GameSession {
    /// A fresh game from the starting position, White to move
    pub fn new(difficulty: Difficulty, clock: GameClock) -> Self {
        Self::from_board(Board::initial(), Color::White, difficulty, clock)
    }

    /// A game from an arbitrary position
    pub fn from_board(board: Board, side_to_move: Color, difficulty: Difficulty, clock: GameClock) -> Self {
        Self {
            board,
            side_to_move,
            status: GameStatus::Playing,
            history: MoveHistory::default(),
            captured: CapturedPieces::default(),
            clock,
            score: 0,
            difficulty,
            selection: Selection::default(),
        }
    }

    /// Number of moves applied so far
    pub fn ply(&self) -> u32 {
        self.history.len() as u32
    }
}
