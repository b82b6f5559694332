//! Move history
//!
//! Every applied move, human or computer, in play order. Entries are never
//! edited or removed during a game; the history is only read for display.

use chess_engine::{Piece, Square};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One applied move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The piece that moved
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    /// Occupant of `to` before the move, if any
    pub captured: Option<Piece>,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}->{}", self.piece.symbol(), self.from, self.to)?;
        if let Some(captured) = self.captured {
            write!(f, " x{}", captured.symbol())?;
        }
        Ok(())
    }
}

/// Applied moves of the current game
///
/// Index 0 is White's first move, index 1 Black's reply, and so on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }
}
