//! Game status state machine
//!
//! ```text
//! Menu ──start──▶ Playing ◀──resume── Paused
//!                   │  └────pause─────▶
//!                   ├──no legal moves──▶ Finished { winner }
//!                   └──clock at zero───▶ Timeout { loser }
//! ```
//!
//! `Finished` and `Timeout` are terminal until a reset, which goes back to
//! `Menu` from any state.

use chess_engine::Color;
use serde::{Deserialize, Serialize};

/// Where the current game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum GameStatus {
    /// No game in progress
    #[default]
    Menu,
    Playing,
    Paused,
    /// The side to move had no legal move; the previous mover won
    Finished { winner: Color },
    /// `loser` ran out of time
    Timeout { loser: Color },
}

impl GameStatus {
    /// Whether the game has ended
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Finished { .. } | GameStatus::Timeout { .. })
    }

    /// Whether moves and clocks are live
    pub fn is_playing(self) -> bool {
        self == GameStatus::Playing
    }

    /// Winner of a finished game, if any
    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Finished { winner } => Some(winner),
            GameStatus::Timeout { loser } => Some(loser.opposite()),
            _ => None,
        }
    }

    /// Human-readable status line
    pub fn message(self) -> String {
        match self {
            GameStatus::Menu => "Start a new game".to_string(),
            GameStatus::Playing => "Game in progress".to_string(),
            GameStatus::Paused => "Game paused".to_string(),
            GameStatus::Finished { winner } => {
                format!("{} wins - {} has no legal moves", winner, winner.opposite())
            }
            GameStatus::Timeout { loser } => {
                format!("{} wins on time - {}'s clock ran out", loser.opposite(), loser)
            }
        }
    }
}
