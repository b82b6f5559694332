//! Difficulty levels
//!
//! | Difficulty | Depth |
//! |------------|-------|
//! | Easy       | 2     |
//! | Medium     | 3     |
//! | Hard       | 4     |
//! | Expert     | 5     |
//! | Legend     | 6     |
//!
//! Depth is never taken from user input directly, which keeps the search
//! bounded without a time limit.

use crate::game::error::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Computer strength, fixed for the length of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
    Legend,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
        Difficulty::Legend,
    ];

    /// Search depth in plies
    pub const fn depth(self) -> u32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
            Difficulty::Expert => 5,
            Difficulty::Legend => 6,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
            Difficulty::Legend => "legend",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (depth {})", self.name(), self.depth())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.name() == wanted)
            .ok_or_else(|| GameError::UnknownDifficulty { name: s.to_string() })
    }
}
