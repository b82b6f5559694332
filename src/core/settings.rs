//! User settings
//!
//! Everything here is serialised to `settings.json`. Every field has a
//! default, so older or partial files still load.

use crate::core::error::{CoreError, CoreResult};
use crate::game::ai::Difficulty;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Longest artificial thinking delay accepted from a settings file
pub const MAX_THINKING_DELAY_MS: u64 = 10_000;

/// Largest Fischer increment accepted from a settings file
pub const MAX_INCREMENT_SECONDS: u32 = 60;

/// Initial clock allotment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeControl {
    /// Ten minutes per side
    #[default]
    Standard,
    /// Five minutes per side
    Pro,
}

impl TimeControl {
    /// Seconds each side starts with
    pub const fn initial_seconds(self) -> u32 {
        match self {
            TimeControl::Standard => 600,
            TimeControl::Pro => 300,
        }
    }
}

/// Bounds of the pause before the computer answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThinkingDelay {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for ThinkingDelay {
    fn default() -> Self {
        Self {
            min_ms: 1000,
            max_ms: 3000,
        }
    }
}

impl ThinkingDelay {
    /// Fixed delay, mostly for tests
    pub const fn fixed(ms: u64) -> Self {
        Self {
            min_ms: ms,
            max_ms: ms,
        }
    }

    /// Draw a delay uniformly from `[min_ms, max_ms]`
    pub fn sample(&self) -> Duration {
        if self.min_ms >= self.max_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rand::rng().random_range(self.min_ms..=self.max_ms))
    }
}

/// Persisted user preferences
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub time_control: TimeControl,
    /// Seconds added to the mover's clock after each move
    pub increment_seconds: u32,
    pub thinking_delay: ThinkingDelay,
    /// Difficulty used when a game is started without one
    pub default_difficulty: Difficulty,
}

impl GameSettings {
    pub fn initial_clock_seconds(&self) -> u32 {
        self.time_control.initial_seconds()
    }

    /// Reject values the game cannot run with
    pub fn validate(&self) -> CoreResult<()> {
        let delay = self.thinking_delay;
        if delay.min_ms > delay.max_ms {
            return Err(CoreError::InvalidSettings {
                message: format!(
                    "thinking delay minimum ({} ms) exceeds maximum ({} ms)",
                    delay.min_ms, delay.max_ms
                ),
            });
        }
        if delay.max_ms > MAX_THINKING_DELAY_MS {
            return Err(CoreError::InvalidSettings {
                message: format!(
                    "thinking delay of {} ms is above the {} ms limit",
                    delay.max_ms, MAX_THINKING_DELAY_MS
                ),
            });
        }
        if self.increment_seconds > MAX_INCREMENT_SECONDS {
            return Err(CoreError::InvalidSettings {
                message: format!(
                    "increment of {} s is above the {} s limit",
                    self.increment_seconds, MAX_INCREMENT_SECONDS
                ),
            });
        }
        Ok(())
    }
}
