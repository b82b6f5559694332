//! Per-side game clock with Fischer increment support
//!
//! Each side has a whole-second countdown. One [`GameClock::tick`] takes one
//! second off a single side; the controller only ticks the side to move and
//! only while the game is playing, which is what makes pausing freeze both
//! clocks. Clocks clamp at zero.
//!
//! # Fischer Increment
//!
//! With a non-zero increment, the mover gets that many seconds back after
//! each move (10+5 means ten minutes plus five seconds per move). The
//! default increment is zero.

use chess_engine::Color;
use serde::{Deserialize, Serialize};

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockTick {
    /// Time left after the tick
    Running { remaining: u32 },
    /// The clock reached zero
    Expired,
}

/// Remaining seconds for both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    pub white_seconds: u32,
    pub black_seconds: u32,
    /// Seconds added to the mover after each move
    pub increment_seconds: u32,
}

impl Default for GameClock {
    fn default() -> Self {
        Self::new(600, 0)
    }
}

impl GameClock {
    pub fn new(initial_seconds: u32, increment_seconds: u32) -> Self {
        Self {
            white_seconds: initial_seconds,
            black_seconds: initial_seconds,
            increment_seconds,
        }
    }

    pub fn remaining(&self, color: Color) -> u32 {
        match color {
            Color::White => self.white_seconds,
            Color::Black => self.black_seconds,
        }
    }

    fn remaining_mut(&mut self, color: Color) -> &mut u32 {
        match color {
            Color::White => &mut self.white_seconds,
            Color::Black => &mut self.black_seconds,
        }
    }

    /// Take one second off `color`
    pub fn tick(&mut self, color: Color) -> ClockTick {
        let remaining = self.remaining_mut(color);
        *remaining = remaining.saturating_sub(1);
        if self.is_flagged(color) {
            ClockTick::Expired
        } else {
            ClockTick::Running {
                remaining: self.remaining(color),
            }
        }
    }

    /// Add the increment to the side that just moved
    pub fn apply_increment(&mut self, color: Color) {
        let increment = self.increment_seconds;
        if increment > 0 {
            let remaining = self.remaining_mut(color);
            *remaining = remaining.saturating_add(increment);
        }
    }

    /// True once `color` has run out of time
    pub fn is_flagged(&self, color: Color) -> bool {
        self.remaining(color) == 0
    }
}
