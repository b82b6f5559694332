//! Single-player game against the computer
//!
//! The human always plays White and the computer always plays Black. The
//! rules, evaluation and search come from the `chess_engine` crate; this
//! module adds the game around them: clocks, captures, score, the state
//! machine and the asynchronous computer turn.
//!
//! # Module Organization
//!
//! - `controller` - [`GameController`], the synchronous state machine
//! - `runner` - [`GameRunner`], tokio tasks for the clock and the computer
//! - `session` - [`GameSession`], the state of one game
//! - `resources` - captures, history, clocks and selection
//! - `ai` - difficulty table and background search
//! - `status` / `snapshot` - what front ends read
//!
//! # Scoring
//!
//! The human earns [`CAPTURE_SCORE_MULTIPLIER`] points per pawn of material
//! captured and [`WIN_BONUS`] for leaving the computer without a legal move.

pub mod ai;
pub mod controller;
pub mod error;
pub mod resources;
pub mod runner;
pub mod session;
pub mod snapshot;
pub mod status;

pub use ai::Difficulty;
pub use controller::{GameController, SelectionOutcome, ThinkingOutcome, TickOutcome};
pub use error::{GameError, GameResult};
pub use runner::GameRunner;
pub use session::GameSession;
pub use snapshot::GameSnapshot;
pub use status::GameStatus;

use chess_engine::Color;

/// Side played from the keyboard
pub const HUMAN_COLOR: Color = Color::White;

/// Side played by the search
pub const COMPUTER_COLOR: Color = Color::Black;

/// Score per pawn of material the human captures
pub const CAPTURE_SCORE_MULTIPLIER: u32 = 10;

/// Score for winning the game
pub const WIN_BONUS: u32 = 1000;
