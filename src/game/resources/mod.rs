//! Per-game state pieces owned by a session
//!
//! - [`CapturedPieces`] - pieces taken by each side
//! - [`MoveHistory`] - applied moves in play order
//! - [`GameClock`] - per-side countdowns with optional increment
//! - [`Selection`] - the human's selected square and its legal targets
//!
//! All of these are plain data; the controller decides when they change.

pub mod captured;
pub mod clock;
pub mod history;
pub mod selection;


pub use captured::CapturedPieces;
pub use clock::{ClockTick, GameClock};
pub use history::{MoveHistory, MoveRecord};
pub use selection::Selection;
