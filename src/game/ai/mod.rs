//! Computer opponent
//!
//! The computer always plays Black. Strength is a fixed search depth per
//! [`Difficulty`]; the search itself runs off the async runtime in
//! [`task::think`], after an artificial delay so replies never look instant.
//!
//! # Flow
//!
//! 1. The controller hands out a [`ThinkRequest`] carrying a board copy and
//!    a [`ThinkTicket`]
//! 2. [`task::think`] sleeps, then searches on a blocking thread
//! 3. The runner passes the [`AiMove`] back to the controller, which applies
//!    it only if the ticket is still the pending one

pub mod difficulty;
pub mod task;

pub use difficulty::Difficulty;
pub use task::{compute_ai_move, think, AiMove, ThinkRequest, ThinkTicket};
