//! Arcade Chess - play against the computer
//!
//! - [`core`] - settings, persistence, logging
//! - [`game`] - controller, clocks, scoring and the async computer opponent
//! - [`ui`] - terminal rendering and command parsing
//!
//! The chess rules, evaluation and search live in the `chess_engine` crate.

pub mod core;
pub mod game;
pub mod ui;
