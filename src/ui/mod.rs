//! Terminal front end
//!
//! Draws [`GameSnapshot`](crate::game::GameSnapshot)s as text and parses
//! the commands typed at the prompt. It only reads snapshots; all state
//! changes go through the [`GameRunner`](crate::game::GameRunner).

pub mod terminal;

pub use terminal::{format_time, parse_command, parse_square, render, Command, CommandError, Screen, HELP};
