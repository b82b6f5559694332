//! Core module - settings, persistence, logging and shared errors
//!
//! Infrastructure shared by the game layer and the terminal binary. Nothing
//! in here knows about boards or moves beyond the difficulty a game starts
//! with.
//!
//! # Contents
//!
//! - [`GameSettings`] - user preferences (time control, increment, thinking delay)
//! - [`load_settings`] / [`save_settings`] - JSON persistence in the platform
//!   config directory
//! - [`init_logging`] - `tracing` subscriber setup for the binary
//! - [`CoreError`] - errors from the above

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use logging::init_logging;
pub use settings::{GameSettings, ThinkingDelay, TimeControl};
pub use settings_persistence::{load_settings, save_settings, settings_path};
