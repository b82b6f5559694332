//! Error types for core module
//!
//! Covers settings persistence and logging setup.

use thiserror::Error;

/// Errors that can occur in the core module
#[derive(Error, Debug)]
pub enum CoreError {
    /// Settings file I/O error
    #[error("Settings I/O error: {0}")]
    SettingsIo(#[from] std::io::Error),

    /// Settings serialization/deserialization error
    #[error("Settings serialization error: {0}")]
    SettingsSerialization(#[from] serde_json::Error),

    /// Settings parsed but hold values the game cannot use
    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },

    /// Global tracing subscriber could not be installed
    #[error("Logging initialization failed: {message}")]
    Logging { message: String },
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;
