//! Logging setup
//!
//! The binary logs through `tracing` with a `fmt` subscriber on stderr, so
//! log lines never interleave with the board drawn on stdout. `RUST_LOG`
//! overrides the default filter, e.g. `RUST_LOG=arcade_chess=debug`.

use crate::core::error::{CoreError, CoreResult};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "arcade_chess=info";

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(verbose: bool) -> CoreResult<()> {
    let fallback = if verbose {
        "arcade_chess=debug"
    } else {
        DEFAULT_LOG_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CoreError::Logging {
            message: e.to_string(),
        })
}
