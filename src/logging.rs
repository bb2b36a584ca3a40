//! File-only `tracing` sink.
//!
//! The terminal is owned by the editor while raw mode is active, so log events
//! never go to stdout or stderr. Without `KILO_LOG` no subscriber is installed
//! and every `tracing` macro is a no-op.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::EnvConfig;

const DEFAULT_LEVEL: &str = "debug";

/// Install the global subscriber when `config.log_file` is set.
///
/// Returns `Ok(false)` when logging is disabled or a subscriber was already
/// installed by the embedding process.
pub fn init(config: &EnvConfig) -> std::io::Result<bool> {
    let Some(path) = config.log_file.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let directive = config.log_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok();
    Ok(installed)
}
