//! Optional `tracing` sink for the shell.
//!
//! Child programs share the shell's stdout and stderr, so events only go to
//! the file named by `LSH_LOG`. Without it no subscriber is installed.

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "LSH_LOG";
pub const LOG_LEVEL_ENV: &str = "LSH_LOG_LEVEL";

const DEFAULT_LEVEL: &str = "debug";

/// Log destination and filter, read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub file: Option<PathBuf>,
    pub level: Option<String>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_vars(std::env::var_os(LOG_ENV), std::env::var_os(LOG_LEVEL_ENV))
    }

    fn from_vars(file: Option<OsString>, level: Option<OsString>) -> Self {
        Self {
            file: file.filter(|value| !value.is_empty()).map(PathBuf::from),
            level: level
                .map(|value| value.to_string_lossy().trim().to_string())
                .filter(|value| !value.is_empty()),
        }
    }
}

/// Install the global subscriber when a log file is configured.
///
/// Returns `Ok(false)` when logging is off or a subscriber already exists.
pub fn init(config: &LogConfig) -> std::io::Result<bool> {
    let Some(path) = config.file.as_ref() else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let directive = config.level.as_deref().unwrap_or(DEFAULT_LEVEL);
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .is_ok();
    Ok(installed)
}
