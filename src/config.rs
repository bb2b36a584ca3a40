//! Environment configuration.
//!
//! Only diagnostics are configurable; editor behavior has no knobs.

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// `KILO_LOG`: file that receives `tracing` output.
    pub log_file: Option<PathBuf>,
    /// `KILO_LOG_LEVEL`: `EnvFilter` directive for the log file.
    pub log_level: Option<String>,
    /// `KILO_WRITE_LOG`: file that mirrors every byte written to the terminal.
    pub write_log: Option<PathBuf>,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            log_file: env_string_opt("KILO_LOG").map(PathBuf::from),
            log_level: env_string_opt("KILO_LOG_LEVEL"),
            write_log: env_string_opt("KILO_WRITE_LOG").map(PathBuf::from),
        }
    }
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}
