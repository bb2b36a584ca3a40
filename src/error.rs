//! Fatal error taxonomy.
//!
//! Every variant is terminal for the process: `main` restores the terminal,
//! resets the screen and exits with status 1. Read timeouts and malformed
//! escape sequences are not errors and never reach this type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("tcgetattr: {0}")]
    GetAttr(#[source] std::io::Error),

    #[error("tcsetattr: {0}")]
    SetAttr(#[source] std::io::Error),

    #[error("read: {0}")]
    Read(#[source] std::io::Error),

    #[error("write: {0}")]
    Write(#[source] std::io::Error),

    #[error("sigaction: {0}")]
    Signal(#[source] std::io::Error),

    #[error("getWindowSize: {reason}")]
    WindowSize { reason: &'static str },

    #[error("fopen {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("getline {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
