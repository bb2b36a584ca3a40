//! Shell I/O errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write output: {0}")]
    Write(#[source] std::io::Error),
}
