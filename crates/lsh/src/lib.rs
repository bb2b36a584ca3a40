//! Line shell.
//!
//! Reads a line, splits it on whitespace, then either runs one of the builtins
//! (`cd`, `help`, `exit`) or launches the named program and waits for it.
//! There are no pipes, redirections or background jobs.

pub mod builtins;
pub mod error;
pub mod launch;
pub mod line;
pub mod logging;
pub mod shell;

pub use crate::error::ShellError;
pub use crate::line::{read_line, split_line};
pub use crate::shell::Shell;

/// Whether the read-eval loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}
