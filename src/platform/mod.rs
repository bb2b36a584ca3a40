//! Platform-specific terminal integrations.

pub mod process_terminal;
pub mod signals;
pub mod terminal_mode;

#[cfg(test)]
pub(crate) mod test_pty;

pub use process_terminal::ProcessTerminal;
pub use signals::ShutdownSignals;
pub use terminal_mode::{install_panic_hook, PanicHookGuard, TerminalMode};
