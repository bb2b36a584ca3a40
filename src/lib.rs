//! Minimal raw-mode terminal editor.
//!
//! Invariant: single output gate per frame. Every frame reaches the terminal
//! through one `core::output::RenderBuffer::flush(..)`.
//!
//! # Public API Overview
//! - Put the controlling terminal into raw mode with [`TerminalMode`]; the
//!   original settings are restored on drop, on panic, or via `disable`.
//! - Decode input bytes into [`Key`] values with [`read_key`].
//! - Discover the viewport with [`window_size`].
//! - Drive an [`EditorState`] through [`run`], which renders one frame per key.
//!
//! Everything above the platform layer talks to the device through the
//! [`Terminal`] trait, so it runs unchanged against an in-memory terminal.

pub mod config;
pub mod error;
pub mod logging;

pub mod core;
pub mod editor;
pub mod platform;
pub mod render;
pub mod runtime;

/// Fatal error type.
pub use crate::error::{Error, Result};

/// Key decoding.
pub use crate::core::input::{ctrl_key, read_key, Key};

/// Terminal interface, output buffering and geometry.
pub use crate::core::geometry::window_size;
pub use crate::core::output::{RenderBuffer, TerminalCmd};
pub use crate::core::terminal::{Terminal, WindowSize};

/// Editor model.
pub use crate::editor::{load_first_line, EditorState, Row, Status};

/// Process-backed terminal and raw-mode lifecycle.
pub use crate::platform::{ProcessTerminal, ShutdownSignals, TerminalMode};

/// Frame loop.
pub use crate::runtime::{clear_screen, refresh_screen, run};
