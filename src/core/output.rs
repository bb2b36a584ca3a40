//! Typed terminal output commands and the per-frame render buffer.
//!
//! Invariant: a frame reaches the terminal through exactly one
//! `RenderBuffer::flush(..)`, so partial frames are never observable.

use crate::core::terminal::Terminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalCmd {
    /// Erase the whole display.
    ClearScreen,
    /// Erase from the cursor to the end of the line.
    ClearLine,
    /// Move the cursor to the top-left cell.
    CursorHome,
    /// Move the cursor to a zero-based `(row, col)` cell.
    MoveCursor { row: u16, col: u16 },
    /// Push the cursor as far right and down as the terminal allows.
    CursorToBottomRight,
    /// Device status report; the reply arrives on stdin as `ESC [ rows ; cols R`.
    RequestCursorPosition,

    /// Cursor visibility.
    HideCursor,
    ShowCursor,
}

impl TerminalCmd {
    /// Append this command's escape sequence to `out`.
    pub fn encode(self, out: &mut Vec<u8>) {
        match self {
            TerminalCmd::ClearScreen => out.extend_from_slice(b"\x1b[2J"),
            TerminalCmd::ClearLine => out.extend_from_slice(b"\x1b[K"),
            TerminalCmd::CursorHome => out.extend_from_slice(b"\x1b[H"),
            TerminalCmd::MoveCursor { row, col } => {
                // VT100 coordinates are one-based.
                let seq = format!("\x1b[{};{}H", u32::from(row) + 1, u32::from(col) + 1);
                out.extend_from_slice(seq.as_bytes());
            }
            TerminalCmd::CursorToBottomRight => out.extend_from_slice(b"\x1b[999C\x1b[999B"),
            TerminalCmd::RequestCursorPosition => out.extend_from_slice(b"\x1b[6n"),
            TerminalCmd::HideCursor => out.extend_from_slice(b"\x1b[?25l"),
            TerminalCmd::ShowCursor => out.extend_from_slice(b"\x1b[?25h"),
        }
    }
}

/// Append-only byte accumulator for one frame of output.
#[derive(Debug, Default)]
pub struct RenderBuffer {
    bytes: Vec<u8>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
        }
    }

    pub fn append(&mut self, data: &[u8]) {
        self.bytes.extend_from_slice(data);
    }

    pub fn push(&mut self, cmd: TerminalCmd) {
        cmd.encode(&mut self.bytes);
    }

    pub fn extend<I>(&mut self, cmds: I)
    where
        I: IntoIterator<Item = TerminalCmd>,
    {
        for cmd in cmds {
            self.push(cmd);
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Write the accumulated bytes in a single call and reset the buffer.
    pub fn flush<T: Terminal>(&mut self, term: &mut T) -> std::io::Result<()> {
        if self.bytes.is_empty() {
            return Ok(());
        }
        let result = term.write(&self.bytes);
        self.bytes.clear();
        result
    }
}
