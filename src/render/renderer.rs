//! Frame composition.
//!
//! A frame is built in full before anything is written: cursor hidden, rows
//! drawn top to bottom, cursor placed and shown again.

use crate::core::output::{RenderBuffer, TerminalCmd};
use crate::editor::EditorState;

/// Glyph drawn on screen lines past the end of the document.
pub const FILLER: &[u8] = b"~";

pub fn welcome_message() -> String {
    format!("Kilo editor -- version {}", env!("CARGO_PKG_VERSION"))
}

/// Append every screen line for `state` to `out`.
pub fn draw_rows(state: &EditorState, out: &mut RenderBuffer) {
    let rows = usize::from(state.screen_rows());
    let cols = usize::from(state.screen_cols());
    let banner_row = rows / 3;

    for y in 0..rows {
        match state.row() {
            Some(row) if y == 0 => out.append(row.truncated(cols)),
            Some(_) => out.append(FILLER),
            None if y == banner_row => draw_welcome(cols, out),
            None => out.append(FILLER),
        }

        out.push(TerminalCmd::ClearLine);
        if y + 1 < rows {
            out.append(b"\r\n");
        }
    }
}

fn draw_welcome(cols: usize, out: &mut RenderBuffer) {
    let welcome = welcome_message();
    let shown = &welcome.as_bytes()[..welcome.len().min(cols)];

    let mut padding = (cols - shown.len()) / 2;
    if padding > 0 {
        out.append(FILLER);
        padding -= 1;
    }
    out.append(" ".repeat(padding).as_bytes());
    out.append(shown);
}

/// Build one complete frame.
pub fn render_frame(state: &EditorState) -> RenderBuffer {
    let rows = usize::from(state.screen_rows());
    let cols = usize::from(state.screen_cols());
    let mut out = RenderBuffer::with_capacity(rows * (cols + 5) + 32);

    out.push(TerminalCmd::HideCursor);
    out.push(TerminalCmd::CursorHome);
    draw_rows(state, &mut out);
    out.push(TerminalCmd::MoveCursor {
        row: state.cy(),
        col: state.cx(),
    });
    out.push(TerminalCmd::ShowCursor);
    out
}
