//! Viewport size discovery.
//!
//! The direct device query is preferred. When it is unavailable the cursor is
//! pushed to the bottom-right corner and its position is read back through a
//! device status report.

use crate::core::input::ESC;
use crate::core::output::{RenderBuffer, TerminalCmd};
use crate::core::terminal::{Terminal, WindowSize};
use crate::error::{Error, Result};

/// Upper bound on the cursor position report, terminator included.
pub const CURSOR_REPORT_LIMIT: usize = 32;

/// Determine the viewport size, falling back to a cursor position probe.
pub fn window_size<T: Terminal>(term: &mut T) -> Result<WindowSize> {
    if let Some(size) = term.window_size() {
        tracing::debug!(rows = size.rows, cols = size.cols, "window size from device query");
        return Ok(size);
    }

    tracing::debug!("device window size unavailable, probing cursor position");
    let mut out = RenderBuffer::new();
    out.push(TerminalCmd::CursorToBottomRight);
    out.flush(term).map_err(Error::Write)?;
    cursor_position(term)
}

/// Ask the terminal where the cursor is and parse the `ESC [ rows ; cols R`
/// reply.
pub fn cursor_position<T: Terminal>(term: &mut T) -> Result<WindowSize> {
    let mut out = RenderBuffer::new();
    out.push(TerminalCmd::RequestCursorPosition);
    out.flush(term).map_err(Error::Write)?;

    let mut reply = [0u8; CURSOR_REPORT_LIMIT];
    let mut len = 0;
    let mut terminated = false;
    while len < CURSOR_REPORT_LIMIT {
        let Some(byte) = term.read_byte().map_err(Error::Read)? else {
            break;
        };
        if byte == b'R' {
            terminated = true;
            break;
        }
        reply[len] = byte;
        len += 1;
    }

    if !terminated {
        return Err(Error::WindowSize {
            reason: "cursor position report not terminated",
        });
    }
    parse_cursor_report(&reply[..len])
}

/// Parse a cursor position report body (`ESC [ rows ; cols`, without the
/// trailing `R`).
pub fn parse_cursor_report(body: &[u8]) -> Result<WindowSize> {
    let malformed = Error::WindowSize {
        reason: "cursor position report malformed",
    };

    let Some(params) = body.strip_prefix(&[ESC, b'[']) else {
        return Err(malformed);
    };
    let Ok(params) = std::str::from_utf8(params) else {
        return Err(malformed);
    };
    let Some((rows, cols)) = params.split_once(';') else {
        return Err(malformed);
    };

    let parse = |value: &str| -> Option<u16> {
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        value.parse::<u16>().ok().filter(|n| *n > 0)
    };

    match (parse(rows), parse(cols)) {
        (Some(rows), Some(cols)) => Ok(WindowSize::new(rows, cols)),
        _ => Err(malformed),
    }
}
