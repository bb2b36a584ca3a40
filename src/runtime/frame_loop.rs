//! The editor's frame loop: render, read one key, update, repeat.

use crate::core::input::read_key;
use crate::core::output::{RenderBuffer, TerminalCmd};
use crate::core::terminal::Terminal;
use crate::editor::{EditorState, Status};
use crate::error::{Error, Result};
use crate::render::renderer::render_frame;

/// Render the current state as one frame in a single write.
pub fn refresh_screen<T: Terminal>(term: &mut T, state: &EditorState) -> Result<()> {
    render_frame(state).flush(term).map_err(Error::Write)
}

/// Clear the display and home the cursor in a single write.
pub fn clear_screen<T: Terminal>(term: &mut T) -> std::io::Result<()> {
    let mut out = RenderBuffer::new();
    out.extend([TerminalCmd::ClearScreen, TerminalCmd::CursorHome]);
    out.flush(term)
}

/// Run until the quit chord is pressed.
///
/// On quit the screen is cleared once and the function returns; nothing is
/// rendered afterwards. Errors are fatal and leave the screen as-is for the
/// caller to reset.
pub fn run<T: Terminal>(term: &mut T, state: &mut EditorState) -> Result<()> {
    tracing::info!(
        rows = state.screen_rows(),
        cols = state.screen_cols(),
        loaded = state.row().is_some(),
        "editor started"
    );

    loop {
        refresh_screen(term, state)?;
        let key = read_key(term)?;
        tracing::trace!(?key, "key");

        if state.process_key(key) == Status::Quitting {
            clear_screen(term).map_err(Error::Write)?;
            tracing::info!("editor quit");
            return Ok(());
        }
    }
}
