//! Terminal device interface.

/// Viewport dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub rows: u16,
    pub cols: u16,
}

impl WindowSize {
    pub const fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }
}

/// Minimal byte-level terminal interface for the editor.
///
/// Implementations are expected to be in raw mode while the editor runs: reads
/// return after at most one device timeout, and writes are not post-processed.
pub trait Terminal {
    /// Read a single input byte.
    ///
    /// `Ok(None)` means the device timeout elapsed with no input; callers retry.
    fn read_byte(&mut self) -> std::io::Result<Option<u8>>;

    /// Write all of `data` to the output device.
    fn write(&mut self, data: &[u8]) -> std::io::Result<()>;

    /// Direct dimension query. `None` when the device can't answer or reports
    /// zero columns.
    fn window_size(&self) -> Option<WindowSize>;
}
