//! Cursor and viewport state, mutated by key handling.

use crate::core::input::Key;
use crate::core::terminal::WindowSize;
use crate::editor::row::Row;

/// Key that ends the session.
pub const QUIT_KEY: u8 = b'q';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Quitting,
}

/// Editor state for one session.
///
/// Invariant: `cx < screen_cols` and `cy < screen_rows`. The viewport is fixed
/// at construction.
#[derive(Debug, Clone)]
pub struct EditorState {
    cx: u16,
    cy: u16,
    screen_rows: u16,
    screen_cols: u16,
    row: Option<Row>,
}

impl EditorState {
    pub fn new(size: WindowSize) -> Self {
        Self {
            cx: 0,
            cy: 0,
            screen_rows: size.rows.max(1),
            screen_cols: size.cols.max(1),
            row: None,
        }
    }

    pub fn with_row(mut self, row: Option<Row>) -> Self {
        self.row = row;
        self
    }

    pub fn cx(&self) -> u16 {
        self.cx
    }

    pub fn cy(&self) -> u16 {
        self.cy
    }

    pub fn screen_rows(&self) -> u16 {
        self.screen_rows
    }

    pub fn screen_cols(&self) -> u16 {
        self.screen_cols
    }

    pub fn row(&self) -> Option<&Row> {
        self.row.as_ref()
    }

    /// Move the cursor one cell, clamped to the viewport.
    pub fn move_cursor(&mut self, key: Key) {
        match key {
            Key::ArrowLeft => self.cx = self.cx.saturating_sub(1),
            Key::ArrowRight => {
                if self.cx + 1 < self.screen_cols {
                    self.cx += 1;
                }
            }
            Key::ArrowUp => self.cy = self.cy.saturating_sub(1),
            Key::ArrowDown => {
                if self.cy + 1 < self.screen_rows {
                    self.cy += 1;
                }
            }
            _ => {}
        }
    }

    /// Apply one decoded key.
    pub fn process_key(&mut self, key: Key) -> Status {
        match key {
            key if key.is_ctrl(QUIT_KEY) => return Status::Quitting,
            Key::Home => self.cx = 0,
            Key::End => self.cx = self.screen_cols - 1,
            Key::PageUp | Key::PageDown => {
                let arrow = if key == Key::PageUp {
                    Key::ArrowUp
                } else {
                    Key::ArrowDown
                };
                for _ in 0..self.screen_rows {
                    self.move_cursor(arrow);
                }
            }
            Key::ArrowUp | Key::ArrowDown | Key::ArrowLeft | Key::ArrowRight => {
                self.move_cursor(key)
            }
            _ => {}
        }
        Status::Running
    }
}
