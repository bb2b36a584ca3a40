//! Editor document and cursor model.

pub mod row;
pub mod state;

pub use row::{load_first_line, Row};
pub use state::{EditorState, Status, QUIT_KEY};
