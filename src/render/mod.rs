//! Rendering pipeline.

pub mod renderer;

pub use renderer::{draw_rows, render_frame, welcome_message};
