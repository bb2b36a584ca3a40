//! Runtime orchestration.

pub mod frame_loop;

pub use frame_loop::{clear_screen, refresh_screen, run};
