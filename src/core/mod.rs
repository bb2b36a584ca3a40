//! Terminal-independent editor core: key decoding, output buffering, geometry.

pub mod geometry;
pub mod input;
pub mod output;
pub mod terminal;
