//! Geometry module: positions and sizes on the terminal grid.
//!
//! Both are small `Copy` values measured in character cells, with the
//! origin at the top-left corner.

mod position;
mod size;

pub use position::TerminalPosition;
pub use size::TerminalSize;
