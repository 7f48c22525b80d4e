//! Buffer module: Core data structures for the double-buffered screen.
//!
//! This module contains:
//! - [`Cell`]: The atomic unit of display
//! - [`Buffer`]: A grid of cells, used for both the front and back buffer
//! - [`Color`] and [`Rgb`]: Colour representation
//! - [`Modifiers`]: Text style bitflags

mod cell;
#[allow(clippy::module_inception)]
mod buffer;

pub use cell::{is_double_width, Cell, Color, Modifiers, Rgb};
pub use buffer::Buffer;
