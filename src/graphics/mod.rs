//! Graphics module: Drawing on top of a screen.
//!
//! [`TextGraphics`] is the generic surface; [`ScreenGraphics`] is the
//! implementation that writes into a [`Screen`](crate::Screen).

mod screen_graphics;
mod text_graphics;

pub use screen_graphics::ScreenGraphics;
pub use text_graphics::{Pen, TextGraphics};
