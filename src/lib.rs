//! # Screenbuf
//!
//! A double-buffered screen model for text terminals.
//!
//! Screenbuf keeps the authoritative state a terminal painter renders from.
//! It does not paint anything itself.
//!
//! ## Core Concepts
//!
//! - **Front and back buffers**: writes land in the back buffer; the front
//!   buffer holds what was last rendered
//! - **Cell rules on every write**: tabs expand to spaces, double-width glyphs
//!   reserve their second column, half-overwritten glyphs are blanked
//! - **Deferred resizes**: size changes from any thread are parked in a single
//!   slot and committed by the render loop between frames
//! - **Text graphics**: strings, lines and rectangles drawn through the same
//!   write path
//!
//! ## Example
//!
//! ```
//! use screenbuf::{Cell, Screen, TerminalSize, TextGraphics};
//!
//! let mut screen = Screen::new(TerminalSize::new(80, 24));
//! screen.set_character(0, 0, Cell::new('日'));
//! assert_eq!(screen.back_character(1, 0), Some(Cell::new('日')));
//!
//! screen.text_graphics().put_string(0, 1, "hello\tworld");
//!
//! screen.add_resize_request(TerminalSize::new(100, 30));
//! assert_eq!(screen.do_resize_if_necessary(), Some(TerminalSize::new(100, 30)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod screen;
pub mod terminal;

// Re-exports for convenience
pub use buffer::{Buffer, Cell, Color, Modifiers, Rgb};
pub use error::{Result, ScreenError};
pub use geometry::{TerminalPosition, TerminalSize};
pub use graphics::{Pen, ScreenGraphics, TextGraphics};
pub use screen::{ResizeHandle, Screen, ScreenConfig, TabBehaviour};
pub use terminal::{ResizeWatcher, WatcherConfig};
