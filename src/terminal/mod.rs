//! Terminal module: The edge where the screen meets the real terminal.
//!
//! Painting is left to the caller. This module only reads the terminal's
//! size and turns its size-change notifications into resize requests.

mod watcher;

pub use watcher::{ResizeWatcher, WatcherConfig};

use crate::geometry::TerminalSize;
use std::io;

/// Read the size of the terminal attached to this process.
///
/// # Errors
///
/// Returns an error if no terminal is attached or the size cannot be read.
pub fn query_size() -> io::Result<TerminalSize> {
    crossterm::terminal::size().map(TerminalSize::from)
}
