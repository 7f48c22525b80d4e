//! Error types.
//!
//! Buffer, cursor and resize operations never fail: out-of-range input is
//! clipped or ignored. Errors only come from talking to the OS.

use std::io;
use thiserror::Error;

/// Errors raised at the terminal boundary.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// The size of the attached terminal could not be read.
    #[error("failed to query terminal size")]
    TerminalSize(#[source] io::Error),

    /// The resize watcher thread could not be started.
    #[error("failed to spawn resize watcher thread")]
    SpawnWatcher(#[source] io::Error),
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, ScreenError>;
