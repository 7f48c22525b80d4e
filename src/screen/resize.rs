//! Pending-resize slot shared between the render loop and resize producers.
//!
//! Size-change notifications arrive on whatever thread notices them. They
//! are parked here as a single value and only applied when the render loop
//! asks for it, so buffer geometry never changes mid-frame.

use crate::geometry::TerminalSize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A cloneable handle for requesting a screen resize from any thread.
///
/// All clones share one slot. A request replaces whatever request is still
/// pending; only the latest one is ever committed.
#[derive(Clone, Default)]
pub struct ResizeHandle {
    slot: Arc<Mutex<Option<TerminalSize>>>,
}

impl ResizeHandle {
    /// Create a handle with nothing pending.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `size` as the latest pending resize.
    pub fn request(&self, size: TerminalSize) {
        if let Some(replaced) = self.lock().replace(size) {
            log::trace!("resize request {replaced:?} superseded by {size:?}");
        }
    }

    /// Look at the pending resize without consuming it.
    pub fn pending(&self) -> Option<TerminalSize> {
        *self.lock()
    }

    /// Take the pending resize, leaving the slot empty.
    pub(crate) fn take(&self) -> Option<TerminalSize> {
        self.lock().take()
    }

    // The slot only ever holds a `Copy` value, so a panic while it was
    // locked cannot have left it half-written.
    fn lock(&self) -> MutexGuard<'_, Option<TerminalSize>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for ResizeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeHandle")
            .field("pending", &self.pending())
            .finish()
    }
}
