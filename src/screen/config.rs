//! Configuration for a [`Screen`](super::Screen).

use super::TabBehaviour;
use crate::buffer::Cell;
use crate::geometry::TerminalPosition;

/// Configuration for the Screen.
#[derive(Debug, Clone)]
pub struct ScreenConfig {
    /// Cell used for the initial contents, `clear()` and area exposed by a resize.
    pub default_cell: Cell,
    /// Initial tab expansion policy.
    pub tab_behaviour: TabBehaviour,
    /// Initial cursor position (`None` = hidden).
    pub cursor_position: Option<TerminalPosition>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            default_cell: Cell::EMPTY,
            tab_behaviour: TabBehaviour::AlignToColumn4,
            cursor_position: Some(TerminalPosition::TOP_LEFT),
        }
    }
}

impl ScreenConfig {
    /// Set the default cell.
    #[must_use]
    pub const fn with_default_cell(mut self, cell: Cell) -> Self {
        self.default_cell = cell;
        self
    }

    /// Set the tab behaviour.
    #[must_use]
    pub const fn with_tab_behaviour(mut self, tab_behaviour: TabBehaviour) -> Self {
        self.tab_behaviour = tab_behaviour;
        self
    }

    /// Set the initial cursor position, or hide it with `None`.
    #[must_use]
    pub const fn with_cursor_position(mut self, position: Option<TerminalPosition>) -> Self {
        self.cursor_position = position;
        self
    }
}
