//! Screen: Front/back buffers plus cursor, tab and resize state.
//!
//! Writes only ever land in the back buffer. The front buffer holds what
//! the painter last put on the terminal and is only touched by a committed
//! resize or an explicit [`Screen::sync_front_buffer`].

use super::{ResizeHandle, ScreenConfig, TabBehaviour};
use crate::buffer::{Buffer, Cell};
use crate::error::{Result, ScreenError};
use crate::geometry::{TerminalPosition, TerminalSize};
use crate::graphics::ScreenGraphics;

/// The authoritative screen state a painter renders from.
///
/// Both buffers always have the size reported by [`Screen::terminal_size`].
/// Geometry only changes in [`Screen::do_resize_if_necessary`], which takes
/// `&mut self`, so no read or write can observe a half-applied resize.
pub struct Screen {
    /// Last rendered state.
    front: Buffer,
    /// Desired next state.
    back: Buffer,
    /// Fill for clears and newly exposed area.
    default_cell: Cell,
    /// `None` = hidden.
    cursor_position: Option<TerminalPosition>,
    tab_behaviour: TabBehaviour,
    /// Committed size of both buffers.
    terminal_size: TerminalSize,
    /// Pending resize, shared with producers on other threads.
    resize: ResizeHandle,
}

impl Screen {
    /// Create a blank screen filled with [`Cell::EMPTY`].
    pub fn new(size: TerminalSize) -> Self {
        Self::with_config(size, ScreenConfig::default())
    }

    /// Create a screen whose initial contents, clears and newly exposed
    /// areas use `default_cell`.
    pub fn with_default_cell(size: TerminalSize, default_cell: Cell) -> Self {
        Self::with_config(size, ScreenConfig::default().with_default_cell(default_cell))
    }

    /// Create a screen with custom configuration.
    ///
    /// A configured cursor position outside `size` starts the cursor hidden.
    pub fn with_config(size: TerminalSize, config: ScreenConfig) -> Self {
        let mut screen = Self {
            front: Buffer::new(size, config.default_cell),
            back: Buffer::new(size, config.default_cell),
            default_cell: config.default_cell,
            cursor_position: None,
            tab_behaviour: config.tab_behaviour,
            terminal_size: size,
            resize: ResizeHandle::new(),
        };
        screen.set_cursor_position(config.cursor_position);
        screen
    }

    /// Create a screen sized to the terminal attached to this process.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal size cannot be queried.
    pub fn from_terminal(config: ScreenConfig) -> Result<Self> {
        let size = crate::terminal::query_size().map_err(ScreenError::TerminalSize)?;
        log::debug!("screen created at terminal size {size:?}");
        Ok(Self::with_config(size, config))
    }

    /// Where the cursor will be shown after the next paint, or `None` if
    /// it is hidden.
    #[inline]
    pub const fn cursor_position(&self) -> Option<TerminalPosition> {
        self.cursor_position
    }

    /// Move or hide the cursor.
    ///
    /// `None` hides it. A position outside the current size is ignored and
    /// the previous cursor state is kept.
    pub fn set_cursor_position(&mut self, position: impl Into<Option<TerminalPosition>>) {
        match position.into() {
            None => self.cursor_position = None,
            Some(position) if self.terminal_size.contains_position(position) => {
                self.cursor_position = Some(position);
            }
            Some(position) => {
                log::trace!(
                    "cursor position {position:?} outside {:?}, ignored",
                    self.terminal_size
                );
            }
        }
    }

    /// Current tab expansion policy.
    #[inline]
    pub const fn tab_behaviour(&self) -> TabBehaviour {
        self.tab_behaviour
    }

    /// Change the tab expansion policy. `None` keeps the current one.
    pub fn set_tab_behaviour(&mut self, tab_behaviour: impl Into<Option<TabBehaviour>>) {
        if let Some(tab_behaviour) = tab_behaviour.into() {
            self.tab_behaviour = tab_behaviour;
        }
    }

    /// Write a cell to the back buffer.
    ///
    /// Out-of-bounds coordinates are clipped. On top of the plain write:
    /// - a tab becomes as many space cells (same style) as the tab policy
    ///   gives for `column`;
    /// - a double-width glyph also writes a space cell at `column + 1`;
    /// - a double-width glyph at `column - 1` is blanked, since its right
    ///   half has just been overwritten.
    pub fn set_character(&mut self, column: u16, row: u16, cell: Cell) {
        let mut cell = cell;

        if cell.ch() == '\t' {
            cell = cell.with_char(' ');
            for offset in 0..self.tab_behaviour.columns_at(column) {
                let Some(col) = column.checked_add(offset) else {
                    break;
                };
                self.back.set(col, row, cell);
            }
        } else {
            self.back.set(column, row, cell);
        }

        if cell.is_double_width() {
            if let Some(padding) = column.checked_add(1) {
                self.back.set(padding, row, cell.with_char(' '));
            }
        }

        // Only the immediate left neighbour is checked.
        if let Some(left) = column.checked_sub(1) {
            if let Some(wide) = self.back.get(left, row).copied().filter(Cell::is_double_width) {
                self.back.set(left, row, wide.with_char(' '));
            }
        }
    }

    /// [`Screen::set_character`] at a position.
    #[inline]
    pub fn set_character_at(&mut self, position: TerminalPosition, cell: Cell) {
        self.set_character(position.column, position.row, cell);
    }

    /// Read a cell of the front buffer.
    ///
    /// Querying the padding column of a double-width glyph returns the
    /// glyph itself. `None` if the position is outside the buffer.
    pub fn front_character(&self, column: u16, row: u16) -> Option<Cell> {
        character_from(&self.front, column, row)
    }

    /// [`Screen::front_character`] at a position.
    #[inline]
    pub fn front_character_at(&self, position: TerminalPosition) -> Option<Cell> {
        self.front_character(position.column, position.row)
    }

    /// Read a cell of the back buffer, with the same double-width lookback
    /// as [`Screen::front_character`].
    pub fn back_character(&self, column: u16, row: u16) -> Option<Cell> {
        character_from(&self.back, column, row)
    }

    /// [`Screen::back_character`] at a position.
    #[inline]
    pub fn back_character_at(&self, position: TerminalPosition) -> Option<Cell> {
        self.back_character(position.column, position.row)
    }

    /// Fill the back buffer with the default cell. The front buffer is left alone.
    pub fn clear(&mut self) {
        self.back.fill(self.default_cell);
    }

    /// Record a pending resize. Replaces any request not yet committed.
    pub fn add_resize_request(&self, size: TerminalSize) {
        self.resize.request(size);
    }

    /// The resize that the next [`Screen::do_resize_if_necessary`] would commit.
    pub fn pending_resize(&self) -> Option<TerminalSize> {
        self.resize.pending()
    }

    /// A handle other threads can use to request resizes.
    pub fn resize_handle(&self) -> ResizeHandle {
        self.resize.clone()
    }

    /// Commit the pending resize, if there is one.
    ///
    /// Both buffers are rebuilt at the new size, keeping the overlapping
    /// content and filling new area with the default cell. Returns the new
    /// size, or `None` when nothing was pending. The cursor is not moved.
    ///
    /// Painters call this before every frame.
    pub fn do_resize_if_necessary(&mut self) -> Option<TerminalSize> {
        let size = self.resize.take()?;

        self.back = self.back.resized(size, self.default_cell);
        self.front = self.front.resized(size, self.default_cell);
        log::debug!("screen resized {:?} -> {size:?}", self.terminal_size);
        self.terminal_size = size;

        Some(size)
    }

    /// Committed size of the screen.
    #[inline]
    pub const fn terminal_size(&self) -> TerminalSize {
        self.terminal_size
    }

    /// Cell used for clears and newly exposed area.
    #[inline]
    pub const fn default_cell(&self) -> Cell {
        self.default_cell
    }

    /// The last rendered state.
    #[inline]
    pub const fn front_buffer(&self) -> &Buffer {
        &self.front
    }

    /// The desired next state.
    #[inline]
    pub const fn back_buffer(&self) -> &Buffer {
        &self.back
    }

    /// Copy the back buffer into the front buffer.
    ///
    /// For painters, once the back buffer has been put on the terminal.
    pub fn sync_front_buffer(&mut self) {
        self.front.copy_from(&self.back);
    }

    /// A drawing surface that writes through [`Screen::set_character`].
    pub fn text_graphics(&mut self) -> ScreenGraphics<'_> {
        ScreenGraphics::new(self)
    }
}

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screen")
            .field("terminal_size", &self.terminal_size)
            .field("cursor_position", &self.cursor_position)
            .field("tab_behaviour", &self.tab_behaviour)
            .field("pending_resize", &self.pending_resize())
            .finish_non_exhaustive()
    }
}

/// If `column` is the padding of a double-width glyph, return the glyph.
fn character_from(buffer: &Buffer, column: u16, row: u16) -> Option<Cell> {
    if let Some(left) = column.checked_sub(1) {
        if let Some(wide) = buffer.get(left, row).filter(|cell| cell.is_double_width()) {
            return Some(*wide);
        }
    }
    buffer.get(column, row).copied()
}
