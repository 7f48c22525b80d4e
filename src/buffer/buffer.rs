//! Buffer: A grid of cells representing the terminal screen.
//!
//! The buffer uses contiguous memory allocation for cache efficiency.
//! Cells are stored in row-major order.

use super::cell::Cell;
use crate::geometry::TerminalSize;

/// A fixed-size grid of cells.
///
/// Every in-bounds coordinate holds a cell. Reads outside the grid return
/// `None` and writes outside it are dropped, so callers can probe
/// neighbouring cells without validating coordinates first.
///
/// Access is in row-major order: `index = y * width + x`.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell>,
    /// Grid extent.
    size: TerminalSize,
}

impl Buffer {
    /// Create a new buffer of the given size with every cell set to `fill`.
    ///
    /// A zero-area size is allowed and yields a buffer without cells.
    pub fn new(size: TerminalSize, fill: Cell) -> Self {
        Self {
            cells: vec![fill; size.area()],
            size,
        }
    }

    /// Get the buffer extent.
    #[inline]
    pub const fn size(&self) -> TerminalSize {
        self.size
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.size.columns
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.size.rows
    }

    /// Get the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the buffer holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a reference to the underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if self.size.contains(x, y) {
            Some((y as usize) * (self.width() as usize) + (x as usize))
        } else {
            None
        }
    }

    /// Convert a linear index to (x, y) coordinates.
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn coords_of(&self, index: usize) -> Option<(u16, u16)> {
        if index < self.cells.len() {
            let width = self.width() as usize;
            Some(((index % width) as u16, (index / width) as u16))
        } else {
            None
        }
    }

    /// Get a reference to a cell at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Set a cell at (x, y).
    ///
    /// Returns `false`, leaving the buffer untouched, if the coordinates are
    /// out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Overwrite every cell with `cell`.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Build a buffer of `new_size` from this one.
    ///
    /// The region both extents share is copied over; cells that only exist
    /// in the new extent are set to `fill`. Content outside the new extent
    /// is dropped. `self` is left as it was.
    #[must_use]
    pub fn resized(&self, new_size: TerminalSize, fill: Cell) -> Self {
        let mut resized = Self::new(new_size, fill);

        let shared = self.size.intersection(new_size);
        let copy_width = shared.columns as usize;
        let old_width = self.width() as usize;
        let new_width = new_size.columns as usize;

        for y in 0..shared.rows as usize {
            let old_start = y * old_width;
            let new_start = y * new_width;
            resized.cells[new_start..new_start + copy_width]
                .copy_from_slice(&self.cells[old_start..old_start + copy_width]);
        }

        resized
    }

    /// Copy content from another buffer.
    ///
    /// The buffers must have the same dimensions.
    pub fn copy_from(&mut self, other: &Self) {
        debug_assert_eq!(self.size, other.size);
        self.cells.copy_from_slice(&other.cells);
    }

    /// Get an iterator over rows.
    ///
    /// Yields nothing for a buffer without cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width().max(1) as usize)
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}
