//! TerminalSize: The extent of a terminal or buffer in cells.

use super::TerminalPosition;

/// Terminal dimensions: columns by rows.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TerminalSize {
    /// Width in columns.
    pub columns: u16,
    /// Height in rows.
    pub rows: u16,
}

impl TerminalSize {
    /// Zero-sized terminal.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    /// Same rows, different columns.
    #[inline]
    #[must_use]
    pub const fn with_columns(self, columns: u16) -> Self {
        Self::new(columns, self.rows)
    }

    /// Same columns, different rows.
    #[inline]
    #[must_use]
    pub const fn with_rows(self, rows: u16) -> Self {
        Self::new(self.columns, rows)
    }

    /// Get the area (number of cells).
    #[inline]
    pub const fn area(&self) -> usize {
        (self.columns as usize) * (self.rows as usize)
    }

    /// Check if the size covers no cells at all.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    /// Check if `(column, row)` lies inside `[0, columns) x [0, rows)`.
    #[inline]
    pub const fn contains(&self, column: u16, row: u16) -> bool {
        column < self.columns && row < self.rows
    }

    /// Check if a position lies inside this size.
    #[inline]
    pub const fn contains_position(&self, position: TerminalPosition) -> bool {
        self.contains(position.column, position.row)
    }

    /// The overlapping extent of two sizes.
    #[inline]
    #[must_use]
    pub fn intersection(&self, other: Self) -> Self {
        Self::new(self.columns.min(other.columns), self.rows.min(other.rows))
    }
}

impl From<(u16, u16)> for TerminalSize {
    /// Convert from `(columns, rows)`, the order crossterm reports.
    #[inline]
    fn from((columns, rows): (u16, u16)) -> Self {
        Self::new(columns, rows)
    }
}

impl std::fmt::Debug for TerminalSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}
