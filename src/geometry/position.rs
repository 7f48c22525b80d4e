//! TerminalPosition: A 0-indexed cell coordinate.

/// A column/row coordinate on the terminal grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct TerminalPosition {
    /// Row (y), compared first so positions sort in reading order.
    pub row: u16,
    /// Column (x).
    pub column: u16,
}

impl TerminalPosition {
    /// The top-left corner.
    pub const TOP_LEFT: Self = Self::new(0, 0);

    /// Create a new position.
    #[inline]
    pub const fn new(column: u16, row: u16) -> Self {
        Self { row, column }
    }

    /// Same row, different column.
    #[inline]
    #[must_use]
    pub const fn with_column(self, column: u16) -> Self {
        Self::new(column, self.row)
    }

    /// Same column, different row.
    #[inline]
    #[must_use]
    pub const fn with_row(self, row: u16) -> Self {
        Self::new(self.column, row)
    }

    /// Offset by `delta` columns, saturating at the grid edges.
    #[inline]
    #[must_use]
    pub const fn with_relative_column(self, delta: i32) -> Self {
        Self::new(offset(self.column, delta), self.row)
    }

    /// Offset by `delta` rows, saturating at the grid edges.
    #[inline]
    #[must_use]
    pub const fn with_relative_row(self, delta: i32) -> Self {
        Self::new(self.column, offset(self.row, delta))
    }
}

const fn offset(value: u16, delta: i32) -> u16 {
    let moved = value as i32 + delta;
    if moved < 0 {
        0
    } else if moved > u16::MAX as i32 {
        u16::MAX
    } else {
        moved as u16
    }
}

impl From<(u16, u16)> for TerminalPosition {
    /// Convert from `(column, row)`.
    #[inline]
    fn from((column, row): (u16, u16)) -> Self {
        Self::new(column, row)
    }
}

impl std::fmt::Debug for TerminalPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_saturates() {
        let pos = TerminalPosition::new(2, 3);
        assert_eq!(pos.with_relative_column(-5), TerminalPosition::new(0, 3));
        assert_eq!(pos.with_relative_row(4), TerminalPosition::new(2, 7));
        assert_eq!(
            TerminalPosition::new(u16::MAX, 0).with_relative_column(1).column,
            u16::MAX
        );
    }

    #[test]
    fn test_reading_order() {
        let a = TerminalPosition::new(10, 0);
        let b = TerminalPosition::new(0, 1);
        assert!(a < b);
    }
}
