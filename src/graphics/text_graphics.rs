//! `TextGraphics`: Generic drawing on a grid of cells.
//!
//! Implementors provide a single-cell write and a size. Strings, lines and
//! rectangles come for free and are all built from that one write, so any
//! rules the target applies to single cells also apply to them.

use crate::buffer::{is_double_width, Cell, Color, Modifiers};
use crate::geometry::{TerminalPosition, TerminalSize};
use crate::screen::TabBehaviour;
use unicode_segmentation::UnicodeSegmentation;

/// Style applied to characters drawn through [`TextGraphics`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Pen {
    fg: Color,
    bg: Color,
    modifiers: Modifiers,
    tab_behaviour: TabBehaviour,
}

impl Pen {
    /// A pen with default colors, no modifiers and [`TabBehaviour::AlignToColumn4`].
    pub const fn new() -> Self {
        Self {
            fg: Color::Default,
            bg: Color::Default,
            modifiers: Modifiers::empty(),
            tab_behaviour: TabBehaviour::AlignToColumn4,
        }
    }

    /// Get the foreground color.
    #[inline]
    pub const fn fg(&self) -> Color {
        self.fg
    }

    /// Get the background color.
    #[inline]
    pub const fn bg(&self) -> Color {
        self.bg
    }

    /// Get the active modifiers.
    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Get the tab behaviour used by [`TextGraphics::put_string`].
    #[inline]
    pub const fn tab_behaviour(&self) -> TabBehaviour {
        self.tab_behaviour
    }

    /// Set the foreground color.
    #[inline]
    pub fn set_fg(&mut self, fg: Color) -> &mut Self {
        self.fg = fg;
        self
    }

    /// Set the background color.
    #[inline]
    pub fn set_bg(&mut self, bg: Color) -> &mut Self {
        self.bg = bg;
        self
    }

    /// Replace the active modifiers.
    #[inline]
    pub fn set_modifiers(&mut self, modifiers: Modifiers) -> &mut Self {
        self.modifiers = modifiers;
        self
    }

    /// Turn modifiers on, keeping the others.
    #[inline]
    pub fn enable(&mut self, modifiers: Modifiers) -> &mut Self {
        self.modifiers.insert(modifiers);
        self
    }

    /// Turn modifiers off, keeping the others.
    #[inline]
    pub fn disable(&mut self, modifiers: Modifiers) -> &mut Self {
        self.modifiers.remove(modifiers);
        self
    }

    /// Set the tab behaviour.
    #[inline]
    pub fn set_tab_behaviour(&mut self, tab_behaviour: TabBehaviour) -> &mut Self {
        self.tab_behaviour = tab_behaviour;
        self
    }

    /// `ch` in this pen's style.
    #[inline]
    pub const fn cell(&self, ch: char) -> Cell {
        Cell::styled(ch, self.fg, self.bg, self.modifiers)
    }
}

/// A surface that generic drawing routines can target.
///
/// Everything is clipped to [`TextGraphics::size`]; nothing here fails.
pub trait TextGraphics {
    /// Current drawable extent.
    fn size(&self) -> TerminalSize;

    /// Write one cell.
    fn set_character(&mut self, column: u16, row: u16, cell: Cell);

    /// Style used by the drawing helpers.
    fn pen(&self) -> &Pen;

    /// Mutable access to the style.
    fn pen_mut(&mut self) -> &mut Pen;

    /// Write `ch` in the pen's style.
    fn set_char(&mut self, column: u16, row: u16, ch: char) {
        let cell = self.pen().cell(ch);
        self.set_character(column, row, cell);
    }

    /// Write a single line of text starting at `(column, row)`.
    ///
    /// Tabs are expanded with the pen's tab behaviour, the text ends at the
    /// first line break and other control characters are skipped. Each
    /// grapheme cluster takes one cell holding its base character; a
    /// double-width glyph advances two columns.
    fn put_string(&mut self, column: u16, row: u16, text: &str) {
        let line = text.split(|c: char| c == '\n' || c == '\r').next().unwrap_or_default();
        let line = self.pen().tab_behaviour().replace_tabs(line, column);
        let width = self.size().columns;

        let mut col = column;
        for grapheme in line.graphemes(true) {
            if col >= width {
                break;
            }
            let Some(ch) = grapheme.chars().next() else {
                continue;
            };
            if ch.is_control() && ch != '\t' {
                continue;
            }

            self.set_char(col, row, ch);

            let advance = if is_double_width(ch) { 2 } else { 1 };
            let Some(next) = col.checked_add(advance) else {
                break;
            };
            col = next;
        }
    }

    /// Fill the whole surface with `ch`.
    fn fill(&mut self, ch: char) {
        let size = self.size();
        self.fill_rectangle(TerminalPosition::TOP_LEFT, size, ch);
    }

    /// Fill `size` cells starting at `top_left` with `ch`.
    fn fill_rectangle(&mut self, top_left: TerminalPosition, size: TerminalSize, ch: char) {
        let bounds = self.size();
        let right = top_left.column.saturating_add(size.columns).min(bounds.columns);
        let bottom = top_left.row.saturating_add(size.rows).min(bounds.rows);

        for row in top_left.row..bottom {
            for column in top_left.column..right {
                self.set_char(column, row, ch);
            }
        }
    }

    /// Draw the outline of a rectangle of `size` cells starting at `top_left`.
    fn draw_rectangle(&mut self, top_left: TerminalPosition, size: TerminalSize, ch: char) {
        if size.is_empty() {
            return;
        }
        let right = top_left.column.saturating_add(size.columns - 1);
        let bottom = top_left.row.saturating_add(size.rows - 1);
        let top_right = top_left.with_column(right);
        let bottom_left = top_left.with_row(bottom);
        let bottom_right = TerminalPosition::new(right, bottom);

        self.draw_line(top_left, top_right, ch);
        self.draw_line(bottom_left, bottom_right, ch);
        self.draw_line(top_left, bottom_left, ch);
        self.draw_line(top_right, bottom_right, ch);
    }

    /// Draw a straight line between two points, both included.
    fn draw_line(&mut self, from: TerminalPosition, to: TerminalPosition, ch: char) {
        // Bresenham, over the full octant range.
        let (mut x, mut y) = (i32::from(from.column), i32::from(from.row));
        let (x1, y1) = (i32::from(to.column), i32::from(to.row));
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            if let (Ok(column), Ok(row)) = (u16::try_from(x), u16::try_from(y)) {
                self.set_char(column, row, ch);
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}
