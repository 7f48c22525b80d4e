//! Cell: The atomic unit of terminal display.
//!
//! A cell is an immutable value made of one displayed character and its
//! style: foreground colour, background colour and modifiers. Cells are
//! compared by value, so two cells that would render identically are equal.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Cell                                        │
//! ├────────┬──────────────┬──────────────┬───────┤
//! │  ch    │  fg          │  bg          │  mod  │
//! │  char  │  Color       │  Color       │  u8   │
//! └────────┴──────────────┴──────────────┴───────┘
//! ```

use bitflags::bitflags;
use unicode_width::UnicodeWidthChar;

/// True-color RGB representation.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as u8,
            ((hex >> 8) & 0xFF) as u8,
            (hex & 0xFF) as u8,
        )
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

/// A terminal color.
///
/// `Default` leaves the choice to the terminal's own palette, which is what
/// blank cells use.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub enum Color {
    /// The terminal's default foreground/background.
    #[default]
    Default,
    /// An entry of the 256-color palette (0-15 are the ANSI colors).
    Indexed(u8),
    /// A 24-bit true color.
    Rgb(Rgb),
}

impl Color {
    /// ANSI black.
    pub const BLACK: Self = Self::Indexed(0);
    /// ANSI red.
    pub const RED: Self = Self::Indexed(1);
    /// ANSI green.
    pub const GREEN: Self = Self::Indexed(2);
    /// ANSI yellow.
    pub const YELLOW: Self = Self::Indexed(3);
    /// ANSI blue.
    pub const BLUE: Self = Self::Indexed(4);
    /// ANSI magenta.
    pub const MAGENTA: Self = Self::Indexed(5);
    /// ANSI cyan.
    pub const CYAN: Self = Self::Indexed(6);
    /// ANSI white.
    pub const WHITE: Self = Self::Indexed(7);
}

impl From<Rgb> for Color {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

bitflags! {
    /// Text style modifiers.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use screenbuf::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::ITALIC;
    /// assert!(style.contains(Modifiers::BOLD));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Blinking text
        const BLINK = 0b0001_0000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0010_0000;
        /// Hidden/invisible text
        const HIDDEN = 0b0100_0000;
        /// Strikethrough text
        const STRIKETHROUGH = 0b1000_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// Returns `true` if `ch` occupies two terminal columns (CJK ideographs,
/// fullwidth forms, wide emoji and so on).
#[inline]
pub fn is_double_width(ch: char) -> bool {
    ch.width() == Some(2)
}

/// A single terminal cell.
///
/// Cells are plain values: every builder method returns a new cell and
/// leaves the original untouched.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
    modifiers: Modifiers,
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Cell {
    /// An empty cell (space character with default colors).
    pub const EMPTY: Self = Self::new(' ');

    /// Create a new cell with default colors and no modifiers.
    #[inline]
    pub const fn new(ch: char) -> Self {
        Self {
            ch,
            fg: Color::Default,
            bg: Color::Default,
            modifiers: Modifiers::empty(),
        }
    }

    /// Create a fully styled cell.
    #[inline]
    pub const fn styled(ch: char, fg: Color, bg: Color, modifiers: Modifiers) -> Self {
        Self { ch, fg, bg, modifiers }
    }

    /// Get the displayed character.
    #[inline]
    pub const fn ch(&self) -> char {
        self.ch
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

    /// Get the modifiers.
    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Check if the character occupies two columns.
    #[inline]
    pub fn is_double_width(&self) -> bool {
        is_double_width(self.ch)
    }

    /// Get the display width (0, 1, or 2).
    ///
    /// Control characters report 0.
    #[inline]
    pub fn display_width(&self) -> u8 {
        match self.ch.width() {
            Some(2) => 2,
            Some(1) => 1,
            _ => 0,
        }
    }

    /// Same style, different character.
    #[inline]
    #[must_use]
    pub const fn with_char(mut self, ch: char) -> Self {
        self.ch = ch;
        self
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Color) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Color) -> Self {
        self.bg = bg;
        self
    }

    /// Set the modifiers (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl From<char> for Cell {
    #[inline]
    fn from(ch: char) -> Self {
        Self::new(ch)
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("ch", &self.ch)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("modifiers", &self.modifiers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_from_tuple() {
        let rgb: Rgb = (255, 128, 0).into();
        assert_eq!(rgb, Rgb::new(255, 128, 0));
    }

    #[test]
    fn test_rgb_from_hex() {
        let rgb: Rgb = 0xFF8000.into();
        assert_eq!(rgb.r, 255);
        assert_eq!(rgb.g, 128);
        assert_eq!(rgb.b, 0);
    }

    #[test]
    fn test_empty_cell() {
        assert_eq!(Cell::default(), Cell::EMPTY);
        assert_eq!(Cell::EMPTY.ch(), ' ');
        assert_eq!(Cell::EMPTY.fg(), Color::Default);
        assert_eq!(Cell::EMPTY.bg(), Color::Default);
        assert!(Cell::EMPTY.modifiers().is_empty());
    }

    #[test]
    fn test_cell_double_width() {
        assert!(Cell::new('日').is_double_width());
        assert!(Cell::new('한').is_double_width());
        assert!(Cell::new('Ａ').is_double_width());
        assert!(!Cell::new('A').is_double_width());
        assert!(!Cell::new('é').is_double_width());
        assert!(!Cell::new('\t').is_double_width());
    }

    #[test]
    fn test_display_width() {
        assert_eq!(Cell::new('A').display_width(), 1);
        assert_eq!(Cell::new('日').display_width(), 2);
        assert_eq!(Cell::new('\x07').display_width(), 0);
    }

    #[test]
    fn test_cell_equality() {
        let a = Cell::new('A').with_fg(Color::Rgb(Rgb::new(255, 0, 0)));
        let b = Cell::new('A').with_fg(Color::Rgb(Rgb::new(255, 0, 0)));
        let c = Cell::new('A').with_fg(Color::Rgb(Rgb::new(0, 255, 0)));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, a.with_modifiers(Modifiers::BOLD));
    }

    #[test]
    fn test_with_char_keeps_style() {
        let cell = Cell::styled('X', Color::RED, Color::BLUE, Modifiers::UNDERLINE);
        let space = cell.with_char(' ');

        assert_eq!(space.ch(), ' ');
        assert_eq!(space.fg(), Color::RED);
        assert_eq!(space.bg(), Color::BLUE);
        assert_eq!(space.modifiers(), Modifiers::UNDERLINE);
        // The original value is untouched.
        assert_eq!(cell.ch(), 'X');
    }

    #[test]
    fn test_cell_builder_pattern() {
        let cell = Cell::new('X')
            .with_fg(Rgb::new(255, 0, 0).into())
            .with_bg(Color::Indexed(17))
            .with_modifiers(Modifiers::BOLD | Modifiers::ITALIC);

        assert_eq!(cell.fg(), Color::Rgb(Rgb::new(255, 0, 0)));
        assert_eq!(cell.bg(), Color::Indexed(17));
        assert!(cell.modifiers().contains(Modifiers::BOLD));
        assert!(cell.modifiers().contains(Modifiers::ITALIC));
    }

    #[test]
    fn test_modifiers_bitflags() {
        let mods = Modifiers::BOLD | Modifiers::UNDERLINE;
        assert!(mods.contains(Modifiers::BOLD));
        assert!(mods.contains(Modifiers::UNDERLINE));
        assert!(!mods.contains(Modifiers::ITALIC));
    }
}
