//! `ScreenGraphics`: [`TextGraphics`] over a [`Screen`].

use super::{Pen, TextGraphics};
use crate::buffer::Cell;
use crate::geometry::TerminalSize;
use crate::screen::Screen;

/// A drawing view of a screen.
///
/// Holds no cells of its own: every write goes through
/// [`Screen::set_character`], so tab expansion and double-width handling
/// apply, and the size is read from the screen on every call. The view
/// therefore stays correct across resizes committed through
/// [`ScreenGraphics::screen_mut`].
pub struct ScreenGraphics<'a> {
    screen: &'a mut Screen,
    pen: Pen,
}

impl<'a> ScreenGraphics<'a> {
    /// Create a view with a default pen that uses the screen's current tab
    /// behaviour.
    pub fn new(screen: &'a mut Screen) -> Self {
        let mut pen = Pen::new();
        pen.set_tab_behaviour(screen.tab_behaviour());
        Self { screen, pen }
    }

    /// The underlying screen.
    pub fn screen(&self) -> &Screen {
        &*self.screen
    }

    /// The underlying screen, mutably.
    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut *self.screen
    }
}

impl TextGraphics for ScreenGraphics<'_> {
    fn size(&self) -> TerminalSize {
        self.screen.terminal_size()
    }

    fn set_character(&mut self, column: u16, row: u16, cell: Cell) {
        self.screen.set_character(column, row, cell);
    }

    fn pen(&self) -> &Pen {
        &self.pen
    }

    fn pen_mut(&mut self) -> &mut Pen {
        &mut self.pen
    }
}

impl std::fmt::Debug for ScreenGraphics<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenGraphics")
            .field("size", &self.size())
            .field("pen", &self.pen)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{Color, Modifiers};
    use crate::geometry::TerminalPosition;
    use crate::screen::TabBehaviour;

    fn row_text(screen: &Screen, row: u16) -> String {
        (0..screen.terminal_size().columns)
            .map(|c| screen.back_buffer().get(c, row).map_or('?', Cell::ch))
            .collect()
    }

    #[test]
    fn test_forwards_to_back_buffer() {
        let mut screen = Screen::new(TerminalSize::new(6, 2));
        let cell = Cell::new('g').with_fg(Color::RED);
        screen.text_graphics().set_character(1, 1, cell);

        assert_eq!(screen.back_character(1, 1), Some(cell));
        assert_eq!(screen.front_character(1, 1), Some(Cell::EMPTY));
    }

    #[test]
    fn test_forwarded_writes_apply_screen_rules() {
        let mut screen = Screen::new(TerminalSize::new(8, 1));
        {
            let mut g = screen.text_graphics();
            g.set_character(0, 0, Cell::new('\t'));
            g.set_character(5, 0, Cell::new('日'));
            g.set_character(6, 0, Cell::new('z'));
        }
        // Tab at 0 fills 0..4; the glyph at 5 is blanked by the write at 6.
        assert_eq!(row_text(&screen, 0), "      z ");
    }

    #[test]
    fn test_pen_inherits_screen_tab_behaviour() {
        let mut screen = Screen::new(TerminalSize::new(8, 1));
        screen.set_tab_behaviour(TabBehaviour::ConvertToTwoSpaces);
        let g = screen.text_graphics();
        assert_eq!(g.pen().tab_behaviour(), TabBehaviour::ConvertToTwoSpaces);
    }

    #[test]
    fn test_put_string_with_pen_style() {
        let mut screen = Screen::new(TerminalSize::new(10, 2));
        {
            let mut g = screen.text_graphics();
            g.pen_mut().set_bg(Color::BLUE).enable(Modifiers::BOLD);
            g.put_string(1, 1, "日x");
        }
        let styled = Cell::styled('日', Color::Default, Color::BLUE, Modifiers::BOLD);
        assert_eq!(screen.back_character(1, 1), Some(styled));
        assert_eq!(screen.back_character(2, 1), Some(styled));
        assert_eq!(screen.back_character(3, 1), Some(styled.with_char('x')));
    }

    #[test]
    fn test_size_tracks_committed_resize() {
        let mut screen = Screen::new(TerminalSize::new(4, 2));
        let mut g = screen.text_graphics();
        assert_eq!(g.size(), TerminalSize::new(4, 2));

        g.screen().add_resize_request(TerminalSize::new(7, 3));
        assert_eq!(g.size(), TerminalSize::new(4, 2));

        g.screen_mut().do_resize_if_necessary();
        assert_eq!(g.size(), TerminalSize::new(7, 3));

        g.fill('#');
        assert!(g.screen().back_buffer().cells().iter().all(|c| c.ch() == '#'));
    }

    #[test]
    fn test_draw_rectangle_on_screen() {
        let mut screen = Screen::new(TerminalSize::new(5, 3));
        screen
            .text_graphics()
            .draw_rectangle(TerminalPosition::TOP_LEFT, TerminalSize::new(5, 3), '*');

        assert_eq!(row_text(&screen, 0), "*****");
        assert_eq!(row_text(&screen, 1), "*   *");
        assert_eq!(row_text(&screen, 2), "*****");
    }
}
