//! TabBehaviour: How tab characters turn into cells.

/// Policy for expanding `'\t'` into spaces.
///
/// A tab never reaches a buffer as-is: the screen asks the policy how many
/// columns a tab starting at a given column spans and writes that many
/// space cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum TabBehaviour {
    /// Leave tabs untouched in strings; a tab written to a cell takes one column.
    Ignore,
    /// Always one space.
    ConvertToOneSpace,
    /// Always two spaces.
    ConvertToTwoSpaces,
    /// Always three spaces.
    ConvertToThreeSpaces,
    /// Always four spaces.
    ConvertToFourSpaces,
    /// Always eight spaces.
    ConvertToEightSpaces,
    /// Pad to the next column that is a multiple of 4.
    #[default]
    AlignToColumn4,
    /// Pad to the next column that is a multiple of 8.
    AlignToColumn8,
}

impl TabBehaviour {
    /// Number of columns a tab starting at `column` occupies. Always at least 1.
    pub const fn columns_at(self, column: u16) -> u16 {
        match self {
            Self::Ignore | Self::ConvertToOneSpace => 1,
            Self::ConvertToTwoSpaces => 2,
            Self::ConvertToThreeSpaces => 3,
            Self::ConvertToFourSpaces => 4,
            Self::ConvertToEightSpaces => 8,
            Self::AlignToColumn4 => 4 - column % 4,
            Self::AlignToColumn8 => 8 - column % 8,
        }
    }

    /// The text a tab at `column` is replaced with.
    pub fn tab_replacement(self, column: u16) -> String {
        match self {
            Self::Ignore => "\t".to_string(),
            _ => " ".repeat(self.columns_at(column) as usize),
        }
    }

    /// Replace every tab in `text`, which is assumed to start at `column`.
    ///
    /// Later tabs see the columns shifted by earlier replacements, so
    /// alignment policies line up the way a terminal would.
    pub fn replace_tabs(self, text: &str, column: u16) -> String {
        if !text.contains('\t') {
            return text.to_string();
        }

        let mut out = String::with_capacity(text.len());
        let mut col = column;
        for ch in text.chars() {
            if ch == '\t' {
                let replacement = self.tab_replacement(col);
                col = col.saturating_add(count_columns(&replacement));
                out.push_str(&replacement);
            } else {
                out.push(ch);
                col = col.saturating_add(1);
            }
        }
        out
    }
}

#[allow(clippy::cast_possible_truncation)]
fn count_columns(replacement: &str) -> u16 {
    replacement.chars().count().min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_widths() {
        assert_eq!(TabBehaviour::Ignore.columns_at(5), 1);
        assert_eq!(TabBehaviour::ConvertToOneSpace.columns_at(5), 1);
        assert_eq!(TabBehaviour::ConvertToTwoSpaces.columns_at(5), 2);
        assert_eq!(TabBehaviour::ConvertToThreeSpaces.columns_at(5), 3);
        assert_eq!(TabBehaviour::ConvertToFourSpaces.columns_at(5), 4);
        assert_eq!(TabBehaviour::ConvertToEightSpaces.columns_at(5), 8);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(TabBehaviour::AlignToColumn4.columns_at(0), 4);
        assert_eq!(TabBehaviour::AlignToColumn4.columns_at(3), 1);
        assert_eq!(TabBehaviour::AlignToColumn4.columns_at(4), 4);
        assert_eq!(TabBehaviour::AlignToColumn4.columns_at(6), 2);
        assert_eq!(TabBehaviour::AlignToColumn8.columns_at(3), 5);
        assert_eq!(TabBehaviour::AlignToColumn8.columns_at(8), 8);
    }

    #[test]
    fn test_default_is_align_4() {
        assert_eq!(TabBehaviour::default(), TabBehaviour::AlignToColumn4);
    }

    #[test]
    fn test_replacement_text() {
        assert_eq!(TabBehaviour::Ignore.tab_replacement(2), "\t");
        assert_eq!(TabBehaviour::AlignToColumn4.tab_replacement(1), "   ");
    }

    #[test]
    fn test_replace_tabs_tracks_columns() {
        let policy = TabBehaviour::AlignToColumn4;
        assert_eq!(policy.replace_tabs("a\tb\tc", 0), "a   b   c");
        assert_eq!(policy.replace_tabs("\t\t", 2), "      ");
        assert_eq!(policy.replace_tabs("no tabs", 3), "no tabs");
        assert_eq!(TabBehaviour::Ignore.replace_tabs("a\tb", 0), "a\tb");
        assert_eq!(TabBehaviour::ConvertToTwoSpaces.replace_tabs("\tx", 7), "  x");
    }
}
