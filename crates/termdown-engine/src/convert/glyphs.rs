//! Box-drawing glyphs and the line shapes built from them.

pub struct BoxGlyphs;

impl BoxGlyphs {
    pub const TOP_LEFT: char = '┌';
    pub const TOP_RIGHT: char = '┐';
    pub const BOTTOM_LEFT: char = '└';
    pub const BOTTOM_RIGHT: char = '┘';
    pub const LEFT_TEE: char = '├';
    pub const RIGHT_TEE: char = '┤';
    pub const TOP_TEE: char = '┬';
    pub const BOTTOM_TEE: char = '┴';
    pub const CROSS: char = '┼';
    pub const HORIZONTAL: char = '─';
    pub const VERTICAL: char = '│';

    /// All eleven glyphs used to draw terminal tables.
    pub const ALL: [char; 11] = [
        Self::TOP_LEFT,
        Self::TOP_RIGHT,
        Self::BOTTOM_LEFT,
        Self::BOTTOM_RIGHT,
        Self::LEFT_TEE,
        Self::RIGHT_TEE,
        Self::TOP_TEE,
        Self::BOTTOM_TEE,
        Self::CROSS,
        Self::HORIZONTAL,
        Self::VERTICAL,
    ];

    /// `┌ ... ┐`
    pub fn is_top_border(trimmed: &str) -> bool {
        trimmed.starts_with(Self::TOP_LEFT) && trimmed.contains(Self::TOP_RIGHT)
    }

    /// `└ ... ┘`
    pub fn is_bottom_border(trimmed: &str) -> bool {
        trimmed.starts_with(Self::BOTTOM_LEFT) && trimmed.contains(Self::BOTTOM_RIGHT)
    }

    /// A border or inner separator: starts with a left edge glyph and has a rule in it.
    pub fn is_separator_row(trimmed: &str) -> bool {
        trimmed.starts_with([Self::LEFT_TEE, Self::TOP_LEFT, Self::BOTTOM_LEFT])
            && trimmed.contains(Self::HORIZONTAL)
    }

    /// `│ cell │ cell │`
    pub fn is_data_row(trimmed: &str) -> bool {
        trimmed.starts_with(Self::VERTICAL) && trimmed.ends_with(Self::VERTICAL)
    }

    /// Any of the table line shapes.
    pub fn is_table_line(trimmed: &str) -> bool {
        Self::is_top_border(trimmed) || Self::is_data_row(trimmed) || Self::is_separator_row(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_top_border() {
        assert!(BoxGlyphs::is_top_border("┌──┬──┐"));
        assert!(BoxGlyphs::is_top_border("┌ title ┐ trailing"));
        assert!(!BoxGlyphs::is_top_border("┌──────"));
        assert!(!BoxGlyphs::is_top_border("x┌──┐"));
    }

    #[test]
    fn detect_bottom_border() {
        assert!(BoxGlyphs::is_bottom_border("└──┴──┘"));
        assert!(!BoxGlyphs::is_bottom_border("└─────"));
        assert!(!BoxGlyphs::is_bottom_border("┌──┐"));
    }

    #[test]
    fn detect_separator_rows() {
        assert!(BoxGlyphs::is_separator_row("├──┼──┤"));
        assert!(BoxGlyphs::is_separator_row("┌──┐"));
        assert!(BoxGlyphs::is_separator_row("└──┘"));
        assert!(!BoxGlyphs::is_separator_row("├ no rule ┤"));
    }

    #[test]
    fn detect_data_rows() {
        assert!(BoxGlyphs::is_data_row("│ A │ B │"));
        assert!(BoxGlyphs::is_data_row("│"));
        assert!(!BoxGlyphs::is_data_row("│ A │ B"));
    }

    #[test]
    fn glyph_set_has_no_duplicates() {
        let mut glyphs = BoxGlyphs::ALL.to_vec();
        glyphs.sort_unstable();
        glyphs.dedup();
        assert_eq!(glyphs.len(), BoxGlyphs::ALL.len());
    }
}
