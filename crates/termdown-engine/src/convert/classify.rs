use super::glyphs::BoxGlyphs;
use super::lines::SourceLines;
use super::table::TableScan;

/// Semantic category of one unit of input.
///
/// Every unit is a single line except [`LineKind::Table`], which covers the
/// whole block from the top border to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Table { end: usize },
    Blank,
    HorizontalRule,
    Bullet,
    Header,
    SubHeader,
    Plain,
}

impl LineKind {
    /// Index of the first line after this unit, given where it started.
    pub fn next_index(&self, index: usize) -> usize {
        match self {
            LineKind::Table { end } => end + 1,
            _ => index + 1,
        }
    }
}

/// Classifies terminal lines by priority: table, blank, rule, bullet, header,
/// sub-header, then plain text. The first predicate that matches wins.
pub struct TerminalLineClassifier;

impl TerminalLineClassifier {
    pub const BULLET_GLYPH: char = '•';
    pub const BULLET_PREFIXES: [&'static str; 3] = ["- ", "* ", "• "];
    pub const RULE_CHARS: [char; 3] = [BoxGlyphs::HORIZONTAL, '-', '='];

    pub const HEADER_MIN_LEN: usize = 3;
    pub const HEADER_MAX_LEN: usize = 80;
    pub const SUB_HEADER_MAX_LEN: usize = 60;

    /// Classifies the unit starting at `index`.
    ///
    /// A top border with no closing border is not a table; it falls through to
    /// the remaining predicates like any other line.
    pub fn classify(&self, lines: &SourceLines<'_>, index: usize) -> LineKind {
        let Some(line) = lines.get(index) else {
            return LineKind::Blank;
        };
        let trimmed = line.trimmed();

        if BoxGlyphs::is_top_border(trimmed) {
            match TableScan::from_top_border(lines, index) {
                TableScan::Closed { end } => return LineKind::Table { end },
                TableScan::Unterminated => {
                    log::debug!("unterminated table at line {index}, treating border as text");
                }
            }
        }

        if trimmed.trim().is_empty() {
            LineKind::Blank
        } else if Self::is_horizontal_rule(trimmed) {
            LineKind::HorizontalRule
        } else if Self::is_bullet(trimmed) {
            LineKind::Bullet
        } else if Self::is_header(lines, index) {
            LineKind::Header
        } else if Self::is_sub_header(trimmed) {
            LineKind::SubHeader
        } else {
            LineKind::Plain
        }
    }

    /// At least three characters, all of them `─`, `-` or `=`.
    pub fn is_horizontal_rule(trimmed: &str) -> bool {
        trimmed.chars().count() >= 3 && trimmed.chars().all(|c| Self::RULE_CHARS.contains(&c))
    }

    pub fn is_bullet(trimmed: &str) -> bool {
        Self::BULLET_PREFIXES
            .iter()
            .any(|prefix| trimmed.starts_with(*prefix))
    }

    /// Rewrites a `•` bullet as a Markdown dash; dash and star bullets are kept.
    pub fn format_bullet(trimmed: &str) -> String {
        match trimmed
            .strip_prefix(Self::BULLET_GLYPH)
            .and_then(|rest| rest.strip_prefix(' '))
        {
            Some(rest) => format!("- {rest}"),
            None => trimmed.to_string(),
        }
    }

    /// A short standalone line between blank lines (or document edges).
    pub fn is_header(lines: &SourceLines<'_>, index: usize) -> bool {
        let Some(line) = lines.get(index) else {
            return false;
        };
        let trimmed = line.trimmed();

        let len = trimmed.chars().count();
        if !(Self::HEADER_MIN_LEN..=Self::HEADER_MAX_LEN).contains(&len) {
            return false;
        }

        if Self::is_bullet(trimmed)
            || Self::is_horizontal_rule(trimmed)
            || BoxGlyphs::is_table_line(trimmed)
        {
            return false;
        }

        // ending in a colon makes it a sub-header
        if trimmed.ends_with(':') {
            return false;
        }

        lines.is_blank_or_edge(index.checked_sub(1)) && lines.is_blank_or_edge(Some(index + 1))
    }

    /// A label such as `Results:` introducing the lines below it.
    pub fn is_sub_header(trimmed: &str) -> bool {
        trimmed.ends_with(':')
            && trimmed.chars().count() <= Self::SUB_HEADER_MAX_LEN
            && !Self::is_bullet(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn classify_all(input: &str) -> Vec<LineKind> {
        let lines = SourceLines::split(input);
        let classifier = TerminalLineClassifier;
        let mut kinds = Vec::new();
        let mut i = 0;
        while i < lines.len() {
            let kind = classifier.classify(&lines, i);
            kinds.push(kind);
            i = kind.next_index(i);
        }
        kinds
    }

    #[rstest]
    #[case("───", true)]
    #[case("------", true)]
    #[case("=====", true)]
    #[case("-=─-=", true)]
    #[case("--", false)]
    #[case("--- x", false)]
    #[case("═══", false)]
    fn horizontal_rules(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(TerminalLineClassifier::is_horizontal_rule(line), expected);
    }

    #[rstest]
    #[case("- item", true)]
    #[case("* item", true)]
    #[case("• item", true)]
    #[case("-item", false)]
    #[case("•item", false)]
    #[case("+ item", false)]
    fn bullets(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(TerminalLineClassifier::is_bullet(line), expected);
    }

    #[rstest]
    #[case("• Item", "- Item")]
    #[case("- Item", "- Item")]
    #[case("* Item", "* Item")]
    #[case("•  spaced", "-  spaced")]
    fn bullet_formatting(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(TerminalLineClassifier::format_bullet(line), expected);
    }

    #[rstest]
    #[case("Summary:", true)]
    #[case("✅ Wins:", true)]
    #[case("- item:", false)]
    #[case("no colon", false)]
    fn sub_headers(#[case] line: &str, #[case] expected: bool) {
        assert_eq!(TerminalLineClassifier::is_sub_header(line), expected);
    }

    #[test]
    fn sub_header_length_limit() {
        let at_limit = format!("{}:", "x".repeat(59));
        let over_limit = format!("{}:", "x".repeat(60));
        assert!(TerminalLineClassifier::is_sub_header(&at_limit));
        assert!(!TerminalLineClassifier::is_sub_header(&over_limit));
    }

    #[rstest]
    #[case("Title", 0, true)]
    #[case("\nTitle\n", 1, true)]
    #[case("Title\nbody", 0, false)]
    #[case("body\nTitle", 1, false)]
    #[case("Ab", 0, false)]
    #[case("Title:", 0, false)]
    #[case("- Title", 0, false)]
    #[case("│ A │", 0, false)]
    #[case("├──┤", 0, false)]
    #[case("  Indented  ", 0, true)]
    fn headers(#[case] input: &str, #[case] index: usize, #[case] expected: bool) {
        let lines = SourceLines::split(input);
        assert_eq!(TerminalLineClassifier::is_header(&lines, index), expected);
    }

    #[test]
    fn header_length_limits() {
        let exactly_max = "h".repeat(80);
        let too_long = "h".repeat(81);
        assert!(TerminalLineClassifier::is_header(&SourceLines::split(&exactly_max), 0));
        assert!(!TerminalLineClassifier::is_header(&SourceLines::split(&too_long), 0));
    }

    #[test]
    fn header_length_counts_characters_not_bytes() {
        let line = "é".repeat(50);
        assert!(TerminalLineClassifier::is_header(&SourceLines::split(&line), 0));
    }

    #[test]
    fn astral_plane_emoji_counts_as_one_character() {
        let header = |line: &str| TerminalLineClassifier::is_header(&SourceLines::split(line), 0);
        assert!(!header("🚀x"));
        assert!(header("🚀xy"));
        assert!(header(&format!("🚀{}", "h".repeat(79))));
        assert!(!header(&format!("🚀{}", "h".repeat(80))));

        assert!(TerminalLineClassifier::is_sub_header(&format!("🚀{}:", "x".repeat(58))));
        assert!(!TerminalLineClassifier::is_sub_header(&format!("🚀{}:", "x".repeat(59))));
    }

    #[test]
    fn orphaned_border_with_colon_falls_through_to_sub_header() {
        assert_eq!(classify_all("┌──┐:"), vec![LineKind::SubHeader]);
    }

    #[test]
    fn rule_wins_over_header() {
        assert_eq!(classify_all("──────"), vec![LineKind::HorizontalRule]);
    }

    #[test]
    fn bullet_wins_over_sub_header() {
        assert_eq!(classify_all("- todo:"), vec![LineKind::Bullet]);
    }

    #[test]
    fn table_consumes_whole_block() {
        let kinds = classify_all("┌─┐\n│a│\n└─┘\nafter");
        assert_eq!(kinds, vec![LineKind::Table { end: 2 }, LineKind::Plain]);
    }

    #[test]
    fn unterminated_table_degrades_to_plain_lines() {
        let kinds = classify_all("┌──┐\n│ a │\ntext");
        assert_eq!(kinds, vec![LineKind::Plain, LineKind::Plain, LineKind::Plain]);
    }

    #[test]
    fn every_line_is_consumed_once() {
        let kinds = classify_all("Title\n\n┌─┐\n│a│\n└─┘\n- x\nLabel:\nplain");
        assert_eq!(
            kinds,
            vec![
                LineKind::Header,
                LineKind::Blank,
                LineKind::Table { end: 4 },
                LineKind::Bullet,
                LineKind::SubHeader,
                LineKind::Plain,
            ]
        );
    }
}
