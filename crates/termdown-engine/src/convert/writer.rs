use serde::Serialize;

use super::classify::{LineKind, TerminalLineClassifier};
use super::glyphs::BoxGlyphs;
use super::lines::SourceLines;
use super::table::Table;

/// Counts gathered while converting one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    pub input_lines: usize,
    pub output_lines: usize,
    pub tables: usize,
    pub table_rows: usize,
    pub headers: usize,
    pub sub_headers: usize,
    pub bullets: usize,
    pub rules: usize,
    /// Top borders that never found their bottom border.
    pub unterminated_tables: usize,
}

/// Accumulates the Markdown for one conversion run.
///
/// Owns the "first header" state, so every run starts with a `#` header no
/// matter what earlier runs produced.
pub struct MarkdownWriter {
    out: String,
    first_header_pending: bool,
    stats: ConversionStats,
}

impl MarkdownWriter {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            first_header_pending: true,
            stats: ConversionStats::default(),
        }
    }

    /// Emits the fragment for the unit that starts at `index`.
    pub fn push(&mut self, lines: &SourceLines<'_>, index: usize, kind: LineKind) {
        let Some(line) = lines.get(index) else {
            return;
        };
        let trimmed = line.trimmed();

        // a top border only reaches here as a non-table unit when its scan
        // found no bottom border, whichever kind it fell through to
        if !matches!(kind, LineKind::Table { .. }) && BoxGlyphs::is_top_border(trimmed) {
            self.stats.unterminated_tables += 1;
        }

        match kind {
            LineKind::Table { end } => {
                let table = Table::from_block(lines, index..=end);
                self.stats.tables += 1;
                self.stats.table_rows += table.rows.len();
                table.write_markdown(&mut self.out);
                self.out.push('\n');
            }
            LineKind::Blank => self.out.push('\n'),
            LineKind::HorizontalRule => {
                self.stats.rules += 1;
                self.line("---");
            }
            LineKind::Bullet => {
                self.stats.bullets += 1;
                self.line(&TerminalLineClassifier::format_bullet(trimmed));
            }
            LineKind::Header => {
                let prefix = if std::mem::take(&mut self.first_header_pending) {
                    "#"
                } else {
                    "##"
                };
                self.stats.headers += 1;
                self.line(&format!("{prefix} {trimmed}"));
            }
            LineKind::SubHeader => {
                self.stats.sub_headers += 1;
                self.line(&format!("**{trimmed}**"));
            }
            LineKind::Plain => self.line(trimmed),
        }
    }

    /// Returns the document with trailing blank lines and whitespace removed.
    pub fn finish(self, input_lines: usize) -> (String, ConversionStats) {
        let markdown = self.out.trim_end().to_string();
        let stats = ConversionStats {
            input_lines,
            output_lines: if markdown.is_empty() {
                0
            } else {
                markdown.lines().count()
            },
            ..self.stats
        };
        (markdown, stats)
    }

    fn line(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push('\n');
    }
}

impl Default for MarkdownWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_header_is_level_one_then_level_two() {
        let lines = SourceLines::split("One\n\nTwo\n\nThree");
        let mut writer = MarkdownWriter::new();
        for index in [0, 2, 4] {
            writer.push(&lines, index, LineKind::Header);
        }
        let (markdown, stats) = writer.finish(lines.len());
        assert_eq!(markdown, "# One\n## Two\n## Three");
        assert_eq!(stats.headers, 3);
    }

    #[test]
    fn fresh_writer_starts_with_level_one() {
        let lines = SourceLines::split("Title");
        let mut first = MarkdownWriter::new();
        first.push(&lines, 0, LineKind::Header);
        let mut second = MarkdownWriter::new();
        second.push(&lines, 0, LineKind::Header);
        assert_eq!(first.finish(1).0, second.finish(1).0);
    }

    #[test]
    fn finish_trims_trailing_blank_lines() {
        let lines = SourceLines::split("text\n\n\n");
        let mut writer = MarkdownWriter::new();
        writer.push(&lines, 0, LineKind::Plain);
        writer.push(&lines, 1, LineKind::Blank);
        writer.push(&lines, 2, LineKind::Blank);
        let (markdown, stats) = writer.finish(lines.len());
        assert_eq!(markdown, "text");
        assert_eq!(stats.input_lines, 4);
        assert_eq!(stats.output_lines, 1);
    }

    #[test]
    fn sub_header_is_bold() {
        let lines = SourceLines::split("  Next steps:");
        let mut writer = MarkdownWriter::new();
        writer.push(&lines, 0, LineKind::SubHeader);
        assert_eq!(writer.finish(1).0, "**Next steps:**");
    }

    #[test]
    fn counts_orphaned_top_borders() {
        let lines = SourceLines::split("┌──┐");
        let mut writer = MarkdownWriter::new();
        writer.push(&lines, 0, LineKind::Plain);
        let (markdown, stats) = writer.finish(1);
        assert_eq!(markdown, "┌──┐");
        assert_eq!(stats.unterminated_tables, 1);
    }

    #[test]
    fn counts_orphaned_top_border_rendered_as_sub_header() {
        let lines = SourceLines::split("┌──┐:");
        let mut writer = MarkdownWriter::new();
        writer.push(&lines, 0, LineKind::SubHeader);
        let (markdown, stats) = writer.finish(1);
        assert_eq!(markdown, "**┌──┐:**");
        assert_eq!(stats.sub_headers, 1);
        assert_eq!(stats.unterminated_tables, 1);
    }

    #[test]
    fn closed_table_is_not_counted_as_unterminated() {
        let lines = SourceLines::split("┌───┐\n│ A │\n└───┘");
        let mut writer = MarkdownWriter::new();
        writer.push(&lines, 0, LineKind::Table { end: 2 });
        let (_, stats) = writer.finish(lines.len());
        assert_eq!(stats.tables, 1);
        assert_eq!(stats.unterminated_tables, 0);
    }
}
