use std::ops::RangeInclusive;

use super::glyphs::BoxGlyphs;
use super::lines::SourceLines;

/// Outcome of looking for the bottom border that closes a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableScan {
    /// The block spans `start..=end`, where `end` is the bottom border.
    Closed { end: usize },
    /// No bottom border before the end of input.
    Unterminated,
}

impl TableScan {
    /// Scans forward from the line after `start` for the first bottom border.
    pub fn from_top_border(lines: &SourceLines<'_>, start: usize) -> Self {
        lines
            .iter()
            .enumerate()
            .skip(start + 1)
            .find(|(_, line)| BoxGlyphs::is_bottom_border(line.trimmed()))
            .map_or(TableScan::Unterminated, |(end, _)| TableScan::Closed { end })
    }
}

/// Cell text of the data rows of one box-drawing table, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<'a> {
    pub rows: Vec<Vec<&'a str>>,
}

impl<'a> Table<'a> {
    /// Collects data rows from the block; border and separator rows are skipped.
    pub fn from_block(lines: &SourceLines<'a>, block: RangeInclusive<usize>) -> Self {
        let mut rows = Vec::new();

        for index in block {
            let Some(line) = lines.get(index) else {
                break;
            };
            let trimmed = line.trimmed();

            if BoxGlyphs::is_data_row(trimmed) {
                rows.push(parse_data_row(trimmed));
            } else if !is_drawing_only(trimmed) {
                log::debug!("ignoring non-row line {index} inside table: {trimmed:?}");
            }
        }

        Self { rows }
    }

    /// Writes a pipe table. The first data row becomes the header, whatever the
    /// source looked like, and later rows are passed through with their own width.
    pub fn write_markdown(&self, out: &mut String) {
        let mut rows = self.rows.iter();

        let Some(header) = rows.next() else {
            return;
        };
        out.push_str(&markdown_row(header));
        out.push('\n');
        out.push_str(&separator_row(header.len()));
        out.push('\n');

        for row in rows {
            out.push_str(&markdown_row(row));
            out.push('\n');
        }
    }
}

/// Splits `│ a │ b │` into `["a", "b"]`. Empty cells are kept.
pub fn parse_data_row(trimmed: &str) -> Vec<&str> {
    let mut cells: Vec<&str> = trimmed.split(BoxGlyphs::VERTICAL).skip(1).map(str::trim).collect();
    // the segment after the closing bar
    cells.pop();
    cells
}

pub fn markdown_row(cells: &[&str]) -> String {
    format!("| {} |", cells.join(" | "))
}

pub fn separator_row(columns: usize) -> String {
    format!("| {} |", vec!["---"; columns].join(" | "))
}

fn is_drawing_only(trimmed: &str) -> bool {
    trimmed
        .chars()
        .all(|c| c.is_whitespace() || BoxGlyphs::ALL.contains(&c))
}
