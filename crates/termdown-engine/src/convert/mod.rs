//! # Terminal text to Markdown
//!
//! Single-pass conversion of captured terminal output (box-drawing tables,
//! standalone titles, bullet lists, rules, prose) into Markdown.
//!
//! ## Phases
//!
//! 1. **Line splitting** (`lines`): line endings are normalised and trailing
//!    whitespace is stripped; leading whitespace is kept for detection.
//! 2. **Classification** (`classify`): `TerminalLineClassifier` assigns each
//!    unit a `LineKind` by fixed priority. A table unit spans several lines.
//! 3. **Emission** (`writer`): `MarkdownWriter` renders each unit, with tables
//!    delegated to `table`.
//!
//! ## Key Invariants
//!
//! - Every input line belongs to exactly one unit
//! - A top border with no bottom border is consumed alone, as ordinary text
//! - All state lives in one call; conversion never fails

pub mod classify;
pub mod glyphs;
pub mod lines;
pub mod table;
pub mod writer;

pub use classify::{LineKind, TerminalLineClassifier};
pub use glyphs::BoxGlyphs;
pub use lines::{SourceLine, SourceLines};
pub use table::{Table, TableScan};
pub use writer::{ConversionStats, MarkdownWriter};

/// Markdown produced from one input, with counts for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub markdown: String,
    pub stats: ConversionStats,
}

/// Converts terminal text to Markdown. Blank input gives an empty string.
pub fn convert(input: &str) -> String {
    convert_with_stats(input).markdown
}

pub fn convert_with_stats(input: &str) -> Conversion {
    if input.trim().is_empty() {
        return Conversion {
            markdown: String::new(),
            stats: ConversionStats::default(),
        };
    }

    let lines = SourceLines::split(input);
    let classifier = TerminalLineClassifier;
    let mut writer = MarkdownWriter::new();

    let mut index = 0;
    while index < lines.len() {
        let kind = classifier.classify(&lines, index);
        writer.push(&lines, index, kind);
        index = kind.next_index(index);
    }

    let (markdown, stats) = writer.finish(lines.len());
    Conversion { markdown, stats }
}
