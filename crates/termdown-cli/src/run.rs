//! What the binary does once arguments, config and input are in hand.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use termdown_config::Config;
use termdown_engine::{ConversionStats, RenderOptions, convert_with_stats, io, render_html};

use crate::cli::Cli;

/// Text ready to write, plus the counts from converting it.
#[derive(Debug)]
pub struct Output {
    pub text: String,
    /// `None` in view mode, where nothing is converted.
    pub stats: Option<ConversionStats>,
}

/// Stores the selected theme in the config file at `config_path`.
pub fn save_theme(cli: &Cli, config: &Config, config_path: &Path) -> Result<Config> {
    let updated = Config {
        theme: cli.theme(config),
        ..config.clone()
    };
    updated
        .save_to_path(config_path)
        .context("Failed to save theme")?;
    Ok(updated)
}

/// Converts (or passes through, in view mode) and optionally renders HTML.
pub fn produce(cli: &Cli, config: &Config, input: String) -> Output {
    let (markdown, stats) = if cli.view_mode() {
        log::debug!("View mode: input is already Markdown");
        (input, None)
    } else {
        let conversion = convert_with_stats(&input);
        (conversion.markdown, Some(conversion.stats))
    };

    let text = if cli.html {
        let options = RenderOptions {
            theme: cli.theme(config),
            title: cli.title(),
        };
        render_html(&markdown, &options)
    } else {
        markdown
    };

    Output { text, stats }
}

/// Lines logged for `--stats`.
pub fn stats_report(stats: &ConversionStats) -> [String; 2] {
    [
        format!(
            "{} input lines → {} output lines",
            stats.input_lines, stats.output_lines
        ),
        format!(
            "tables: {} ({} rows), headers: {}, sub-headers: {}, bullets: {}, rules: {}",
            stats.tables,
            stats.table_rows,
            stats.headers,
            stats.sub_headers,
            stats.bullets,
            stats.rules
        ),
    ]
}

pub fn unterminated_warning(stats: &ConversionStats) -> Option<String> {
    (stats.unterminated_tables > 0).then(|| {
        format!(
            "{} table(s) had no closing border and were kept as text",
            stats.unterminated_tables
        )
    })
}

/// Writes to `destination`, or to `stdout` with a trailing newline.
pub fn write(text: &str, destination: Option<&Path>, stdout: &mut impl Write) -> Result<()> {
    match destination {
        Some(path) => io::write_output(path, text)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => writeln!(stdout, "{text}").context("Failed to write to stdout"),
    }
}
