use std::path::{Path, PathBuf};

use clap::Parser;
use termdown_config::Config;
use termdown_engine::{Theme, io};

/// Convert captured terminal output into Markdown or a themed HTML page.
#[derive(Debug, Parser)]
#[command(name = "termdown", version, about)]
pub struct Cli {
    /// Input file; reads stdin when absent or `-`
    pub input: Option<PathBuf>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Emit a self-contained HTML page instead of Markdown
    #[arg(long)]
    pub html: bool,

    /// Theme for HTML output, `light` or `dark`
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Remember `--theme` in the config file
    #[arg(long, requires = "theme")]
    pub save_theme: bool,

    /// Treat the input as Markdown and skip conversion
    #[arg(long)]
    pub view: bool,

    /// Log line counts and what was detected
    #[arg(long)]
    pub stats: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The input file, or `None` for stdin.
    pub fn input_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// View mode is explicit, or implied by a `.md` input file.
    pub fn view_mode(&self) -> bool {
        self.view || self.input_path().is_some_and(io::is_markdown_path)
    }

    pub fn theme(&self, config: &Config) -> Theme {
        self.theme.unwrap_or(config.theme)
    }

    /// Where to write, if not stdout. Markdown output always gets an `.md` name.
    pub fn output_path(&self, config: &Config) -> Option<PathBuf> {
        self.output.as_deref().map(|path| {
            let path = if self.html {
                path.to_path_buf()
            } else {
                io::markdown_file_name(path)
            };
            config.resolve_output(&path)
        })
    }

    /// Page title for HTML output: the input file name without extension.
    pub fn title(&self) -> Option<String> {
        self.input_path()
            .and_then(Path::file_stem)
            .map(|stem| stem.to_string_lossy().into_owned())
    }
}
