use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme: {0} (expected \"light\" or \"dark\")")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

/// Colours used by the preview stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub heading: &'static str,
    pub h1_border: &'static str,
    pub h2_border: &'static str,
    pub code_background: &'static str,
    pub pre_background: &'static str,
    pub pre_foreground: &'static str,
    pub quote_background: &'static str,
    pub quote_border: &'static str,
    pub rule: &'static str,
    pub table_header_background: &'static str,
    pub cell_border: &'static str,
    pub even_row_background: &'static str,
    pub row_hover_background: &'static str,
    pub link: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: "#ffffff",
        foreground: "#1e1e1e",
        heading: "#111111",
        h1_border: "#e0e0e0",
        h2_border: "#e8e8e8",
        code_background: "#f3f3f3",
        pre_background: "#1e1e1e",
        pre_foreground: "#d4d4d4",
        quote_background: "#f0f7ff",
        quote_border: "#0078d4",
        rule: "#e0e0e0",
        table_header_background: "#f0f4f8",
        cell_border: "#d0d7de",
        even_row_background: "#f9fbfc",
        row_hover_background: "#eef4fb",
        link: "#0078d4",
    };

    pub const DARK: Palette = Palette {
        background: "#1e1e2e",
        foreground: "#cdd6f4",
        heading: "#cdd6f4",
        h1_border: "#45475a",
        h2_border: "#45475a",
        code_background: "#313244",
        pre_background: "#11111b",
        pre_foreground: "#cdd6f4",
        quote_background: "#1e2030",
        quote_border: "#89b4fa",
        rule: "#45475a",
        table_header_background: "#313244",
        cell_border: "#45475a",
        even_row_background: "#252535",
        row_hover_background: "#2a2a3a",
        link: "#89b4fa",
    };

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::LIGHT,
            Theme::Dark => Self::DARK,
        }
    }

    /// CSS custom properties consumed by the page stylesheet.
    pub fn css_variables(&self) -> String {
        let vars = [
            ("bg", self.background),
            ("fg", self.foreground),
            ("heading-fg", self.heading),
            ("h1-border", self.h1_border),
            ("h2-border", self.h2_border),
            ("code-bg", self.code_background),
            ("pre-bg", self.pre_background),
            ("pre-fg", self.pre_foreground),
            ("bq-bg", self.quote_background),
            ("bq-border", self.quote_border),
            ("hr", self.rule),
            ("th-bg", self.table_header_background),
            ("td-border", self.cell_border),
            ("td-even-bg", self.even_row_background),
            ("tr-hover-bg", self.row_hover_background),
            ("link-fg", self.link),
        ];

        let mut css = String::from(":root {\n");
        for (name, value) in vars {
            css.push_str(&format!("  --{name}: {value};\n"));
        }
        css.push('}');
        css
    }
}
