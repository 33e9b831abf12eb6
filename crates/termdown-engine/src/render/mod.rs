//! Markdown to a self-contained, themed HTML page.

mod theme;

pub use theme::{Palette, Theme, UnknownTheme};

use pulldown_cmark::{Options, Parser, html};

pub const DEFAULT_TITLE: &str = "termdown";

const EMPTY_PLACEHOLDER: &str = "<p style='color:#888;font-style:italic'>No content yet.</p>";

const STYLESHEET: &str = r#"*, *::before, *::after { box-sizing: border-box; }

body {
  font-family: -apple-system, "Segoe UI", Roboto, Arial, sans-serif;
  font-size: 15px;
  line-height: 1.65;
  color: var(--fg);
  background: var(--bg);
  max-width: 860px;
  margin: 0 auto;
  padding: 24px 28px 48px;
}

h1 { font-size: 1.9em; border-bottom: 2px solid var(--h1-border); padding-bottom: .3em; margin-top: 1em; }
h2 { font-size: 1.45em; border-bottom: 1px solid var(--h2-border); padding-bottom: .25em; margin-top: 1.4em; }
h3 { font-size: 1.15em; margin-top: 1.2em; }
h1, h2, h3 { font-weight: 700; color: var(--heading-fg); }

p { margin: .6em 0; }

a { color: var(--link-fg); text-decoration: none; }
a:hover { text-decoration: underline; }

code {
  font-family: "Cascadia Code", Consolas, "Courier New", monospace;
  font-size: .88em;
  background: var(--code-bg);
  padding: 2px 5px;
  border-radius: 3px;
}

pre {
  background: var(--pre-bg);
  color: var(--pre-fg);
  padding: 14px 16px;
  border-radius: 6px;
  overflow-x: auto;
  font-size: .88em;
}
pre code { background: none; padding: 0; color: inherit; }

blockquote {
  border-left: 4px solid var(--bq-border);
  margin: 1em 0;
  padding: .4em 1em;
  color: var(--fg);
  background: var(--bq-bg);
  border-radius: 0 4px 4px 0;
}

hr { border: none; border-top: 2px solid var(--hr); margin: 1.5em 0; }

ul, ol { padding-left: 1.6em; margin: .5em 0; }
li { margin: .2em 0; }

table { border-collapse: collapse; width: 100%; margin: 1em 0; font-size: .93em; }
th {
  background: var(--th-bg);
  font-weight: 600;
  text-align: left;
  padding: 8px 12px;
  border: 1px solid var(--td-border);
  color: var(--fg);
}
td {
  padding: 7px 12px;
  border: 1px solid var(--td-border);
  vertical-align: top;
  color: var(--fg);
}
tr:nth-child(even) td { background: var(--td-even-bg); }
tr:hover td { background: var(--tr-hover-bg); }

strong { font-weight: 700; }
em { font-style: italic; }"#;

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub theme: Theme,
    /// Page title; [`DEFAULT_TITLE`] when unset.
    pub title: Option<String>,
}

impl RenderOptions {
    pub fn with_theme(theme: Theme) -> Self {
        Self { theme, title: None }
    }
}

/// Renders Markdown to a complete HTML document with inline styling.
///
/// Blank input renders a "No content yet." placeholder instead of an empty body.
pub fn render_html(markdown: &str, options: &RenderOptions) -> String {
    let body = if markdown.trim().is_empty() {
        EMPTY_PLACEHOLDER.to_string()
    } else {
        markdown_to_html(markdown)
    };
    wrap_page(&body, options)
}

/// [`render_html`] keyed by a dark-theme flag.
pub fn render_html_dark(markdown: &str, dark: bool) -> String {
    render_html(markdown, &RenderOptions::with_theme(Theme::from_dark_flag(dark)))
}

/// The HTML fragment for `markdown`, without the page around it.
pub fn markdown_to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(markdown, options);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

fn wrap_page(body: &str, options: &RenderOptions) -> String {
    let title = html_escape::encode_text(options.title.as_deref().unwrap_or(DEFAULT_TITLE));
    let variables = Palette::for_theme(options.theme).css_variables();

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\"/>\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\n\
         <title>{title}</title>\n\
         <style>\n{variables}\n\n{STYLESHEET}\n</style>\n\
         </head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n"
    )
}
