pub mod convert;
pub mod io;
pub mod render;

// Re-export key types for easier usage
pub use convert::{Conversion, ConversionStats, convert, convert_with_stats};
pub use io::IoError;
pub use render::{RenderOptions, Theme, render_html, render_html_dark};
