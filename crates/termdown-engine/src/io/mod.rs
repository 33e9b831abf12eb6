use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub const MARKDOWN_EXTENSION: &str = "md";

/// Read input text from a file, or from stdin when no path is given
pub fn read_input(path: Option<&Path>) -> Result<String, IoError> {
    match path {
        Some(path) => read_file(path),
        None => read_stdin(),
    }
}

/// Read a text file as UTF-8
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    if path.is_dir() {
        return Err(IoError::InvalidInput(format!(
            "{} is a directory",
            path.display()
        )));
    }
    let bytes = fs::read(path).map_err(IoError::Io)?;
    String::from_utf8(bytes)
        .map_err(|_| IoError::InvalidInput(format!("{} is not valid UTF-8", path.display())))
}

fn read_stdin() -> Result<String, IoError> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .map_err(IoError::Io)?;
    Ok(content)
}

/// Write content to a file, creating parent directories if they don't exist
pub fn write_output(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

pub fn is_markdown_path(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(MARKDOWN_EXTENSION))
}

/// Appends `.md` unless the path already has that extension.
///
/// `notes.txt` becomes `notes.txt.md`, keeping the source extension visible.
pub fn markdown_file_name(path: &Path) -> PathBuf {
    if is_markdown_path(path) {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(MARKDOWN_EXTENSION);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt");

        let result = read_input(Some(&missing));

        assert!(matches!(result, Err(IoError::NotFound(path)) if path == missing));
    }

    #[test]
    fn test_read_directory_is_invalid() {
        let temp_dir = TempDir::new().unwrap();

        let result = read_file(temp_dir.path());

        assert!(matches!(result, Err(IoError::InvalidInput(_))));
    }

    #[test]
    fn test_read_non_utf8_is_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("binary.txt");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        assert!(matches!(read_file(&path), Err(IoError::InvalidInput(_))));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/out.md");

        write_output(&path, "# Title").unwrap();

        assert_eq!(read_file(&path).unwrap(), "# Title");
    }

    #[test]
    fn test_markdown_file_name() {
        assert_eq!(markdown_file_name(Path::new("report")), PathBuf::from("report.md"));
        assert_eq!(markdown_file_name(Path::new("report.md")), PathBuf::from("report.md"));
        assert_eq!(markdown_file_name(Path::new("report.MD")), PathBuf::from("report.MD"));
        assert_eq!(
            markdown_file_name(Path::new("out/report.txt")),
            PathBuf::from("out/report.txt.md")
        );
    }

    #[test]
    fn test_is_markdown_path() {
        assert!(is_markdown_path(Path::new("notes.md")));
        assert!(is_markdown_path(Path::new("NOTES.Md")));
        assert!(!is_markdown_path(Path::new("notes.txt")));
        assert!(!is_markdown_path(Path::new("md")));
    }
}
