//! Reading Markdown input and writing HTML output.
//!
//! The path `-` stands for stdin on input and stdout on output.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Path meaning the standard streams.
pub const STDIO: &str = "-";

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO
}

/// Read all lines of the input, newline-stripped.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD. An input without any
/// lines is an error.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let read_err = |source: io::Error| Error::Read {
        path: path.to_path_buf(),
        source,
    };

    let bytes = if is_stdio(path) {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf).map_err(read_err)?;
        buf
    } else {
        fs::read(path).map_err(read_err)?
    };
    let text = decode(path, bytes);

    let lines: Vec<String> = text.lines().map(str::to_owned).collect();
    if lines.is_empty() {
        return Err(Error::EmptyInput(path.to_path_buf()));
    }
    log::debug!("read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

fn decode(path: &Path, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            log::warn!(
                "{} is not valid UTF-8; invalid bytes replaced",
                path.display()
            );
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    }
}

/// Write the output, replacing any existing file.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    let write_err = |source: io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if is_stdio(path) {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes()).map_err(write_err)?;
        stdout.flush().map_err(write_err)
    } else {
        fs::write(path, content).map_err(write_err)
    }
}

/// Default output path when none is given.
pub fn default_output() -> PathBuf {
    PathBuf::from("output.html")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mdhtml-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_read_lines_strips_newlines() {
        let path = temp_path("read.md");
        fs::write(&path, "# A\r\n\nb\n").unwrap();
        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, ["# A", "", "b"]);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_invalid_utf8_is_replaced() {
        let path = temp_path("latin1.md");
        fs::write(&path, b"# Caf\xe9\nplain\n").unwrap();
        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, ["# Caf\u{FFFD}", "plain"]);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_lines(Path::new("/definitely/not/here.md")).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(err.to_string().contains("/definitely/not/here.md"));
    }

    #[test]
    fn test_read_empty_file() {
        let path = temp_path("empty.md");
        fs::write(&path, "").unwrap();
        let err = read_lines(&path).unwrap_err();
        assert!(matches!(err, Error::EmptyInput(_)));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_output() {
        let path = temp_path("out.html");
        write_output(&path, "<div></div>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<div></div>");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_write_into_missing_dir() {
        let err = write_output(Path::new("/definitely/not/here/out.html"), "x").unwrap_err();
        assert!(matches!(err, Error::Write { .. }));
    }
}
