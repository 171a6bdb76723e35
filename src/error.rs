//! Errors of the file I/O layer.
//!
//! Lexing, parsing and rendering cannot fail; only reading input and
//! writing output can.

use std::path::PathBuf;

/// Result alias for I/O operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not open input '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write output '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("input '{}' is empty", .0.display())]
    EmptyInput(PathBuf),
}
