//! Error types for the CSV loader.

use std::path::PathBuf;

/// Result type for load operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur while loading a delimited file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file does not exist.
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },

    /// The file exists but could not be read.
    #[error("Failed to read file {path}: {message}")]
    Read { path: PathBuf, message: String },

    /// The decoded text is not a valid table.
    #[error("Parse error: {0}")]
    Parse(String),
}
