//! Error types for notebook conversion.

use std::path::PathBuf;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors that can occur while converting a notebook to a script.
///
/// Every variant is raised before or during the single write of the output
/// file, so the first three never leave anything on disk.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// The input path does not carry the `.ipynb` extension.
    #[error("Input must be a Jupyter notebook (.ipynb): {path}")]
    InvalidInputKind { path: PathBuf },

    /// The input path could not be read.
    #[error("Notebook not found: {path}: {message}")]
    SourceNotFound { path: PathBuf, message: String },

    /// The document could not be parsed into a cell sequence.
    #[error("Malformed notebook {path}: {message}")]
    MalformedDocument { path: PathBuf, message: String },

    /// The output script could not be written.
    #[error("Failed to write file {path}: {message}")]
    WriteFailure { path: PathBuf, message: String },
}

impl ConvertError {
    /// Path of the file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::InvalidInputKind { path }
            | Self::SourceNotFound { path, .. }
            | Self::MalformedDocument { path, .. }
            | Self::WriteFailure { path, .. } => path,
        }
    }
}
