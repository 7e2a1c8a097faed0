//! Notebook-to-script conversion.
//!
//! ```text
//! notebook.ipynb ──► validate ──► Notebook ──► assemble_script ──► notebook.py
//!                                                    │
//!                                                    ▼
//!                                             NeutralizedSet
//!                                        (compatibility report)
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConvertError, ConvertResult};
use crate::notebook::Notebook;
use crate::render::assemble_script;
use crate::report::{CompatibilityReport, NeutralizedSet};

/// Extension a notebook input must carry.
pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// Extension of the generated script.
pub const SCRIPT_EXTENSION: &str = "py";

/// Options for a single conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Output path. Derived from the notebook path when `None`.
    pub output_path: Option<PathBuf>,
}

impl ConvertOptions {
    /// Create options with a derived output path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the script to an explicit path.
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }
}

/// Result of a successful conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Where the script was written
    pub output_path: PathBuf,

    /// Number of cells rendered into the script
    pub cells: usize,

    /// Number of raw cells skipped
    pub skipped: usize,

    /// Constructs neutralized during the conversion
    pub neutralized: NeutralizedSet,
}

impl Conversion {
    /// Printable compatibility report, if anything was neutralized.
    pub fn report(&self) -> Option<CompatibilityReport<'_>> {
        self.neutralized.report()
    }
}

/// Whether a path names a notebook document.
pub fn is_notebook_path(path: impl AsRef<Path>) -> bool {
    path.as_ref()
        .extension()
        .is_some_and(|ext| ext == NOTEBOOK_EXTENSION)
}

/// Get the default script path for a notebook.
pub fn default_script_path(notebook_path: impl AsRef<Path>) -> PathBuf {
    notebook_path.as_ref().with_extension(SCRIPT_EXTENSION)
}

/// Convert a notebook into a plain script.
///
/// The script is fully assembled in memory before a single write, so the
/// output file is only touched once every earlier step has succeeded. An
/// existing file at the output path is overwritten.
pub fn convert_notebook(
    notebook_path: impl AsRef<Path>,
    options: &ConvertOptions,
) -> ConvertResult<Conversion> {
    let notebook_path = notebook_path.as_ref();

    if !is_notebook_path(notebook_path) {
        return Err(ConvertError::InvalidInputKind {
            path: notebook_path.to_path_buf(),
        });
    }

    let output_path = options
        .output_path
        .clone()
        .unwrap_or_else(|| default_script_path(notebook_path));

    let notebook = Notebook::read_from_file(notebook_path)?;

    let source_name = notebook_path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy();
    let script = assemble_script(&notebook, &source_name);

    fs::write(&output_path, &script.text).map_err(|e| ConvertError::WriteFailure {
        path: output_path.clone(),
        message: e.to_string(),
    })?;

    tracing::info!(
        "Converted {} → {} ({} cells, {} neutralized)",
        notebook_path.display(),
        output_path.display(),
        notebook.cells.len(),
        script.neutralized.len()
    );

    Ok(Conversion {
        output_path,
        cells: notebook.cells.len(),
        skipped: notebook.skipped,
        neutralized: script.neutralized,
    })
}
