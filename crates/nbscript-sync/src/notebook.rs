//! Jupyter notebook (.ipynb) reading.
//!
//! Only the parts of the nbformat v4 document that matter for conversion are
//! modelled: the ordered cell list, each cell's type and its source text.
//! Outputs, metadata and execution counts are ignored.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ConvertError, ConvertResult};

/// A notebook document as stored on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct JupyterNotebook {
    /// Notebook cells, in document order
    pub cells: Vec<JupyterCell>,

    /// Format version
    #[serde(default)]
    pub nbformat: Option<u32>,

    /// Minor format version
    #[serde(default)]
    pub nbformat_minor: Option<u32>,
}

/// A cell as stored on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct JupyterCell {
    /// Cell type discriminator (`markdown`, `code` or `raw`)
    pub cell_type: String,

    /// Cell source, either one string or a list of lines
    #[serde(default)]
    pub source: CellSource,
}

/// The two shapes nbformat allows for a cell's `source` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CellSource {
    Text(String),
    Lines(Vec<String>),
}

impl Default for CellSource {
    fn default() -> Self {
        CellSource::Text(String::new())
    }
}

impl CellSource {
    /// Normalize the source into a single newline-joined string.
    ///
    /// nbformat stores lines with their trailing `\n`, so list entries are
    /// concatenated and a separator is only inserted when the previous entry
    /// lacks one. Empty entries still count as lines.
    pub fn into_text(self) -> String {
        match self {
            CellSource::Text(text) => text,
            CellSource::Lines(lines) => {
                let mut text = String::new();
                let mut previous_terminated = true;
                for line in lines {
                    if !previous_terminated {
                        text.push('\n');
                    }
                    previous_terminated = line.ends_with('\n');
                    text.push_str(&line);
                }
                text
            }
        }
    }
}

/// Kind of a renderable cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Markdown documentation cell
    Markdown,
    /// Code cell
    Code,
}

/// A renderable cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Cell kind
    pub kind: CellKind,

    /// Raw multi-line source text
    pub source: String,
}

impl Cell {
    /// Create a markdown cell.
    pub fn markdown(source: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Markdown,
            source: source.into(),
        }
    }

    /// Create a code cell.
    pub fn code(source: impl Into<String>) -> Self {
        Self {
            kind: CellKind::Code,
            source: source.into(),
        }
    }
}

/// An ordered sequence of renderable cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notebook {
    /// Cells in document order
    pub cells: Vec<Cell>,

    /// Number of raw cells dropped while reading
    pub skipped: usize,
}

impl Notebook {
    /// Build a notebook from cells directly.
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells, skipped: 0 }
    }

    /// Read and parse a notebook file.
    pub fn read_from_file(path: impl AsRef<Path>) -> ConvertResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => ConvertError::MalformedDocument {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
            _ => ConvertError::SourceNotFound {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })?;

        Self::from_json(&content).map_err(|message| ConvertError::MalformedDocument {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse notebook JSON.
    ///
    /// Raw cells are skipped; any other unknown cell type is rejected.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let document: JupyterNotebook = serde_json::from_str(json).map_err(|e| e.to_string())?;

        match (document.nbformat, document.nbformat_minor) {
            (Some(major), Some(minor)) => tracing::debug!("Parsing nbformat {}.{}", major, minor),
            (Some(major), None) => tracing::debug!("Parsing nbformat {}", major),
            _ => tracing::debug!("Notebook does not declare nbformat"),
        }

        let mut notebook = Notebook::default();
        for (index, cell) in document.cells.into_iter().enumerate() {
            let kind = match cell.cell_type.as_str() {
                "markdown" => CellKind::Markdown,
                "code" => CellKind::Code,
                "raw" => {
                    tracing::debug!("Skipping raw cell {}", index);
                    notebook.skipped += 1;
                    continue;
                }
                other => return Err(format!("cell {} has unknown cell_type '{}'", index, other)),
            };
            notebook.cells.push(Cell {
                kind,
                source: cell.source.into_text(),
            });
        }

        Ok(notebook)
    }
}
