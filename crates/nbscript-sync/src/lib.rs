//! Notebook-to-script converter.
//!
//! Rewrites a Jupyter notebook into a plain, linearly executable Python
//! script. Markdown cells become comment blocks; notebook-only constructs in
//! code cells (`%magics`, `!shell` escapes, `display(...)` calls) are
//! neutralized and collected into a compatibility report.
//!
//! # Architecture
//!
//! ```text
//! line ──► classify_line ──► LineKind
//!                               │
//! cell ──► render_cell ◄────────┘──► block of lines + NeutralizedSet
//!                │
//! notebook ──► assemble_script ──► RenderedScript ──► convert_notebook ──► .py
//! ```

mod classify;
mod convert;
mod error;
mod notebook;
mod render;
mod report;

pub use classify::{LineKind, classify_line};
pub use convert::{
    ConvertOptions, Conversion, NOTEBOOK_EXTENSION, SCRIPT_EXTENSION, convert_notebook,
    default_script_path, is_notebook_path,
};
pub use error::{ConvertError, ConvertResult};
pub use notebook::{Cell, CellKind, CellSource, JupyterCell, JupyterNotebook, Notebook};
pub use render::{RenderedScript, assemble_script, header_lines, render_cell, render_code_line};
pub use report::{CompatibilityReport, DISPLAY_SENTINEL, NeutralizedSet, Treatment};
