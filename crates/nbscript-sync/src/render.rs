//! Script rendering.
//!
//! Turns notebook cells into blocks of Python script text and assembles the
//! final script. Neutralized constructs are accumulated into a
//! [`NeutralizedSet`] passed in by the caller.

use crate::classify::{DISPLAY_CALL, LineKind, classify_line};
use crate::notebook::{Cell, CellKind, Notebook};
use crate::report::NeutralizedSet;

/// Replacement for the display callee.
const PRINT_CALL: &str = "print(";

/// Annotation appended to rewritten display lines.
const DISPLAY_NOTE: &str = " # Convertido de display() para print()";

/// Tag line opening a markdown block.
const MARKDOWN_TAG: &str = "# CÉLULA DE MARKDOWN";

/// Header line opening a code block.
const CODE_TAG: &str = "# --- Célula de Código ---";

/// Width of the `=` run in a rule line.
const RULE_WIDTH: usize = 78;

/// The assembled script and everything neutralized while building it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedScript {
    /// Full script text
    pub text: String,

    /// Distinct constructs neutralized across the whole document
    pub neutralized: NeutralizedSet,
}

/// Rule line delimiting markdown blocks.
fn rule_line() -> String {
    format!("#{}", "=".repeat(RULE_WIDTH))
}

/// Header block naming the origin document.
pub fn header_lines(source_name: &str) -> Vec<String> {
    vec![
        "# -*- coding: utf-8 -*-".to_string(),
        "\"\"\"".to_string(),
        format!("Script gerado automaticamente a partir de {}", source_name),
        "\"\"\"".to_string(),
        String::new(),
    ]
}

/// Render a single code line, recording any neutralization.
pub fn render_code_line(line: &str, neutralized: &mut NeutralizedSet) -> String {
    match classify_line(line) {
        LineKind::Ordinary => line.to_string(),
        kind @ (LineKind::LineMagic { .. } | LineKind::ShellEscape { .. }) => {
            if let Some(command) = kind.command() {
                neutralized.record_command(command);
            }
            format!("# {}", line)
        }
        LineKind::DisplayCall => {
            neutralized.record_display();
            let mut rewritten = line.replacen(DISPLAY_CALL, PRINT_CALL, 1);
            if !rewritten.contains('#') {
                rewritten.push_str(DISPLAY_NOTE);
            }
            rewritten
        }
    }
}

/// Render one cell into its block of script lines.
pub fn render_cell(cell: &Cell, neutralized: &mut NeutralizedSet) -> Vec<String> {
    let lines = cell.source.split('\n');

    match cell.kind {
        CellKind::Markdown => {
            let mut block = vec![rule_line(), MARKDOWN_TAG.to_string()];
            block.extend(lines.map(|line| format!("# {}", line)));
            block.push(rule_line());
            block.push(String::new());
            block
        }
        CellKind::Code => {
            let mut block = vec![CODE_TAG.to_string()];
            block.extend(lines.map(|line| render_code_line(line, neutralized)));
            block.push(String::new());
            block
        }
    }
}

/// Assemble the full script for a notebook.
///
/// `source_name` is the base filename shown in the header.
pub fn assemble_script(notebook: &Notebook, source_name: &str) -> RenderedScript {
    let mut neutralized = NeutralizedSet::new();
    let mut lines = header_lines(source_name);

    for cell in &notebook.cells {
        lines.extend(render_cell(cell, &mut neutralized));
    }

    RenderedScript {
        text: lines.join("\n"),
        neutralized,
    }
}
