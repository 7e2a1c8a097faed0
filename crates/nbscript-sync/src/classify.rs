//! Line classification for code cells.
//!
//! Decides whether a line is an interactive-only construct that cannot run
//! in a plain script. The checks form an ordered chain: line-magic, then
//! shell-escape, then display call. The first match wins.

/// Callee of the interactive rendering call.
pub const DISPLAY_CALL: &str = "display(";

/// What a single code line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Plain code, emitted verbatim.
    Ordinary,
    /// `%magic` or `%%cell_magic` directive.
    LineMagic { command: String },
    /// `!program` shell escape.
    ShellEscape { command: String },
    /// Line containing a `display(` call.
    DisplayCall,
}

impl LineKind {
    /// Report key of a commented-out construct, if this line is one.
    pub fn command(&self) -> Option<&str> {
        match self {
            LineKind::LineMagic { command } | LineKind::ShellEscape { command } => Some(command),
            LineKind::Ordinary | LineKind::DisplayCall => None,
        }
    }
}

/// Classify one line of code-cell text.
pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();

    if trimmed.starts_with('%') {
        let command = trimmed.split_whitespace().next().unwrap_or(trimmed);
        return LineKind::LineMagic {
            command: command.to_string(),
        };
    }

    if let Some(rest) = trimmed.strip_prefix('!') {
        let program = rest.split_whitespace().next().unwrap_or("");
        return LineKind::ShellEscape {
            command: format!("!{}", program),
        };
    }

    if line.contains(DISPLAY_CALL) {
        return LineKind::DisplayCall;
    }

    LineKind::Ordinary
}
