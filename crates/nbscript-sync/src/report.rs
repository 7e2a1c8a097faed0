//! Compatibility report.
//!
//! Collects every distinct interactive-only construct neutralized during one
//! conversion and renders them as a sorted, human-readable summary.

use std::collections::BTreeSet;
use std::fmt;

/// Report key for converted display calls.
pub const DISPLAY_SENTINEL: &str = "display()";

/// How a construct was neutralized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Treatment {
    /// Rewritten into an equivalent script call.
    Converted,
    /// Kept in the script but disabled with `#`.
    CommentedOut,
}

impl Treatment {
    /// Label used in report lines.
    pub fn label(self) -> &'static str {
        match self {
            Treatment::Converted => "CONVERTED",
            Treatment::CommentedOut => "COMMENTED-OUT",
        }
    }
}

/// Set of distinct neutralized constructs for one conversion.
///
/// Ordered by codepoint so that the rendered report never depends on the
/// order in which constructs were encountered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeutralizedSet {
    constructs: BTreeSet<String>,
}

impl NeutralizedSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a commented-out magic or shell command.
    pub fn record_command(&mut self, command: &str) {
        self.constructs.insert(command.to_string());
    }

    /// Register a display call converted to print.
    pub fn record_display(&mut self) {
        self.record_command(DISPLAY_SENTINEL);
    }

    /// Whether nothing was neutralized.
    pub fn is_empty(&self) -> bool {
        self.constructs.is_empty()
    }

    /// Number of distinct constructs.
    pub fn len(&self) -> usize {
        self.constructs.len()
    }

    /// Whether the given token was recorded.
    pub fn contains(&self, token: &str) -> bool {
        self.constructs.contains(token)
    }

    /// Constructs in sorted order with their treatment.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Treatment)> + '_ {
        self.constructs.iter().map(|token| {
            let treatment = if token == DISPLAY_SENTINEL {
                Treatment::Converted
            } else {
                Treatment::CommentedOut
            };
            (token.as_str(), treatment)
        })
    }

    /// Build the printable report, or `None` when nothing was neutralized.
    pub fn report(&self) -> Option<CompatibilityReport<'_>> {
        if self.is_empty() {
            None
        } else {
            Some(CompatibilityReport { set: self })
        }
    }
}

/// Printable view of a non-empty [`NeutralizedSet`].
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityReport<'a> {
    set: &'a NeutralizedSet,
}

impl CompatibilityReport<'_> {
    /// One line per construct, sorted, without the surrounding banner.
    pub fn lines(&self) -> Vec<String> {
        self.set
            .iter()
            .map(|(token, treatment)| match treatment {
                Treatment::Converted => format!(
                    "   - [{}] '{}': replaced with 'print()'.",
                    treatment.label(),
                    token
                ),
                Treatment::CommentedOut => format!(
                    "   - [{}] '{}': line kept but disabled with '#'.",
                    treatment.label(),
                    token
                ),
            })
            .collect()
    }
}

impl fmt::Display for CompatibilityReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(50);
        writeln!(f, "{}", rule)?;
        writeln!(f, "COMPATIBILITY REPORT")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "The notebook contained Jupyter-specific commands that do not")?;
        writeln!(f, "work in plain scripts. They were handled as follows:")?;
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        write!(f, "{}", rule)
    }
}
