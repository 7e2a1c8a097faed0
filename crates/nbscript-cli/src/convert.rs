//! Convert command implementation for nbscript CLI.
//!
//! Converts .ipynb notebooks to .py scripts and prints the compatibility
//! report. Conversion failures are reported on stdout and never abort the
//! process.

use std::path::Path;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::Context;
use nbscript_sync::{ConvertError, ConvertOptions, convert_notebook};
use notify_debouncer_mini::{DebounceEventResult, new_debouncer, notify::RecursiveMode};

use crate::colors;

/// Quiet period before a burst of file events triggers a conversion.
const WATCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Execute the convert command.
pub fn execute(notebook_path: &str, output_path: Option<&str>, watch: bool) {
    let path = Path::new(notebook_path);

    let mut options = ConvertOptions::new();
    if let Some(output) = output_path {
        options = options.with_output_path(output);
    }

    println!(
        "\n{}nbscript convert{} - Converting notebook to script",
        colors::BOLD,
        colors::RESET
    );
    println!("{}", "─".repeat(50));

    if notebook_path == crate::DEMO_NOTEBOOK {
        println!(
            "{}No notebook given, using demo path {}{}",
            colors::DIM,
            notebook_path,
            colors::RESET
        );
        println!("Usage: nbscript convert <path/to/notebook.ipynb>\n");
    }

    let converted = convert_file(path, &options);

    if watch && converted {
        println!(
            "\n{}Watching{} {} for changes...",
            colors::CYAN,
            colors::RESET,
            path.display()
        );
        println!("Press Ctrl+C to stop.\n");

        if let Err(err) = watch_and_convert(path, &options) {
            println!("  {}Error:{} {:#}", colors::RED, colors::RESET, err);
        }
    }
}

/// Convert a single file, printing the outcome. Returns whether it succeeded.
fn convert_file(path: &Path, options: &ConvertOptions) -> bool {
    let start = Instant::now();

    print!(
        "  {} ... ",
        path.file_name().unwrap_or_default().to_string_lossy()
    );
    colors::flush_stdout();

    match convert_notebook(path, options) {
        Ok(conversion) => {
            let elapsed = start.elapsed();
            println!(
                "{}✓{} ({:.2}ms)",
                colors::GREEN,
                colors::RESET,
                elapsed.as_secs_f64() * 1000.0
            );
            println!(
                "  {} cells → {}{}{}",
                conversion.cells,
                colors::BOLD,
                conversion.output_path.display(),
                colors::RESET
            );
            if conversion.skipped > 0 {
                println!(
                    "  {}{} raw cells skipped{}",
                    colors::DIM,
                    conversion.skipped,
                    colors::RESET
                );
            }

            if let Some(report) = conversion.report() {
                println!("\n{}{}{}", colors::YELLOW, report, colors::RESET);
            }
            true
        }
        Err(err) => {
            println!("{}✗{}", colors::RED, colors::RESET);
            println!("  {}Error:{} {}", colors::RED, colors::RESET, err);
            println!("  {}", hint(&err));
            false
        }
    }
}

/// Recovery hint for a conversion error.
fn hint(err: &ConvertError) -> &'static str {
    match err {
        ConvertError::InvalidInputKind { .. } => {
            "The input file must be a Jupyter notebook with the .ipynb extension."
        }
        ConvertError::SourceNotFound { .. } => "Check the notebook path and try again.",
        ConvertError::MalformedDocument { .. } => {
            "The file is not a valid notebook; open and re-save it in Jupyter."
        }
        ConvertError::WriteFailure { .. } => {
            "Check that the output directory exists and is writable."
        }
    }
}

/// Watch a notebook and convert on changes.
///
/// The parent directory is watched so that editors which save by replacing
/// the file keep being followed. A missing notebook is reported and the watch
/// continues until it reappears.
fn watch_and_convert(path: &Path, options: &ConvertOptions) -> anyhow::Result<()> {
    let watch_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .context("Notebook path has no file name")?
        .to_os_string();

    let (tx, rx) = mpsc::channel::<DebounceEventResult>();
    let mut debouncer =
        new_debouncer(WATCH_DEBOUNCE, tx).context("Failed to start file watcher")?;
    debouncer
        .watcher()
        .watch(watch_dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", watch_dir.display()))?;

    for result in rx {
        let events = match result {
            Ok(events) => events,
            Err(err) => {
                tracing::warn!("Watch error: {}", err);
                continue;
            }
        };

        let touched = events
            .iter()
            .any(|event| event.path.file_name() == Some(file_name.as_os_str()));
        if !touched {
            continue;
        }

        if path.exists() {
            println!("\nNotebook changed, converting...");
            convert_file(path, options);
        } else {
            println!(
                "\n{}Notebook removed,{} waiting for it to reappear...",
                colors::YELLOW,
                colors::RESET
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_every_error_has_a_hint() {
        let path = PathBuf::from("x.ipynb");
        let errors = [
            ConvertError::InvalidInputKind { path: path.clone() },
            ConvertError::SourceNotFound {
                path: path.clone(),
                message: String::new(),
            },
            ConvertError::MalformedDocument {
                path: path.clone(),
                message: String::new(),
            },
            ConvertError::WriteFailure {
                path,
                message: String::new(),
            },
        ];
        for err in &errors {
            assert!(!hint(err).is_empty());
        }
    }
}
