//! Load command implementation for nbscript CLI.
//!
//! Loads a delimited file with automatic detection and prints a summary.

use std::time::Instant;

use nbscript_csv::{CsvLoader, LoadedTable, delimiter_name};

use crate::colors;

/// Execute the load command.
///
/// Failures are printed and swallowed; the process always exits normally.
pub fn execute(file_path: &str, sample_bytes: usize, preview_rows: usize) {
    let start = Instant::now();

    println!(
        "\n{}nbscript load{} - {}{}{}",
        colors::BOLD,
        colors::RESET,
        colors::CYAN,
        file_path,
        colors::RESET
    );
    println!("{}", "─".repeat(50));

    let loader = CsvLoader::new().with_sample_bytes(sample_bytes);
    let loaded = match loader.load(file_path) {
        Ok(loaded) => loaded,
        Err(err) => {
            println!("{}✗ Error:{} {}", colors::RED, colors::RESET, err);
            return;
        }
    };

    print_detection(&loaded);

    let table = &loaded.table;
    println!("\n{}Summary{}", colors::BOLD, colors::RESET);
    println!("  Rows:    {}", table.row_count());
    println!("  Columns: {}", table.column_count());
    println!("  Names:   {}", table.headers.join(", "));

    if preview_rows > 0 {
        println!(
            "\n{}Preview{} {}(first {} rows){}",
            colors::BOLD,
            colors::RESET,
            colors::DIM,
            preview_rows.min(table.row_count()),
            colors::RESET
        );
        print!("{}", table.head(preview_rows));
    }

    println!("{}", "─".repeat(50));
    println!(
        "{}Loaded{} in {:.2}ms",
        colors::GREEN,
        colors::RESET,
        start.elapsed().as_secs_f64() * 1000.0
    );
}

/// Print the detected encoding and delimiter.
fn print_detection(loaded: &LoadedTable) {
    match loaded.confidence {
        Some(confidence) => println!(
            "{}✓{} Encoding:  {} (confidence {:.2}%)",
            colors::GREEN,
            colors::RESET,
            loaded.encoding.name(),
            confidence * 100.0
        ),
        None => println!(
            "{}⚠{} Encoding:  could not detect, using {}",
            colors::YELLOW,
            colors::RESET,
            loaded.encoding.name()
        ),
    }

    if loaded.delimiter_detected {
        println!(
            "{}✓{} Delimiter: '{}'",
            colors::GREEN,
            colors::RESET,
            delimiter_name(loaded.delimiter)
        );
    } else {
        println!(
            "{}⚠{} Delimiter: could not detect, using '{}'",
            colors::YELLOW,
            colors::RESET,
            delimiter_name(loaded.delimiter)
        );
    }
}
