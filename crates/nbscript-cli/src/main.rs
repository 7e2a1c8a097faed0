//! nbscript CLI - analyst utilities for notebooks and delimited files.

mod colors;
mod convert;
mod load;

use clap::{Parser, Subcommand};

/// Notebook converted when none is given on the command line.
const DEMO_NOTEBOOK: &str = "exemplo.ipynb";

#[derive(Parser)]
#[command(name = "nbscript")]
#[command(about = "Convert Jupyter notebooks to plain scripts and load CSV files")]
#[command(version)]
struct Cli {
    /// Subcommand; converts the demo notebook when omitted
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a notebook (.ipynb) to a Python script (.py)
    Convert {
        /// Path to the notebook (.ipynb file)
        #[arg(default_value = DEMO_NOTEBOOK)]
        notebook: String,

        /// Output path (defaults to the notebook path with a .py extension)
        #[arg(short, long)]
        output: Option<String>,

        /// Re-convert whenever the notebook changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Load a CSV/text file, detecting encoding and delimiter
    Load {
        /// Path to the delimited file
        file: String,

        /// Number of leading bytes used for detection
        #[arg(long, default_value_t = nbscript_csv::DEFAULT_SAMPLE_BYTES)]
        sample_bytes: usize,

        /// Number of rows to preview
        #[arg(long, default_value = "5")]
        preview: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let command = cli.command.unwrap_or(Commands::Convert {
        notebook: DEMO_NOTEBOOK.to_string(),
        output: None,
        watch: false,
    });

    match command {
        Commands::Convert {
            notebook,
            output,
            watch,
        } => convert::execute(&notebook, output.as_deref(), watch),

        Commands::Load {
            file,
            sample_bytes,
            preview,
        } => load::execute(&file, sample_bytes, preview),
    }

    Ok(())
}
