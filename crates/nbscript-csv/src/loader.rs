//! Three-stage loader: sniff encoding, sniff delimiter, parse.

use std::fs;
use std::io;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8};

use crate::delimiter::{DEFAULT_DELIMITER, delimiter_name, sniff_delimiter};
use crate::encoding::sniff_encoding;
use crate::error::{LoadError, LoadResult};
use crate::table::Table;

/// Bytes inspected for detection when no sample size is given.
pub const DEFAULT_SAMPLE_BYTES: usize = 20_000;

/// A parsed table together with the parameters used to read it.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    /// Parsed data
    pub table: Table,

    /// Encoding used to decode the file
    pub encoding: &'static Encoding,

    /// Detection confidence, `None` when the default encoding was assumed
    pub confidence: Option<f32>,

    /// Field delimiter used to split records
    pub delimiter: u8,

    /// Whether the delimiter was detected rather than defaulted
    pub delimiter_detected: bool,
}

/// Loader for delimited text files of unknown encoding and dialect.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    /// Number of leading bytes used for detection
    sample_bytes: usize,
}

impl Default for CsvLoader {
    fn default() -> Self {
        Self {
            sample_bytes: DEFAULT_SAMPLE_BYTES,
        }
    }
}

impl CsvLoader {
    /// Create a loader with the default sample size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of bytes inspected for detection.
    pub fn with_sample_bytes(mut self, sample_bytes: usize) -> Self {
        self.sample_bytes = sample_bytes;
        self
    }

    /// Number of bytes inspected for detection.
    pub fn sample_bytes(&self) -> usize {
        self.sample_bytes
    }

    /// Load and parse a file.
    pub fn load(&self, path: impl AsRef<Path>) -> LoadResult<LoadedTable> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Read {
                path: path.to_path_buf(),
                message: e.to_string(),
            },
        })?;

        let sample = &bytes[..bytes.len().min(self.sample_bytes)];

        let (encoding, confidence) = match sniff_encoding(sample) {
            Some(guess) => {
                tracing::debug!(
                    "Detected encoding {} ({:.2}%)",
                    guess.encoding.name(),
                    guess.confidence * 100.0
                );
                (guess.encoding, Some(guess.confidence))
            }
            None => {
                tracing::warn!("Could not detect encoding of {}, using UTF-8", path.display());
                (UTF_8, None)
            }
        };

        let (sample_text, _, _) = encoding.decode(sample);
        let sample_text = if sample.len() < bytes.len() {
            complete_lines(&sample_text)
        } else {
            &*sample_text
        };

        let (delimiter, delimiter_detected) = match sniff_delimiter(sample_text) {
            Some(delimiter) => {
                tracing::debug!("Detected delimiter '{}'", delimiter_name(delimiter));
                (delimiter, true)
            }
            None => {
                tracing::warn!(
                    "Could not detect delimiter of {}, using ','",
                    path.display()
                );
                (DEFAULT_DELIMITER, false)
            }
        };

        let (text, _, had_errors) = encoding.decode(&bytes);
        if had_errors {
            tracing::warn!(
                "{} contains bytes that are not valid {}; they were replaced",
                path.display(),
                encoding.name()
            );
        }

        let table = Table::parse(&text, delimiter)?;

        tracing::info!(
            "Loaded {} ({} rows × {} columns)",
            path.display(),
            table.row_count(),
            table.column_count()
        );

        Ok(LoadedTable {
            table,
            encoding,
            confidence,
            delimiter,
            delimiter_detected,
        })
    }
}

/// Drop a trailing partial line left by cutting the sample short.
fn complete_lines(text: &str) -> &str {
    match text.rfind('\n') {
        Some(end) => &text[..end],
        None => text,
    }
}

/// Load a delimited file, swallowing every failure.
///
/// Returns `None` when the file is missing or cannot be read or parsed; the
/// reason is logged. `sample_bytes` defaults to [`DEFAULT_SAMPLE_BYTES`].
pub fn load_csv(path: impl AsRef<Path>, sample_bytes: Option<usize>) -> Option<LoadedTable> {
    let loader = CsvLoader::new().with_sample_bytes(sample_bytes.unwrap_or(DEFAULT_SAMPLE_BYTES));
    match loader.load(path) {
        Ok(loaded) => Some(loaded),
        Err(e) => {
            tracing::error!("{}", e);
            None
        }
    }
}
