//! CSV/text loader with automatic encoding and delimiter detection.
//!
//! ```text
//! file ──► first N bytes ──► sniff_encoding ──► decoded sample ──► sniff_delimiter
//!   │                             │                                      │
//!   └──────────► full decode ◄────┘                                      │
//!                     │                                                  │
//!                     └───────────────────► Table::parse ◄───────────────┘
//! ```
//!
//! Detection falls back to UTF-8 and `,` when inconclusive.

mod delimiter;
mod encoding;
mod error;
mod loader;
mod table;

pub use delimiter::{CANDIDATE_DELIMITERS, DEFAULT_DELIMITER, delimiter_name, sniff_delimiter};
pub use encoding::{EncodingGuess, sniff_encoding};
pub use error::{LoadError, LoadResult};
pub use loader::{CsvLoader, DEFAULT_SAMPLE_BYTES, LoadedTable, load_csv};
pub use table::{Preview, Table};
