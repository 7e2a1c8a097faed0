//! In-memory tabular dataset.

use std::fmt;

use csv::ReaderBuilder;

use crate::error::{LoadError, LoadResult};

/// A header row plus data rows, all as text.
///
/// Every row has exactly as many fields as there are headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column names
    pub headers: Vec<String>,

    /// Data rows
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Parse delimited text whose first record is the header.
    ///
    /// Short rows are padded with empty fields; rows longer than the header
    /// are rejected.
    pub fn parse(content: &str, delimiter: u8) -> LoadResult<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| LoadError::Parse(format!("Failed to read CSV headers: {}", e)))?
            .iter()
            .map(str::to_string)
            .collect();

        if headers.is_empty() {
            return Err(LoadError::Parse("No columns to parse".to_string()));
        }

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                LoadError::Parse(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            if record.len() > headers.len() {
                return Err(LoadError::Parse(format!(
                    "Row {} has {} fields, expected {}",
                    index + 1,
                    record.len(),
                    headers.len()
                )));
            }

            let mut row: Vec<String> = record.iter().map(str::to_string).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(Self { headers, rows })
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// All values of a named column.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.headers.iter().position(|h| h == name)?;
        Some(self.rows.iter().map(|row| row[index].as_str()).collect())
    }

    /// Table view limited to the first `n` rows.
    pub fn head(&self, n: usize) -> Preview<'_> {
        Preview {
            table: self,
            rows: n.min(self.rows.len()),
        }
    }
}

/// Aligned text rendering of the first rows of a [`Table`].
#[derive(Debug, Clone, Copy)]
pub struct Preview<'a> {
    table: &'a Table,
    rows: usize,
}

impl fmt::Display for Preview<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = &self.table.rows[..self.rows];

        let widths: Vec<usize> = self
            .table
            .headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                rows.iter()
                    .map(|row| row[i].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write_row(f, &self.table.headers, &widths)?;
        for row in rows {
            write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

fn write_row(f: &mut fmt::Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect();
    writeln!(f, "{}", padded.join("  ").trim_end())
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.head(self.rows.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let table = Table::parse("name,age,city\nAlice,30,NYC\nBob,25,LA", b',').unwrap();
        assert_eq!(table.headers, vec!["name", "age", "city"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.column("age"), Some(vec!["30", "25"]));
        assert_eq!(table.column("missing"), None);
    }

    #[test]
    fn test_quoted_fields() {
        let table = Table::parse("a;b\n\"x;y\";2", b';').unwrap();
        assert_eq!(table.rows[0], vec!["x;y", "2"]);
    }

    #[test]
    fn test_short_rows_padded() {
        let table = Table::parse("a,b,c\n1,2", b',').unwrap();
        assert_eq!(table.rows[0], vec!["1", "2", ""]);
    }

    #[test]
    fn test_long_rows_rejected() {
        let err = Table::parse("a,b\n1,2,3", b',').unwrap_err();
        assert!(err.to_string().contains("Row 1 has 3 fields"));
    }

    #[test]
    fn test_empty_content_rejected() {
        assert!(Table::parse("", b',').is_err());
    }

    #[test]
    fn test_preview() {
        let table = Table::parse("id,name\n1,Ana\n22,Bruno\n3,Carla", b',').unwrap();
        let preview = table.head(2).to_string();
        assert_eq!(preview, "id  name\n1   Ana\n22  Bruno\n");
    }
}
