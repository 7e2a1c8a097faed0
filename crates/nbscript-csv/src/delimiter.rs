//! Field delimiter detection.

/// Delimiters considered, in tie-break order.
pub const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'|', b'\t'];

/// Delimiter used when sniffing is inconclusive.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Number of non-empty lines inspected.
const MAX_SAMPLE_LINES: usize = 10;

/// Guess the field delimiter of a text sample.
///
/// Each candidate is scored by how often it appears per line and how
/// consistent that count is across lines. Returns `None` when no candidate
/// appears at all.
pub fn sniff_delimiter(sample: &str) -> Option<u8> {
    let lines: Vec<&str> = sample
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(MAX_SAMPLE_LINES)
        .collect();

    if lines.is_empty() {
        return None;
    }

    let mut best: Option<(u8, f32)> = None;

    for &delimiter in &CANDIDATE_DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| line.bytes().filter(|&b| b == delimiter).count())
            .collect();

        let avg = counts.iter().sum::<usize>() as f32 / counts.len() as f32;
        let variance = counts
            .iter()
            .map(|&x| (x as f32 - avg).powi(2))
            .sum::<f32>()
            / counts.len() as f32;
        let score = avg / (1.0 + variance.sqrt());

        tracing::debug!(
            "Delimiter {:?}: avg {:.2}, score {:.3}",
            delimiter as char,
            avg,
            score
        );

        if score > 0.0 && best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((delimiter, score));
        }
    }

    best.map(|(delimiter, _)| delimiter)
}

/// Printable name of a delimiter.
pub fn delimiter_name(delimiter: u8) -> String {
    match delimiter {
        b'\t' => "\\t".to_string(),
        other => (other as char).to_string(),
    }
}
