//! Character encoding detection.
//!
//! Looks at the first bytes of a file and guesses how it was encoded:
//! a byte-order mark wins outright, then UTF-8 validity, then a windows-1252
//! plausibility score for legacy Western European exports.

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

/// Confidence below which a windows-1252 guess is discarded.
const MIN_LEGACY_CONFIDENCE: f32 = 0.5;

/// Result of sniffing a byte sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EncodingGuess {
    /// Detected encoding
    pub encoding: &'static Encoding,

    /// Confidence in `0.0..=1.0`
    pub confidence: f32,
}

impl EncodingGuess {
    fn new(encoding: &'static Encoding, confidence: f32) -> Self {
        Self {
            encoding,
            confidence,
        }
    }
}

/// Guess the encoding of a byte sample.
///
/// Returns `None` when the sample is empty or no candidate is plausible.
pub fn sniff_encoding(sample: &[u8]) -> Option<EncodingGuess> {
    if sample.is_empty() {
        return None;
    }

    if let Some((encoding, _bom_len)) = Encoding::for_bom(sample) {
        return Some(EncodingGuess::new(encoding, 1.0));
    }

    match std::str::from_utf8(sample) {
        Ok(text) if text.is_ascii() => return Some(EncodingGuess::new(UTF_8, 1.0)),
        Ok(_) => return Some(EncodingGuess::new(UTF_8, 0.99)),
        // A multi-byte sequence cut off by the end of the sample.
        Err(e) if e.error_len().is_none() => return Some(EncodingGuess::new(UTF_8, 0.99)),
        Err(_) => {}
    }

    let confidence = legacy_confidence(sample);
    if confidence >= MIN_LEGACY_CONFIDENCE {
        Some(EncodingGuess::new(WINDOWS_1252, confidence))
    } else {
        None
    }
}

/// Share of non-ASCII characters that decode to letters under windows-1252.
fn legacy_confidence(sample: &[u8]) -> f32 {
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(sample);

    let mut non_ascii = 0usize;
    let mut letters = 0usize;
    for c in text.chars().filter(|c| !c.is_ascii()) {
        non_ascii += 1;
        if c.is_alphabetic() {
            letters += 1;
        }
    }

    if non_ascii == 0 {
        return 0.0;
    }
    letters as f32 / non_ascii as f32
}
