//! Utility functions for string processing.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for comparison: NFC compose, then lowercase.
///
/// Composition makes "é" typed as one code point and "e" + U+0301 compare
/// equal. Diacritics are kept: "café" and "cafe" are different products.
/// Inner whitespace is left alone so `contains` behaves like the user expects.
#[cfg(feature = "unicode-normalization")]
pub fn normalize(value: &str) -> String {
    value.nfc().collect::<String>().to_lowercase()
}

/// Lowercase only. Assumes input is ASCII or pre-composed.
#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize(value: &str) -> String {
    value.to_lowercase()
}

/// Byte ranges of every non-overlapping occurrence of `needle` in `haystack`,
/// compared case-insensitively, left to right.
///
/// Ranges index into the original `haystack`, so callers can slice it directly.
/// Matching is done per character so that lowercasing that changes byte length
/// (e.g. 'İ') never produces ranges off a char boundary.
pub fn match_spans(haystack: &str, needle: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = needle.trim().chars().map(fold_char).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    let chars: Vec<(usize, char)> = haystack
        .char_indices()
        .map(|(i, c)| (i, fold_char(c)))
        .collect();

    let mut spans = Vec::new();
    let mut i = 0;
    while i + needle.len() <= chars.len() {
        let window = &chars[i..i + needle.len()];
        if window.iter().map(|(_, c)| *c).eq(needle.iter().copied()) {
            let start = window[0].0;
            let end = chars
                .get(i + needle.len())
                .map(|(idx, _)| *idx)
                .unwrap_or(haystack.len());
            spans.push((start, end));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    spans
}

/// Single-char lowercase fold; characters whose lowercase form is several
/// chars keep their first one.
fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
