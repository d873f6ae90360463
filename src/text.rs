//! Byte-column helpers for fixed-width text lists.
//!
//! Column offsets in the published formats count bytes, so slicing happens
//! on bytes and never panics on a multi-byte character straddling a boundary.

use std::borrow::Cow;

/// Bytes `[start, end)` of `line`, clamped to the line length.
pub fn slice(line: &str, start: usize, end: usize) -> Cow<'_, str> {
    let bytes = line.as_bytes();
    let end = end.min(bytes.len());
    let start = start.min(end);
    String::from_utf8_lossy(&bytes[start..end])
}

/// Bytes `[start, ..)` of `line`.
pub fn slice_from(line: &str, start: usize) -> Cow<'_, str> {
    slice(line, start, line.len())
}

/// Trim ASCII whitespace only, leaving e.g. U+00A0 in place.
pub fn trim_ascii(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_ascii_whitespace())
}
