//! Sentinel-terminated source buffer for zero-bounds-check scanning.
//!
//! The buffer guarantees a `0x00` sentinel byte after the source content,
//! so the scanner can look one or two bytes ahead without checking the
//! length first. The total size is rounded up to the next 64-byte boundary,
//! which also leaves padding for `peek()` near the end of the buffer.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Longest source, in bytes, a buffer holds.
///
/// Positions are `u32`, and the sentinel needs a position of its own.
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize - 1;

/// Sentinel-terminated source buffer.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_bytes..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// The original text, kept for `&str` slicing and char decoding.
    text: Box<str>,
    /// Length of the source content (excludes sentinel and padding).
    source_len: u32,
}

impl SourceBuffer {
    /// Create a new sentinel-terminated buffer from source code.
    ///
    /// A source longer than [`MAX_SOURCE_LEN`] bytes is cut at the last
    /// character boundary at or before that length.
    pub fn new(source: &str) -> Self {
        Self::with_limit(source, MAX_SOURCE_LEN)
    }

    fn with_limit(source: &str, limit: usize) -> Self {
        let text = clip(source, limit.min(MAX_SOURCE_LEN));
        let len = text.len();

        // Round up to next 64-byte boundary (minimum: source + 1 sentinel byte).
        let padded_len = (len + 1 + CACHE_LINE - 1) & !(CACHE_LINE - 1);

        // The sentinel (buf[len]) and padding are already 0x00.
        let mut buf = vec![0u8; padded_len];
        buf[..len].copy_from_slice(text.as_bytes());

        #[allow(
            clippy::cast_possible_truncation,
            reason = "len <= MAX_SOURCE_LEN which fits in u32"
        )]
        let source_len = len as u32;

        Self {
            buf,
            text: text.into(),
            source_len,
        }
    }

    /// Returns the source bytes (without sentinel or padding).
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Returns the source text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, &self.text, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source content is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

/// The longest prefix of `source` that is at most `limit` bytes and ends on a
/// character boundary.
fn clip(source: &str, limit: usize) -> &str {
    if source.len() <= limit {
        return source;
    }
    let mut end = limit;
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    source.get(..end).unwrap_or_default()
}
