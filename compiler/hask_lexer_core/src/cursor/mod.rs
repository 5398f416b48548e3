//! Byte cursor over a sentinel-terminated buffer.
//!
//! The cursor advances through the buffer byte-by-byte. EOF is detected
//! when the position has reached the source length; the byte read there is
//! always the sentinel (`0x00`). An interior NUL in the source also reads as
//! `0x00`, so callers that care use [`Cursor::is_eof`] to tell them apart.

/// Byte cursor over a sentinel-terminated buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so a reader can snapshot it before a speculative
/// scan and restore it afterwards.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + sentinel + padding).
    buf: &'a [u8],
    /// The same source as `&str`, for slicing and char decoding.
    text: &'a str,
    /// Current read position (byte index into `buf`).
    pos: u32,
    /// Length of actual source content (excludes sentinel and padding).
    source_len: u32,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    ///
    /// # Contract
    ///
    /// `buf[source_len]` must be `0x00` and `buf[..source_len]` must equal
    /// `text.as_bytes()`. Both are guaranteed by `SourceBuffer::new()`.
    pub(crate) fn new(buf: &'a [u8], text: &'a str, source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            text,
            pos: 0,
            source_len,
        }
    }

    /// Returns the byte at the current position, `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current, `0x00` past EOF.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(1))
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        // Reads beyond the padding behave like the sentinel.
        self.buf.get(pos as usize).copied().unwrap_or(0)
    }

    /// Decode the full character starting at the current position.
    ///
    /// Returns `'\0'` at EOF, or if the position is not on a character
    /// boundary.
    pub fn current_char(&self) -> char {
        if self.is_eof() {
            return '\0';
        }
        self.text
            .get(self.pos as usize..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Advance the cursor by `n` bytes.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance the cursor past one full UTF-8 character.
    ///
    /// Never moves past the end of the source content.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.pos = self.pos.saturating_add(width).min(self.source_len);
    }

    /// Returns `true` if the cursor has reached EOF.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Length of the source content (excludes sentinel and padding).
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Move the cursor to EOF.
    pub fn seek_eof(&mut self) {
        self.pos = self.source_len;
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source content and on character
    /// boundaries. Scanner-produced boundaries always do, since every
    /// delimiter the scanner stops at is ASCII. A violating range yields `""`.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(
            end <= self.source_len,
            "slice end {end} exceeds source length {}",
            self.source_len
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        self.text.get(start as usize..end as usize).unwrap_or("")
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// # Contract
    ///
    /// `pred(0)` must return `false`, so the sentinel stops the loop. All
    /// predicates in [`char_class`](crate::char_class) and every
    /// [`ByteSet`](crate::ByteSet) satisfy this.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Remaining source content from the current position.
    #[inline]
    fn remaining(&self) -> &'a [u8] {
        let start = (self.pos.min(self.source_len)) as usize;
        &self.buf[start..self.source_len as usize]
    }

    /// Move forward by a memchr offset, which is bounded by the source length.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < remaining().len() <= source_len which fits in u32"
    )]
    #[inline]
    fn skip(&mut self, offset: usize) {
        self.pos += offset as u32;
    }

    /// Advance to the next occurrence of `byte`, or to EOF.
    ///
    /// Returns `true` if the byte was found; the cursor is then positioned on
    /// it. Interior NUL bytes are ordinary content here.
    pub fn eat_until(&mut self, byte: u8) -> bool {
        if let Some(offset) = memchr::memchr(byte, self.remaining()) {
            self.skip(offset);
            true
        } else {
            self.seek_eof();
            false
        }
    }

    /// Advance to the nearest occurrence of `a` or `b`, or to EOF.
    ///
    /// Returns the byte found, or `0` at EOF.
    pub fn eat_until_either(&mut self, a: u8, b: u8) -> u8 {
        if let Some(offset) = memchr::memchr2(a, b, self.remaining()) {
            self.skip(offset);
            self.current()
        } else {
            self.seek_eof();
            0
        }
    }

    /// Advance to the next occurrence of the two-byte sequence `first second`.
    ///
    /// Returns `true` if found; the cursor is then positioned on `first`.
    /// Otherwise the cursor ends at EOF.
    ///
    /// # Contract
    ///
    /// `second` must not be `0x00`, so the sentinel after a trailing `first`
    /// never completes a pair.
    pub fn eat_until_pair(&mut self, first: u8, second: u8) -> bool {
        debug_assert!(second != 0, "eat_until_pair: second byte must be non-zero");
        while self.eat_until(first) {
            if self.peek() == second {
                return true;
            }
            self.advance();
        }
        false
    }
}
