//! Character classification for the lexer.
//!
//! Byte predicates are the fast path: every one of them returns `false` for
//! the sentinel byte `0x00`, so they can drive [`Cursor::eat_while`] directly.
//! The `*_char` variants handle the non-ASCII case, where a letter may span
//! several bytes.
//!
//! [`Cursor::eat_while`]: crate::Cursor::eat_while

/// ASCII letter or `_`.
#[inline]
pub fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// ASCII letter, digit, `_` or `'` (as in `x'` and `foldl'`).
#[inline]
pub fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'\''
}

#[inline]
pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

/// Returns `true` for a byte that starts a multi-byte UTF-8 sequence.
#[inline]
pub fn is_utf8_lead(byte: u8) -> bool {
    byte >= 0xC0
}

/// Any alphabetic character or `_`.
#[inline]
pub fn is_ident_start_char(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Any alphanumeric character, `_` or `'`.
#[inline]
pub fn is_ident_continue_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '\''
}

/// A set of ASCII bytes, stored as a 128-bit mask.
///
/// Only bytes `1..=127` can be members. `0x00` is reserved for the sentinel
/// and never belongs to a set, so `set.contains(cursor.current())` is always
/// `false` at end of input.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ByteSet(u128);

impl ByteSet {
    pub const EMPTY: ByteSet = ByteSet(0);

    /// Build a set from a byte string, ignoring `0x00` and non-ASCII bytes.
    pub const fn from_bytes(bytes: &[u8]) -> Self {
        let mut set = Self::EMPTY;
        let mut i = 0;
        while i < bytes.len() {
            set = set.with(bytes[i]);
            i += 1;
        }
        set
    }

    /// Returns a copy of this set with `byte` added.
    ///
    /// `0x00` and bytes `>= 0x80` are ignored.
    #[must_use]
    pub const fn with(self, byte: u8) -> Self {
        if byte == 0 || byte >= 128 {
            return self;
        }
        ByteSet(self.0 | (1u128 << byte))
    }

    /// Add `byte` to the set.
    ///
    /// Returns `false` if the byte cannot be a member (`0x00` or non-ASCII).
    pub fn insert(&mut self, byte: u8) -> bool {
        if byte == 0 || byte >= 128 {
            return false;
        }
        self.0 |= 1u128 << byte;
        true
    }

    #[inline]
    pub const fn contains(self, byte: u8) -> bool {
        byte < 128 && self.0 & (1u128 << byte) != 0 && byte != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate the members in ascending byte order.
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (1u8..128).filter(move |&b| self.contains(b))
    }
}

impl std::fmt::Debug for ByteSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter().map(char::from)).finish()
    }
}

impl FromIterator<u8> for ByteSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for byte in iter {
            set.insert(byte);
        }
        set
    }
}
