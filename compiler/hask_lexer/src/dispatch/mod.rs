//! Dispatch decision: which reader handles the byte under the cursor.
//!
//! Several token classes share leading characters, so the order of the
//! checks in [`classify`] is part of the lexer's contract:
//!
//! 1. letter or `_` → [`Dispatch::Identifier`]
//! 2. ASCII digit → [`Dispatch::Number`]
//! 3. `'` → [`Dispatch::Char`]
//! 4. `"` → [`Dispatch::String`]
//! 5. `\` → [`Dispatch::Lambda`]
//! 6. `{#` → [`Dispatch::Pragma`]
//! 7. operator table → [`Dispatch::Operator`]
//! 8. punctuation table → [`Dispatch::Punctuation`]
//! 9. anything else → [`Dispatch::Skip`]
//!
//! End of input is [`Dispatch::Eof`].

use hask_lexer_core::char_class::{is_digit, is_ident_start, is_ident_start_char, is_utf8_lead};
use hask_lexer_core::Cursor;

use crate::ClassificationTables;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dispatch {
    Identifier,
    Number,
    Char,
    String,
    Lambda,
    Pragma,
    Operator,
    Punctuation,
    /// Consume one character without emitting a token.
    Skip,
    Eof,
}

/// Decide which reader handles the current cursor position.
///
/// Only inspects the cursor; never advances it.
pub fn classify(cursor: &Cursor<'_>, tables: &ClassificationTables) -> Dispatch {
    if cursor.is_eof() {
        return Dispatch::Eof;
    }
    let byte = cursor.current();
    if is_ident_start(byte) || (is_utf8_lead(byte) && is_ident_start_char(cursor.current_char())) {
        return Dispatch::Identifier;
    }
    match byte {
        b if is_digit(b) => Dispatch::Number,
        b'\'' => Dispatch::Char,
        b'"' => Dispatch::String,
        b'\\' => Dispatch::Lambda,
        b'{' if cursor.peek() == b'#' => Dispatch::Pragma,
        b if tables.is_operator(b) => Dispatch::Operator,
        b if tables.is_punctuation(b) => Dispatch::Punctuation,
        _ => Dispatch::Skip,
    }
}
