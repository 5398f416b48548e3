//! Lexical errors.
//!
//! Every error in this grammar is an unterminated delimited construct, found
//! when the reader runs into the end of input. The error carries the position
//! of the opening delimiter so the diagnostic points at the construct the user
//! forgot to close.

use crate::Span;

/// What kind of lexical error occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// Missing closing `'`.
    UnclosedChar,
    /// Missing closing `"`.
    UnclosedString,
    /// `\` with no `>` after it.
    UnclosedLambda,
    /// `{#` with no `#}` after it.
    UnclosedPragma,
}

impl LexErrorKind {
    pub const fn message(self) -> &'static str {
        match self {
            LexErrorKind::UnclosedChar => "Unclosed character literal",
            LexErrorKind::UnclosedString => "Unclosed string literal",
            LexErrorKind::UnclosedLambda => "Unclosed lambda expression",
            LexErrorKind::UnclosedPragma => "Unclosed GHC extension",
        }
    }

    /// The delimiter that was expected but never found.
    pub const fn expected(self) -> &'static str {
        match self {
            LexErrorKind::UnclosedChar => "'",
            LexErrorKind::UnclosedString => "\"",
            LexErrorKind::UnclosedLambda => ">",
            LexErrorKind::UnclosedPragma => "#}",
        }
    }
}

/// A lexical error at a 1-based line/column.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("Error on line {line}, column {column}: {}", .kind.message())]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: u32,
    pub column: u32,
    /// From the opening delimiter to where scanning gave up.
    pub span: Span,
}

impl LexError {
    pub fn new(kind: LexErrorKind, line: u32, column: u32, span: Span) -> Self {
        LexError {
            kind,
            line,
            column,
            span,
        }
    }

    pub fn message(&self) -> &'static str {
        self.kind.message()
    }
}
