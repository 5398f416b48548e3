//! Token model produced by the scanner.

use std::fmt;

/// Half-open byte range `[start, end)` into the source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// The byte range as `usize`, for indexing into the source.
    #[inline]
    pub fn range(self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    /// Character literal. The token text is the body between the quotes.
    Char,
    /// String literal. The token text is the body between the quotes.
    String,
    /// Lambda head: the fragment between `\` and the first `>`.
    Lambda,
    Operator,
    Punctuation,
    /// GHC-style `{# ... #}` block. The token text is the untrimmed body.
    Pragma,
}

impl TokenKind {
    /// Human-readable name, as shown by `haskc lex`.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::Char => "Char",
            TokenKind::String => "String",
            TokenKind::Lambda => "Lambda",
            TokenKind::Operator => "Operator",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::Pragma => "Pragma",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified lexeme.
///
/// `line` and `column` are the 1-based position of the first character of the
/// lexeme (the opening delimiter for delimited kinds). `span` covers the whole
/// lexeme including delimiters, while `text` holds only the body for
/// `Char`, `String`, `Lambda` and `Pragma` tokens.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub column: u32,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32, column: u32, span: Span) -> Self {
        Token {
            kind,
            text: text.into(),
            line,
            column,
            span,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
