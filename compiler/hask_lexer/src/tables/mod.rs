//! Classification tables: keywords, operator characters, punctuation.
//!
//! Tables are plain immutable values. Build one up front and pass it by
//! reference to every scan; a single instance can be shared across threads.

use hask_lexer_core::ByteSet;
use rustc_hash::FxHashSet;

/// Reserved words of the standard table.
pub const HASKELL_KEYWORDS: &[&str] = &[
    "case", "class", "data", "default", "deriving", "do", "else", "foreign", "if", "import", "in",
    "infix", "infixl", "infixr", "instance", "let", "module", "newtype", "of", "then", "type",
    "where", "_",
];

/// Characters that form operator runs in the standard table.
pub const HASKELL_OPERATORS: ByteSet = ByteSet::from_bytes(b"+-*/=<>!&|^~:.@");

/// Single-character punctuation of the standard table.
pub const HASKELL_PUNCTUATION: ByteSet = ByteSet::from_bytes(b"(),;[]{}");

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassificationTables {
    keywords: FxHashSet<Box<str>>,
    operators: ByteSet,
    punctuation: ByteSet,
}

impl ClassificationTables {
    /// Tables with no keywords and no operator or punctuation characters.
    ///
    /// Scanning with empty tables is legal: every word is an identifier and
    /// symbol bytes are skipped.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The standard Haskell-flavoured tables.
    pub fn haskell() -> Self {
        Self::empty()
            .with_keywords(HASKELL_KEYWORDS.iter().copied())
            .with_operators(HASKELL_OPERATORS)
            .with_punctuation(HASKELL_PUNCTUATION)
    }

    /// Add keywords to the table.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Replace the keyword set with nothing.
    #[must_use]
    pub fn without_keywords(mut self) -> Self {
        self.keywords.clear();
        self
    }

    #[must_use]
    pub fn with_operators(mut self, operators: ByteSet) -> Self {
        self.operators = operators;
        self
    }

    #[must_use]
    pub fn with_punctuation(mut self, punctuation: ByteSet) -> Self {
        self.punctuation = punctuation;
        self
    }

    #[inline]
    pub fn is_keyword(&self, text: &str) -> bool {
        self.keywords.contains(text)
    }

    #[inline]
    pub fn is_operator(&self, byte: u8) -> bool {
        self.operators.contains(byte)
    }

    #[inline]
    pub fn is_punctuation(&self, byte: u8) -> bool {
        self.punctuation.contains(byte)
    }

    pub fn operators(&self) -> ByteSet {
        self.operators
    }
}
