//! Lexer for the hask language.
//!
//! Turns source text into a flat sequence of [`Token`]s, collecting a
//! [`LexError`] for each unterminated literal, lambda or pragma instead of
//! stopping. Keywords, operator characters and punctuation come from a
//! caller-supplied [`ClassificationTables`].
//!
//! ```
//! use hask_lexer::{lex, ClassificationTables, TokenKind};
//!
//! let tables = ClassificationTables::haskell();
//! let output = lex("a -> b", &tables);
//! let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Operator, TokenKind::Identifier]);
//! assert!(output.errors.is_empty());
//! ```

mod config;
mod dispatch;
mod lex_error;
mod scanner;
mod tables;
mod token;

pub use config::{LexConfig, TrailingDot};
pub use dispatch::{classify, Dispatch};
pub use lex_error::{LexError, LexErrorKind};
pub use scanner::Scanner;
pub use tables::{ClassificationTables, HASKELL_KEYWORDS, HASKELL_OPERATORS, HASKELL_PUNCTUATION};
pub use token::{Span, Token, TokenKind};

use hask_lexer_core::SourceBuffer;

/// Result of lexing one source: tokens in source order, then any errors in
/// the order they were found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex `source` with the default [`LexConfig`].
pub fn lex(source: &str, tables: &ClassificationTables) -> LexOutput {
    lex_with_config(source, tables, LexConfig::default())
}

#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex_with_config(source: &str, tables: &ClassificationTables, config: LexConfig) -> LexOutput {
    let buf = SourceBuffer::new(source);
    let output = Scanner::new(&buf, tables, config).scan();
    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "lexed"
    );
    output
}
