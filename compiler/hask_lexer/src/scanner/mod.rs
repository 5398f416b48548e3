//! The scanner: dispatch loop, position bookkeeping and the per-construct
//! readers.
//!
//! # Positions
//!
//! `line` and `column` always describe the cursor position. Lines count `\n`
//! and columns count characters, both starting at 1. Every consumed span
//! (token, error or skipped character) is walked once to update them, so a
//! newline inside a string or pragma moves following tokens onto the next
//! line just like a newline between tokens does.
//!
//! # Errors
//!
//! The four fallible readers only fail when they run out of input, and they
//! leave the cursor at the end of the source when they do. The driver then
//! sees [`Dispatch::Eof`] and stops.

use hask_lexer_core::char_class::{
    is_digit, is_ident_continue, is_ident_continue_char, is_utf8_lead,
};
use hask_lexer_core::{Cursor, SourceBuffer};

use crate::dispatch::{classify, Dispatch};
use crate::{
    ClassificationTables, LexConfig, LexError, LexErrorKind, LexOutput, Span, Token, TokenKind,
    TrailingDot,
};

/// Single-use scanner over one source buffer.
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    tables: &'a ClassificationTables,
    config: LexConfig,
    line: u32,
    column: u32,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl<'a> Scanner<'a> {
    pub fn new(
        source: &'a SourceBuffer,
        tables: &'a ClassificationTables,
        config: LexConfig,
    ) -> Self {
        Scanner {
            cursor: source.cursor(),
            tables,
            config,
            line: 1,
            column: 1,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Byte under the cursor, `0` at end of input.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.cursor.current()
    }

    /// Byte after [`peek`](Self::peek), `0` at or past end of input.
    #[inline]
    pub fn peek_next(&self) -> u8 {
        self.cursor.peek()
    }

    /// Which reader handles the current position.
    #[inline]
    pub fn classify(&self) -> Dispatch {
        classify(&self.cursor, self.tables)
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// Byte offset of the cursor.
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Run the scanner to the end of input.
    pub fn scan(mut self) -> LexOutput {
        while self.step() {}
        LexOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    /// Consume one lexeme (or one skipped character).
    ///
    /// Returns `false` once the end of input is reached.
    pub fn step(&mut self) -> bool {
        let start = self.cursor.pos();
        let outcome = match self.classify() {
            Dispatch::Eof => return false,
            Dispatch::Skip => {
                self.skip(start);
                return true;
            }
            Dispatch::Identifier => Ok(self.read_identifier(start)),
            Dispatch::Number => Ok(self.read_number(start)),
            Dispatch::Char => self.read_char(start),
            Dispatch::String => self.read_string(start),
            Dispatch::Lambda => self.read_lambda(start),
            Dispatch::Pragma => self.read_pragma(start),
            Dispatch::Operator => Ok(self.read_operator(start)),
            Dispatch::Punctuation => Ok(self.read_punctuation(start)),
        };
        debug_assert!(
            self.cursor.pos() > start,
            "scanner made no progress at byte {start}"
        );

        match outcome {
            Ok(token) => {
                tracing::trace!(
                    kind = %token.kind,
                    text = %token.text,
                    line = token.line,
                    column = token.column,
                    "token"
                );
                self.tokens.push(token);
            }
            Err(error) => {
                tracing::debug!(%error, "lex error");
                self.errors.push(error);
            }
        }
        true
    }

    /// Build a token starting at `start` and ending at the cursor, then move
    /// `line`/`column` past it.
    fn add_token(&mut self, kind: TokenKind, text: &str, start: u32) -> Token {
        let token = Token::new(
            kind,
            text,
            self.line,
            self.column,
            Span::new(start, self.cursor.pos()),
        );
        self.advance_position(start);
        token
    }

    /// Build an error for the construct starting at `start`, then move
    /// `line`/`column` past everything the reader consumed.
    fn error(&mut self, kind: LexErrorKind, start: u32) -> LexError {
        let error = LexError::new(
            kind,
            self.line,
            self.column,
            Span::new(start, self.cursor.pos()),
        );
        self.advance_position(start);
        error
    }

    fn advance_position(&mut self, start: u32) {
        for c in self.cursor.slice_from(start).chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn skip(&mut self, start: u32) {
        self.cursor.advance_char();
        self.advance_position(start);
    }

    // === Readers ===

    fn read_identifier(&mut self, start: u32) -> Token {
        loop {
            self.cursor.eat_while(is_ident_continue);
            if is_utf8_lead(self.cursor.current())
                && is_ident_continue_char(self.cursor.current_char())
            {
                self.cursor.advance_char();
            } else {
                break;
            }
        }
        let text = self.cursor.slice_from(start);
        let kind = if self.tables.is_keyword(text) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        };
        self.add_token(kind, text, start)
    }

    fn read_number(&mut self, start: u32) -> Token {
        self.cursor.eat_while(is_digit);
        if self.cursor.current() == b'.'
            && (is_digit(self.cursor.peek()) || self.config.trailing_dot == TrailingDot::Include)
        {
            self.cursor.advance();
            self.cursor.eat_while(is_digit);
        }
        let text = self.cursor.slice_from(start);
        self.add_token(TokenKind::Number, text, start)
    }

    fn read_char(&mut self, start: u32) -> Result<Token, LexError> {
        self.read_quoted(start, b'\'', TokenKind::Char, LexErrorKind::UnclosedChar)
    }

    fn read_string(&mut self, start: u32) -> Result<Token, LexError> {
        self.read_quoted(start, b'"', TokenKind::String, LexErrorKind::UnclosedString)
    }

    /// Shared body of the char and string readers. `\` skips the following
    /// character; escapes are not validated.
    fn read_quoted(
        &mut self,
        start: u32,
        quote: u8,
        kind: TokenKind,
        unclosed: LexErrorKind,
    ) -> Result<Token, LexError> {
        self.cursor.advance();
        let body_start = self.cursor.pos();
        loop {
            match self.cursor.eat_until_either(quote, b'\\') {
                0 => return Err(self.error(unclosed, start)),
                b'\\' => {
                    self.cursor.advance();
                    self.cursor.advance_char();
                }
                _ => break,
            }
        }
        let body = self.cursor.slice_from(body_start);
        self.cursor.advance();
        Ok(self.add_token(kind, body, start))
    }

    fn read_lambda(&mut self, start: u32) -> Result<Token, LexError> {
        self.cursor.advance();
        let body_start = self.cursor.pos();
        if !self.cursor.eat_until(b'>') {
            return Err(self.error(LexErrorKind::UnclosedLambda, start));
        }
        let body = self.cursor.slice_from(body_start);
        self.cursor.advance();
        Ok(self.add_token(TokenKind::Lambda, body, start))
    }

    fn read_pragma(&mut self, start: u32) -> Result<Token, LexError> {
        self.cursor.advance_n(2);
        let body_start = self.cursor.pos();
        if !self.cursor.eat_until_pair(b'#', b'}') {
            return Err(self.error(LexErrorKind::UnclosedPragma, start));
        }
        let body = self.cursor.slice_from(body_start);
        self.cursor.advance_n(2);
        Ok(self.add_token(TokenKind::Pragma, body, start))
    }

    fn read_operator(&mut self, start: u32) -> Token {
        let operators = self.tables.operators();
        self.cursor.eat_while(|b| operators.contains(b));
        let text = self.cursor.slice_from(start);
        self.add_token(TokenKind::Operator, text, start)
    }

    fn read_punctuation(&mut self, start: u32) -> Token {
        self.cursor.advance();
        let text = self.cursor.slice_from(start);
        self.add_token(TokenKind::Punctuation, text, start)
    }
}
