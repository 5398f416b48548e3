//! Error codes for lexer diagnostics.
//!
//! One code per way a source can fail to lex, so reports can be searched.

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unclosed string literal
    E0001,
    /// Unclosed lambda expression
    E0002,
    /// Unclosed GHC extension (pragma block)
    E0003,
    /// Unclosed character literal
    E0004,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
        }
    }

    /// Short description, used as the default diagnostic message.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "Unclosed string literal",
            ErrorCode::E0002 => "Unclosed lambda expression",
            ErrorCode::E0003 => "Unclosed GHC extension",
            ErrorCode::E0004 => "Unclosed character literal",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
