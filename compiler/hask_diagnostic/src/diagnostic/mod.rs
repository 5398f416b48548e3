//! Core diagnostic type.

use std::fmt;
use std::ops::Range;

use crate::ErrorCode;

/// A lexical error with its position and follow-up hints.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// 1-based line of the construct the diagnostic refers to.
    pub line: u32,
    /// 1-based column (in characters) of that construct.
    pub column: u32,
    /// Byte range in the source, when known.
    pub span: Option<Range<u32>>,
    pub notes: Vec<String>,
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Create a diagnostic for `code` at line 1, column 1. The message
    /// defaults to the code's description.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: code.description().to_string(),
            line: 1,
            column: 1,
            span: None,
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_message(mut self, msg: impl Into<String>) -> Self {
        self.message = msg.into();
        self
    }

    /// Set the 1-based line and column.
    #[must_use]
    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.line = line;
        self.column = column;
        self
    }

    #[must_use]
    pub fn with_span(mut self, span: Range<u32>) -> Self {
        self.span = Some(span);
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

/// The one-line form: `Error on line L, column C: message`.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error on line {}, column {}: {}",
            self.line, self.column, self.message
        )
    }
}
