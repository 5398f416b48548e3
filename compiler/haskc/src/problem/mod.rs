//! Lex-time problem rendering.
//!
//! Lex errors (`LexError`) are rendered directly via [`render_lex_error()`].

use hask_diagnostic::{Diagnostic, ErrorCode};
use hask_lexer::{LexError, LexErrorKind};

/// Render a `LexError` into a `Diagnostic` with the matching error code and a
/// suggestion naming the missing delimiter.
///
/// The message is the lexer's own, so the first line of terminal output is
/// identical to `LexError`'s `Display`.
#[cold]
pub fn render_lex_error(err: &LexError) -> Diagnostic {
    let code = match err.kind {
        LexErrorKind::UnclosedString => ErrorCode::E0001,
        LexErrorKind::UnclosedLambda => ErrorCode::E0002,
        LexErrorKind::UnclosedPragma => ErrorCode::E0003,
        LexErrorKind::UnclosedChar => ErrorCode::E0004,
    };
    let diag = Diagnostic::error(code)
        .with_message(err.message())
        .at(err.line, err.column)
        .with_span(err.span.start..err.span.end);

    match err.kind {
        LexErrorKind::UnclosedLambda => diag
            .with_note("a lambda head runs from `\\` to the first `>`")
            .with_suggestion("add `->` after the lambda parameters"),
        kind => diag.with_suggestion(format!("add a closing `{}`", kind.expected())),
    }
}
