//! Diagnostic emitters.
//!
//! [`TerminalEmitter`] writes the plain `Error on line L, column C: message`
//! form followed by hints; [`JsonEmitter`] writes an array of objects for
//! tools. Both write to any [`std::io::Write`].

mod json;
mod terminal;

pub use json::{escape_json, JsonEmitter};
pub use terminal::TerminalEmitter;

use crate::Diagnostic;

/// A sink for one report.
///
/// Call [`emit`](Self::emit) once per diagnostic and
/// [`finish`](Self::finish) once at the end.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Write whatever closes the report and flush the writer.
    fn finish(&mut self);
}
