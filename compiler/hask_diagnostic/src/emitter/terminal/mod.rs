//! Terminal emitter.
//!
//! The first line of every diagnostic is exactly
//! `Error on line L, column C: message`; notes and suggestions follow on
//! indented lines, and the report ends with an error count.

use std::io::Write;

use crate::Diagnostic;

use super::DiagnosticEmitter;

pub struct TerminalEmitter<W: Write> {
    writer: W,
    emitted: usize,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn new(writer: W) -> Self {
        TerminalEmitter { writer, emitted: 0 }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.emitted += 1;
        let _ = writeln!(self.writer, "{diagnostic}");
        for note in &diagnostic.notes {
            let _ = writeln!(self.writer, "  = note: {note}");
        }
        for suggestion in &diagnostic.suggestions {
            let _ = writeln!(self.writer, "  = help: {suggestion}");
        }
    }

    fn finish(&mut self) {
        match self.emitted {
            0 => {}
            1 => {
                let _ = writeln!(self.writer, "1 lexical error found");
            }
            n => {
                let _ = writeln!(self.writer, "{n} lexical errors found");
            }
        }
        let _ = self.writer.flush();
    }
}
