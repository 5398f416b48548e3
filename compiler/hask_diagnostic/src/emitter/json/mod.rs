//! JSON emitter.
//!
//! The report is one array; each diagnostic is an object with its code,
//! message, position, byte range and hints. An empty report is `[]`.

use std::fmt::Write as _;
use std::io::Write;

use crate::Diagnostic;

use super::DiagnosticEmitter;

/// Escape `s` for use inside a JSON string literal.
pub fn escape_json(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out
}

fn string_array(items: &[String]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|item| format!("\"{}\"", escape_json(item)))
        .collect();
    format!("[{}]", quoted.join(","))
}

pub struct JsonEmitter<W: Write> {
    writer: W,
    emitted: usize,
}

impl<W: Write> JsonEmitter<W> {
    pub fn new(writer: W) -> Self {
        JsonEmitter { writer, emitted: 0 }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DiagnosticEmitter for JsonEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let open = if self.emitted == 0 { "[\n" } else { ",\n" };
        self.emitted += 1;

        let (start, end) = match &diagnostic.span {
            Some(span) => (span.start.to_string(), span.end.to_string()),
            None => ("null".to_string(), "null".to_string()),
        };
        let _ = write!(
            self.writer,
            "{open}  {{
    \"code\": \"{code}\",
    \"message\": \"{message}\",
    \"line\": {line},
    \"column\": {column},
    \"start\": {start},
    \"end\": {end},
    \"notes\": {notes},
    \"suggestions\": {suggestions}
  }}",
            code = diagnostic.code,
            message = escape_json(&diagnostic.message),
            line = diagnostic.line,
            column = diagnostic.column,
            notes = string_array(&diagnostic.notes),
            suggestions = string_array(&diagnostic.suggestions),
        );
    }

    fn finish(&mut self) {
        let close = if self.emitted == 0 { "[]" } else { "\n]" };
        let _ = writeln!(self.writer, "{close}");
        let _ = self.writer.flush();
    }
}
