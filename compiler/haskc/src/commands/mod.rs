//! Command handlers for the hask CLI.
//!
//! Each submodule implements one command. Shared pieces (reading the source,
//! choosing tables, reporting lexical errors) live here in the module root.
//!
//! Every handler comes in two layers: `*_source` takes the text and writers
//! and is what the tests drive; `*_file` reads the source named by the
//! options and writes to the process's stdout and stderr.

use std::io::{self, Read, Write};

use hask_diagnostic::emitter::{DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use hask_lexer::{ClassificationTables, LexError};

use crate::options::{Options, OutputFormat};
use crate::problem::render_lex_error;
use crate::CliError;

mod check;
mod lex;

pub use check::{check_file, check_source};
pub use lex::{lex_file, lex_source};

/// Read the file named by `options`, or stdin for `-`.
pub fn read_source(options: &Options) -> Result<String, CliError> {
    let read_err = |source| CliError::Read {
        path: options.path.clone(),
        source,
    };
    if options.reads_stdin() {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .map_err(read_err)?;
        Ok(source)
    } else {
        std::fs::read_to_string(&options.path).map_err(read_err)
    }
}

/// The tables the options ask for.
pub fn tables_for(options: &Options) -> ClassificationTables {
    let tables = ClassificationTables::haskell();
    if options.keywords {
        tables
    } else {
        tables.without_keywords()
    }
}

/// Write lexical errors to `err` in the requested format.
///
/// Every lexical error ends the scan, so `errors` holds at most one entry.
pub(crate) fn report_lex_errors<E: Write>(errors: &[LexError], options: &Options, err: &mut E) {
    match options.format {
        OutputFormat::Text => emit_report(&mut TerminalEmitter::new(err), errors),
        OutputFormat::Json => emit_report(&mut JsonEmitter::new(err), errors),
    }
}

fn emit_report(emitter: &mut impl DiagnosticEmitter, errors: &[LexError]) {
    for error in errors {
        emitter.emit(&render_lex_error(error));
    }
    emitter.finish();
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
