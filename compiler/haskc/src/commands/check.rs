//! `haskc check`: report lexical errors only.

use std::io::{self, Write};

use hask_lexer::lex_with_config;

use super::{read_source, report_lex_errors, tables_for};
use crate::options::{Options, OutputFormat};
use crate::{CliError, EXIT_LEX_ERRORS, EXIT_OK};

pub fn check_file(options: &Options) -> Result<i32, CliError> {
    let source = read_source(options)?;
    let mut out = io::stdout().lock();
    let status = check_source(&source, options, &mut out, &mut io::stderr().lock())?;
    out.flush()?;
    Ok(status)
}

/// Lex `source` and report errors to `err`. On success, text mode prints a
/// one-line summary to `out`; JSON mode prints an empty diagnostic array.
pub fn check_source<O: Write, E: Write>(
    source: &str,
    options: &Options,
    out: &mut O,
    err: &mut E,
) -> Result<i32, CliError> {
    let tables = tables_for(options);
    let output = lex_with_config(source, &tables, options.lex);

    if output.has_errors() {
        report_lex_errors(&output.errors, options, err);
        return Ok(EXIT_LEX_ERRORS);
    }

    match options.format {
        OutputFormat::Text => writeln!(out, "ok: {} tokens", output.tokens.len())?,
        OutputFormat::Json => writeln!(out, "[]")?,
    }
    Ok(EXIT_OK)
}
