//! `haskc lex`: print the token stream.

use std::io::{self, Write};

use hask_diagnostic::emitter::escape_json;
use hask_lexer::{lex_with_config, Token};

use super::{read_source, report_lex_errors, tables_for};
use crate::options::{Options, OutputFormat};
use crate::{CliError, EXIT_LEX_ERRORS, EXIT_OK};

/// Lex the file named by `options` and print its tokens to stdout.
pub fn lex_file(options: &Options) -> Result<i32, CliError> {
    let source = read_source(options)?;
    let mut out = io::stdout().lock();
    let status = lex_source(&source, options, &mut out, &mut io::stderr().lock())?;
    out.flush()?;
    Ok(status)
}

/// Lex `source`, write tokens to `out` and lexical errors to `err`.
///
/// Text output is one token per line: `line:column  Kind  "text"`.
pub fn lex_source<O: Write, E: Write>(
    source: &str,
    options: &Options,
    out: &mut O,
    err: &mut E,
) -> Result<i32, CliError> {
    let tables = tables_for(options);
    let output = lex_with_config(source, &tables, options.lex);

    match options.format {
        OutputFormat::Text => {
            for token in &output.tokens {
                writeln!(
                    out,
                    "{}:{}\t{}\t{:?}",
                    token.line, token.column, token.kind, token.text
                )?;
            }
        }
        OutputFormat::Json => write_json_tokens(&output.tokens, out)?,
    }

    if output.has_errors() {
        report_lex_errors(&output.errors, options, err);
        Ok(EXIT_LEX_ERRORS)
    } else {
        Ok(EXIT_OK)
    }
}

fn write_json_tokens<O: Write>(tokens: &[Token], out: &mut O) -> std::io::Result<()> {
    write!(out, "[")?;
    for (i, token) in tokens.iter().enumerate() {
        let sep = if i == 0 { "\n" } else { ",\n" };
        write!(
            out,
            "{sep}  {{\"kind\": \"{}\", \"text\": \"{}\", \"line\": {}, \"column\": {}, \"start\": {}, \"end\": {}}}",
            token.kind,
            escape_json(&token.text),
            token.line,
            token.column,
            token.span.start,
            token.span.end
        )?;
    }
    if tokens.is_empty() {
        writeln!(out, "]")
    } else {
        writeln!(out, "\n]")
    }
}
