//! Driver-level failures (as opposed to lexical errors in the source).

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing file path\nUsage: haskc {command} <file> [options]")]
    MissingPath { command: &'static str },

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("invalid value '{value}' for {option} (expected {expected})")]
    InvalidValue {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
}
