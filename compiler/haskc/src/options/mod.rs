//! Option parsing for the `lex` and `check` commands.
//!
//! Flags use the `--name=value` form, like the rest of the driver. The first
//! argument that does not start with `-` is the file path; `-` on its own
//! means standard input.

use hask_lexer::{LexConfig, TrailingDot};

use crate::CliError;

/// How results are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Options {
    /// Source path, or `-` for stdin.
    pub path: String,
    pub format: OutputFormat,
    pub lex: LexConfig,
    /// Use the standard keyword table (`--no-keywords` clears it).
    pub keywords: bool,
}

impl Options {
    pub fn new(path: impl Into<String>) -> Self {
        Options {
            path: path.into(),
            format: OutputFormat::default(),
            lex: LexConfig::default(),
            keywords: true,
        }
    }

    pub fn reads_stdin(&self) -> bool {
        self.path == "-"
    }
}

/// Parse the arguments that follow the command word.
pub fn parse_options(command: &'static str, args: &[String]) -> Result<Options, CliError> {
    let mut path: Option<&str> = None;
    let mut options = Options::new(String::new());

    for arg in args {
        if let Some(value) = arg.strip_prefix("--format=") {
            options.format = match value {
                "text" => OutputFormat::Text,
                "json" => OutputFormat::Json,
                _ => return Err(invalid("--format", value, "text or json")),
            };
        } else if let Some(value) = arg.strip_prefix("--trailing-dot=") {
            let policy = TrailingDot::from_name(value)
                .ok_or_else(|| invalid("--trailing-dot", value, "include or exclude"))?;
            options.lex = options.lex.with_trailing_dot(policy);
        } else if arg == "--no-keywords" {
            options.keywords = false;
        } else if arg == "-" || !arg.starts_with('-') {
            if path.is_some() {
                return Err(CliError::UnexpectedArgument(arg.clone()));
            }
            path = Some(arg.as_str());
        } else {
            return Err(CliError::UnknownOption(arg.clone()));
        }
    }

    let Some(path) = path else {
        return Err(CliError::MissingPath { command });
    };
    options.path = path.to_string();
    Ok(options)
}

fn invalid(option: &'static str, value: &str, expected: &'static str) -> CliError {
    CliError::InvalidValue {
        option,
        value: value.to_string(),
        expected,
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
