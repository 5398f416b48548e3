use super::*;
use crate::{EXIT_LEX_ERRORS, EXIT_OK};
use pretty_assertions::assert_eq;

struct Run {
    status: i32,
    out: String,
    err: String,
}

fn run(
    handler: fn(&str, &Options, &mut Vec<u8>, &mut Vec<u8>) -> Result<i32, CliError>,
    source: &str,
    options: &Options,
) -> Run {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = handler(source, options, &mut out, &mut err).unwrap();
    Run {
        status,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}

fn text_options() -> Options {
    Options::new("test.hs")
}

fn json_options() -> Options {
    let mut options = Options::new("test.hs");
    options.format = OutputFormat::Json;
    options
}

#[test]
fn lex_prints_one_token_per_line() {
    let result = run(lex_source, "a -> b", &text_options());
    assert_eq!(result.status, EXIT_OK);
    assert_eq!(
        result.out,
        "1:1\tIdentifier\t\"a\"\n1:3\tOperator\t\"->\"\n1:6\tIdentifier\t\"b\"\n"
    );
    assert_eq!(result.err, "");
}

#[test]
fn lex_reports_errors_verbatim() {
    let result = run(lex_source, "x = 'a", &text_options());
    assert_eq!(result.status, EXIT_LEX_ERRORS);
    assert_eq!(result.out, "1:1\tIdentifier\t\"x\"\n1:3\tOperator\t\"=\"\n");
    let first = result.err.lines().next().unwrap();
    assert_eq!(first, "Error on line 1, column 5: Unclosed character literal");
    assert!(result.err.ends_with("1 lexical error found\n"));
}

#[test]
fn lex_json_tokens() {
    let result = run(lex_source, "{# INLINE f #}", &json_options());
    assert_eq!(result.status, EXIT_OK);
    assert_eq!(
        result.out,
        "[\n  {\"kind\": \"Pragma\", \"text\": \" INLINE f \", \"line\": 1, \"column\": 1, \"start\": 0, \"end\": 14}\n]\n"
    );
}

#[test]
fn lex_json_empty() {
    let result = run(lex_source, "   ", &json_options());
    assert_eq!(result.out, "[]\n");
}

#[test]
fn lex_json_errors() {
    let result = run(lex_source, "\"open", &json_options());
    assert_eq!(result.status, EXIT_LEX_ERRORS);
    assert_eq!(result.out, "[]\n");
    assert!(result.err.contains("\"code\": \"E0001\""));
    assert!(result.err.contains("\"line\": 1,"));
}

#[test]
fn no_keywords_option() {
    let mut options = text_options();
    options.keywords = false;
    let result = run(lex_source, "let", &options);
    assert_eq!(result.out, "1:1\tIdentifier\t\"let\"\n");
}

#[test]
fn check_success() {
    let result = run(check_source, "module Main where", &text_options());
    assert_eq!(result.status, EXIT_OK);
    assert_eq!(result.out, "ok: 3 tokens\n");
    assert_eq!(result.err, "");
}

#[test]
fn check_failure() {
    let result = run(check_source, "main = \\x", &text_options());
    assert_eq!(result.status, EXIT_LEX_ERRORS);
    assert_eq!(result.out, "");
    assert!(result
        .err
        .starts_with("Error on line 1, column 8: Unclosed lambda expression\n"));
}

#[test]
fn check_json_success() {
    let result = run(check_source, "x", &json_options());
    assert_eq!(result.out, "[]\n");
}

#[test]
fn tables_follow_options() {
    let mut options = text_options();
    assert!(tables_for(&options).is_keyword("where"));
    options.keywords = false;
    assert!(!tables_for(&options).is_keyword("where"));
    assert!(tables_for(&options).is_operator(b'-'));
}

#[test]
fn missing_file_is_a_read_error() {
    let options = Options::new("/nonexistent/dir/Main.hs");
    let err = read_source(&options).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    assert!(err.to_string().starts_with("cannot read '/nonexistent/dir/Main.hs'"));
}

#[test]
fn first_unclosed_construct_ends_the_report() {
    let source = "'a \"b {# c \\d '\n'e\n\"f";
    let result = run(check_source, source, &text_options());
    assert_eq!(result.status, EXIT_LEX_ERRORS);
    assert_eq!(
        result.err,
        "Error on line 2, column 1: Unclosed character literal\n  = help: add a closing `'`\n1 lexical error found\n"
    );
}

#[test]
fn json_report_has_one_object_per_error() {
    let result = run(check_source, "{# LANGUAGE x\n\"y", &json_options());
    assert_eq!(result.status, EXIT_LEX_ERRORS);
    assert!(result.err.starts_with("[\n  {\n    \"code\": \"E0003\","));
    assert_eq!(result.err.matches("\"code\"").count(), 1);
    assert!(result.err.ends_with("  }\n]\n"));
}
