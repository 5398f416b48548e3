use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn defaults() {
    let options = parse_options("lex", &args(&["Main.hs"])).unwrap();
    assert_eq!(options, Options::new("Main.hs"));
    assert_eq!(options.format, OutputFormat::Text);
    assert_eq!(options.lex.trailing_dot, TrailingDot::Exclude);
    assert!(options.keywords);
    assert!(!options.reads_stdin());
}

#[test]
fn all_flags() {
    let options = parse_options(
        "check",
        &args(&[
            "--format=json",
            "--trailing-dot=include",
            "--no-keywords",
            "-",
        ]),
    )
    .unwrap();
    assert_eq!(options.format, OutputFormat::Json);
    assert_eq!(options.lex.trailing_dot, TrailingDot::Include);
    assert!(!options.keywords);
    assert!(options.reads_stdin());
}

#[test]
fn missing_path() {
    let err = parse_options("lex", &args(&["--format=json"])).unwrap_err();
    assert!(matches!(err, CliError::MissingPath { command: "lex" }));
}

#[test]
fn rejects_bad_values() {
    let err = parse_options("lex", &args(&["--format=xml", "a.hs"])).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid value 'xml' for --format (expected text or json)"
    );
    assert!(parse_options("lex", &args(&["--trailing-dot=maybe", "a.hs"])).is_err());
}

#[test]
fn rejects_unknown_and_extra_arguments() {
    let err = parse_options("check", &args(&["--error-limit=0", "a.hs"])).unwrap_err();
    assert!(matches!(err, CliError::UnknownOption(ref o) if o == "--error-limit=0"));
    let err = parse_options("lex", &args(&["--verbose", "a.hs"])).unwrap_err();
    assert!(matches!(err, CliError::UnknownOption(ref o) if o == "--verbose"));
    let err = parse_options("lex", &args(&["a.hs", "b.hs"])).unwrap_err();
    assert!(matches!(err, CliError::UnexpectedArgument(ref a) if a == "b.hs"));
}
