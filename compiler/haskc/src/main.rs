//! hask lexer CLI

use haskc::commands::{check_file, lex_file};
use haskc::{init_tracing, parse_options, CliError, Options, EXIT_CLI_ERROR, EXIT_OK};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let status = match command.as_str() {
        "lex" => run("lex", &args[2..], lex_file),
        "check" => run("check", &args[2..], check_file),
        "help" | "--help" | "-h" => {
            print_usage();
            EXIT_OK
        }
        "version" | "--version" | "-V" => {
            println!("haskc {}", env!("CARGO_PKG_VERSION"));
            EXIT_OK
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            EXIT_CLI_ERROR
        }
    };

    std::process::exit(status);
}

fn run(
    command: &'static str,
    args: &[String],
    handler: fn(&Options) -> Result<i32, CliError>,
) -> i32 {
    match parse_options(command, args).and_then(|options| handler(&options)) {
        Ok(status) => status,
        Err(err) => {
            eprintln!("error: {err}");
            EXIT_CLI_ERROR
        }
    }
}

fn print_usage() {
    println!("hask lexer");
    println!();
    println!("Usage: haskc <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>           Tokenize and display tokens");
    println!("  check <file>         Report lexical errors only");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Use `-` as the file to read standard input.");
    println!();
    println!("Options:");
    println!("  --format=<fmt>       Output format: text (default), json");
    println!("  --trailing-dot=<p>   `3.` lexes as `3` then `.` (exclude, default)");
    println!("                       or as `3.` (include)");
    println!("  --no-keywords        Lex every word as an identifier");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=hask_lexer=trace   Log every token");
    println!();
    println!("Examples:");
    println!("  haskc lex Main.hs");
    println!("  haskc lex Main.hs --format=json");
    println!("  haskc check Main.hs --trailing-dot=include");
    println!("  cat Main.hs | haskc check -");
}
