//! CLI tool to validate, format, and inspect `.env` files.

use std::collections::HashSet;
use std::fs;
use std::process::ExitCode;

use envfile_rs::ParsedDocument;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        eprintln!("Usage: envfile <command> [files...]");
        eprintln!();
        eprintln!("Commands:");
        eprintln!("  validate  Check if .env file(s) are valid");
        eprintln!("  fmt       Format .env file(s) and print to stdout");
        eprintln!("  check     Check if .env file(s) are formatted");
        eprintln!("  keys      Print the variable names declared in each file");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  envfile validate .env");
        eprintln!("  envfile fmt .env.dist");
        eprintln!("  envfile keys .env .env.local");
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    if !matches!(command, "validate" | "fmt" | "check" | "keys") {
        eprintln!("Unknown command: {command}");
        return ExitCode::from(2);
    }

    let files = &args[2..];
    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        let parsed = match envfile_rs::parse_str(&content) {
            Ok(parsed) => parsed,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "validate" => {
                let declarations = parsed.document().declarations().count();
                let variables = parsed.index().len();
                let comments = parsed.document().comments().count();
                eprintln!(
                    "{path}: valid ({variables} variable(s), \
                     {declarations} declaration(s), \
                     {comments} comment(s))"
                );
            }
            "fmt" => print!("{}", envfile_rs::format(parsed.document())),
            "check" => {
                if envfile_rs::format(parsed.document()) == content {
                    eprintln!("{path}: formatted");
                } else {
                    eprintln!("{path}: not formatted");
                    had_error = true;
                }
            }
            _ => print_keys(&parsed),
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Names in first-declaration order, each printed once.
fn print_keys(parsed: &ParsedDocument) {
    let mut seen = HashSet::new();
    for declaration in parsed.document().declarations() {
        if seen.insert(declaration.name()) {
            println!("{}", declaration.name());
        }
    }
}
