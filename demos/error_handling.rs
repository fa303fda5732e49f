//! Demonstrate error handling for invalid `.env` input.

fn main() {
    // Invalid variable name
    match envfile_rs::parse_str("OK=1\n2FAST=yes\n") {
        Ok(_) => println!("Parsed OK (unexpected)"),
        Err(envfile_rs::Error::Lex(e)) => {
            println!("Lex error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Location: line {}, column {}", e.span.line, e.span.column);
        }
        Err(envfile_rs::Error::Parse(e)) => {
            println!("Parse error: {e}");
        }
    }

    println!();

    // Two declarations on one line
    match envfile_rs::parse_str("A='one' B=two\n") {
        Ok(_) => println!("Parsed OK (unexpected)"),
        Err(envfile_rs::Error::Lex(e)) => {
            println!("Lex error: {e}");
        }
        Err(envfile_rs::Error::Parse(e)) => {
            println!("Parse error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Location: line {}, column {}", e.span.line, e.span.column);
        }
    }
}
