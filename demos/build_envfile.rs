//! Build a `.env` document programmatically and print it.

use envfile_rs::{Document, QuoteStyle, format};

fn main() {
    let doc = Document::new()
        .comment(" generated")
        .variable("APP_ENV", "production")
        .variable("PORT", "8080")
        .blank()
        .quoted("BANNER", "Welcome, #1 user!", QuoteStyle::Double)
        .empty("API_TOKEN");

    print!("{}", format(&doc));
}
