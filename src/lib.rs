//! `.env` lexer, parser, formatter, and builder.
//!
//! A typed AST for `KEY=VALUE` configuration files with comments and
//! single- or double-quoted (possibly multi-line) values, plus an
//! index for looking declarations up by name.
//!
//! # Quick start
//!
//! ## Parse and look up a variable
//!
//! ```
//! use envfile_rs::{analyze, parse};
//!
//! let input = "# database\nDB_HOST=localhost\nDB_PASS=\"s3cr#t\"\n";
//! let tokens = analyze(input).unwrap();
//! let parsed = parse(&tokens).unwrap();
//! assert_eq!(parsed.value("DB_HOST"), Some("localhost"));
//! assert_eq!(parsed.value("DB_PASS"), Some("s3cr#t"));
//! ```
//!
//! ## Build a document programmatically
//!
//! ```
//! use envfile_rs::{Document, QuoteStyle, format};
//!
//! let doc = Document::new()
//!     .comment(" app")
//!     .variable("PORT", "8080")
//!     .quoted("GREETING", "hello world", QuoteStyle::Double);
//!
//! assert_eq!(format(&doc), "# app\nPORT=8080\nGREETING=\"hello world\"\n");
//! ```

#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod builder;
pub mod formatter;
pub mod index;
pub mod lexeme;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{
    Comment, Document, Identifier, Literal, QuoteStyle, QuotedLiteral, Statement, Value,
    VariableDeclaration,
};
pub use formatter::format;
pub use index::Index;
pub use lexeme::{Lexeme, LexemeKind, lexeme_index, lexemes};
pub use lexer::{LexError, LexErrorKind, analyze};
pub use parser::{ParseError, ParseErrorKind, ParsedDocument, parse};
pub use token::{Span, Token, TokenKind};

/// Unified error type covering both lexing and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Location of the offending input.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Lex(e) => e.span,
            Self::Parse(e) => e.span,
        }
    }
}

/// Analyze and parse a `.env` source string in one step.
pub fn parse_str(input: &str) -> Result<ParsedDocument, Error> {
    let tokens = analyze(input)?;
    Ok(parse(&tokens)?)
}
