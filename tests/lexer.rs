//! Lexer edge cases and error tests.

mod common;

use common::{assert_covers, pairs};
use envfile_rs::{LexErrorKind, TokenKind, analyze};

// -----------------------------------------------------------
// Basic lexer behaviour.
// -----------------------------------------------------------

#[test]
fn lex_empty_input() {
    let tokens = analyze("").expect("analyze");
    assert!(tokens.is_empty());
}

#[test]
fn lex_only_blank_lines() {
    let tokens = analyze("   \t  \n\n  ").expect("analyze");
    assert!(
        tokens
            .iter()
            .all(|t| matches!(t.kind, TokenKind::Newline | TokenKind::Whitespace))
    );
}

#[test]
fn lex_multiple_comments() {
    let tokens = analyze("# comment 1\n# comment 2\n").expect("analyze");
    let count = tokens.iter().filter(|t| t.is(TokenKind::Comment)).count();
    assert_eq!(count, 2);
}

#[test]
fn lex_comment_keeps_hashes() {
    let tokens = analyze("# some random comment ###").expect("analyze");
    assert_eq!(
        pairs(&tokens),
        vec![
            (TokenKind::Comment, "#"),
            (TokenKind::CommentBody, " some random comment ###"),
        ]
    );
}

#[test]
fn lex_unquoted_value_keeps_inner_spaces_and_quotes() {
    let tokens = analyze("A=it's  \"fine\" ").expect("analyze");
    assert_eq!(tokens[2].kind, TokenKind::Literal);
    assert_eq!(tokens[2].value, "it's  \"fine\" ");
}

#[test]
fn lex_unquoted_value_stops_at_line_break() {
    let tokens = analyze("A=1\r\nB=2\rC=3").expect("analyze");
    let values: Vec<_> = tokens
        .iter()
        .filter(|t| t.is(TokenKind::Literal))
        .map(|t| t.value.as_str())
        .collect();
    assert_eq!(values, vec!["1", "2", "3"]);
}

#[test]
fn lex_equals_inside_value() {
    let tokens = analyze("URL=postgres://u:p@h/db?a=b").expect("analyze");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[2].value, "postgres://u:p@h/db?a=b");
}

#[test]
fn lex_quoted_value_spanning_windows_lines() {
    let input = "A='one\r\ntwo'\r\nB=3";
    let tokens = analyze(input).expect("analyze");
    assert_eq!(tokens[3].value, "one\r\ntwo");
    let b = tokens
        .iter()
        .find(|t| t.is(TokenKind::Identifier) && t.value == "B")
        .expect("B token");
    assert_eq!((b.span.line, b.span.column), (3, 1));
    assert_covers(input, &tokens);
}

#[test]
fn lex_whitespace_after_quoted_value() {
    let tokens = analyze("A=\"x\"   # c").expect("analyze");
    assert_eq!(
        pairs(&tokens)[5..],
        [
            (TokenKind::Whitespace, "   "),
            (TokenKind::Comment, "#"),
            (TokenKind::CommentBody, " c"),
        ]
    );
}

#[test]
fn lex_underscore_identifier() {
    let tokens = analyze("_private_1=x").expect("analyze");
    assert_eq!(tokens[0].value, "_private_1");
}

#[test]
fn lex_identifier_followed_by_comment_is_error() {
    let err = analyze("FOO#bar").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::ExpectedAssignment { found: Some('#') });
}

#[test]
fn lex_tokens_cover_input() {
    let input = "# header\n\n  KEY = value # trailing\nQ='multi\nline'\nE=\n";
    let tokens = analyze(input).expect("analyze");
    assert_covers(input, &tokens);
}

// -----------------------------------------------------------
// Errors.
// -----------------------------------------------------------

#[test]
fn lex_error_dash_in_name() {
    let err = analyze("MY-VAR=1").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::InvalidIdentifierCharacter('-'));
    assert_eq!(err.span.column, 3);
}

#[test]
fn lex_error_non_ascii_name() {
    let err = analyze("Ä=1").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::InvalidIdentifierStart('Ä'));
    assert_eq!(err.span.length, 'Ä'.len_utf8());
}

#[test]
fn lex_error_export_prefix() {
    // shell syntax is not part of the format
    let err = analyze("export A=1").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::ExpectedAssignment { found: Some('A') });
    assert_eq!(err.span.column, 8);
}

#[test]
fn lex_error_unterminated_single_quote() {
    let err = analyze("A='abc").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnterminatedQuote('\''));
    assert_eq!(err.span.offset, 2);
}

#[test]
fn lex_error_position_after_bare_carriage_returns() {
    let err = analyze("A=1\r\rB C").unwrap_err();
    assert_eq!((err.span.line, err.span.column), (3, 3));
}

#[test]
fn lex_error_display_includes_location() {
    let err = analyze("A=1\n2=b").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("start with letters or underscores"));
    assert!(msg.ends_with("at line 2 column 1"));
}
