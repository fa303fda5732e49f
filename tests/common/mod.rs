#![allow(dead_code)]

use envfile_rs::{Token, TokenKind, analyze, format, parse, parse_str};

pub fn roundtrip(input: &str) {
    let tokens = analyze(input).expect("analyze failed");
    let parsed = parse(&tokens).expect("parse failed");
    let output = format(parsed.document());
    assert_eq!(
        output, input,
        "round-trip mismatch:\n--- expected ---\n{input}\n--- got ---\n{output}"
    );
}

/// Helper: format a parsed input, parse it back, assert structural
/// equality of documents and indexes.
pub fn assert_reparse_equal(input: &str) {
    let original = parse_str(input).expect("parse failed");
    let formatted = format(original.document());
    let reparsed = parse_str(&formatted).unwrap_or_else(|e| {
        panic!(
            "failed to re-parse formatted output: {e}\n\
             --- formatted ---\n{formatted}"
        )
    });
    assert_eq!(
        original, reparsed,
        "document mismatch\n--- formatted ---\n{formatted}"
    );
}

/// Tokens as `(kind, value)` pairs.
pub fn pairs(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
    tokens.iter().map(|t| (t.kind, t.value.as_str())).collect()
}

/// Assert tokens cover `input` contiguously and reproduce it.
pub fn assert_covers(input: &str, tokens: &[Token]) {
    let mut offset = 0;
    for token in tokens {
        assert_eq!(token.span.offset, offset, "gap or overlap at {token:?}");
        assert_eq!(token.span.length, token.value.len());
        offset = token.span.end();
    }
    assert_eq!(offset, input.len());
    let joined: String = tokens.iter().map(|t| t.value.as_str()).collect();
    assert_eq!(joined, input);
}
