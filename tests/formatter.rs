//! Formatter-specific tests.

mod common;

use common::{assert_reparse_equal, roundtrip};
use envfile_rs::{Document, QuoteStyle, format, parse_str};

#[test]
fn format_empty_document() {
    assert_eq!(format(&Document::new()), "");
}

#[test]
fn format_no_trailing_newline_added() {
    let parsed = parse_str("A=1").expect("parse");
    assert_eq!(format(parsed.document()), "A=1");
}

#[test]
fn format_quoted_values() {
    let doc = Document::new()
        .quoted("S", "it is", QuoteStyle::Single)
        .quoted("D", "it's", QuoteStyle::Double)
        .quoted("E", "", QuoteStyle::Double);
    assert_eq!(format(&doc), "S='it is'\nD=\"it's\"\nE=\"\"\n");
}

#[test]
fn format_crlf_normalized() {
    let parsed = parse_str("A=1\r\nB=2\r\n").expect("parse");
    assert_eq!(format(parsed.document()), "A=1\nB=2\n");
}

#[test]
fn roundtrip_canonical_documents() {
    roundtrip("A=1\n");
    roundtrip("# comment\n\nA=1\nB=\n#\n");
    roundtrip("HELLO=WORLD# this is a test");
    roundtrip("Q='multi\nline # not a comment'\n");
    roundtrip("E=\"\"# empty\n");
}

#[test]
fn reparse_loose_documents() {
    assert_reparse_equal("  A = 1\n\tB =  'x'   # c\r\n");
    assert_reparse_equal("X=\rY=\"two\r\nlines\"\r");
}
