//! Coarse view over the token stream.
//!
//! Tokens describe every byte of the input. Lexemes keep only what a
//! reader of the file cares about: names, values, comment text, and
//! line breaks. Quotes and blank runs are dropped, a comment marker is
//! folded into its body, and every `=` is followed by exactly one
//! `Value` lexeme (empty when the declaration has no value).

use std::collections::HashMap;

use crate::token::{Span, Token, TokenKind};

/// Lexeme kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeKind {
    Identifier,
    AssignmentOperator,
    Value,
    Comment,
    LineBreak,
}

/// A lexeme with its text and the span it was taken from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: LexemeKind,
    pub value: String,
    pub span: Span,
}

impl Lexeme {
    fn new(kind: LexemeKind, value: &str, span: Span) -> Self {
        Self {
            kind,
            value: value.to_string(),
            span,
        }
    }
}

/// Collapse a token stream into lexemes.
#[must_use]
pub fn lexemes(tokens: &[Token]) -> Vec<Lexeme> {
    let mut out = Vec::new();
    // Span where a missing value would sit, set after each `=`.
    let mut pending_value: Option<Span> = None;
    let mut iter = tokens.iter().peekable();

    while let Some(token) = iter.next() {
        match token.kind {
            TokenKind::Whitespace | TokenKind::Quote => {}
            TokenKind::Literal => {
                pending_value = None;
                out.push(Lexeme::new(LexemeKind::Value, &token.value, token.span));
            }
            TokenKind::AssignmentOperator => {
                out.push(Lexeme::new(
                    LexemeKind::AssignmentOperator,
                    &token.value,
                    token.span,
                ));
                pending_value = Some(Span {
                    offset: token.span.end(),
                    length: 0,
                    line: token.span.line,
                    column: token.span.column + 1,
                });
            }
            kind => {
                flush_empty_value(&mut out, &mut pending_value);
                match kind {
                    TokenKind::Identifier => {
                        out.push(Lexeme::new(LexemeKind::Identifier, &token.value, token.span));
                    }
                    TokenKind::Newline => {
                        out.push(Lexeme::new(LexemeKind::LineBreak, &token.value, token.span));
                    }
                    TokenKind::Comment => {
                        let body = iter.next_if(|t| t.is(TokenKind::CommentBody));
                        let (text, span) = body.map_or(("", token.span), |body| {
                            (body.value.as_str(), body.span)
                        });
                        out.push(Lexeme::new(LexemeKind::Comment, text, span));
                    }
                    // a body without its marker still reads as a comment
                    _ => out.push(Lexeme::new(LexemeKind::Comment, &token.value, token.span)),
                }
            }
        }
    }
    flush_empty_value(&mut out, &mut pending_value);

    out
}

/// Map each declared name to the position of its `Value` lexeme in
/// `lexemes`. A redeclared name maps to its last value.
#[must_use]
pub fn lexeme_index(lexemes: &[Lexeme]) -> HashMap<&str, usize> {
    let mut index = HashMap::new();
    for (i, window) in lexemes.windows(3).enumerate() {
        if let [name, assign, value] = window {
            if name.kind == LexemeKind::Identifier
                && assign.kind == LexemeKind::AssignmentOperator
                && value.kind == LexemeKind::Value
            {
                index.insert(name.value.as_str(), i + 2);
            }
        }
    }
    index
}

fn flush_empty_value(out: &mut Vec<Lexeme>, pending: &mut Option<Span>) {
    if let Some(span) = pending.take() {
        out.push(Lexeme::new(LexemeKind::Value, "", span));
    }
}
