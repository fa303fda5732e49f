//! Serializes a document back into `.env` text.
//!
//! Statements are written in order with no added separators, so line
//! structure comes entirely from `Newline` statements. Blank runs and
//! the original line-break style are not preserved; line breaks are
//! written as `\n`.

use crate::ast::{Comment, Document, Statement, Value, VariableDeclaration};

/// Format a `Document` into `.env` text.
#[must_use]
pub fn format(document: &Document) -> String {
    let mut out = String::new();
    for statement in &document.statements {
        match statement {
            Statement::Newline => out.push('\n'),
            Statement::Comment(comment) => format_comment(&mut out, comment),
            Statement::VariableDeclaration(declaration) => {
                format_declaration(&mut out, declaration);
            }
        }
    }
    out
}

fn format_comment(out: &mut String, comment: &Comment) {
    out.push('#');
    if let Some(body) = &comment.body {
        out.push_str(body);
    }
}

fn format_declaration(out: &mut String, declaration: &VariableDeclaration) {
    out.push_str(&declaration.identifier.name);
    out.push('=');
    match &declaration.value {
        None => {}
        Some(Value::Literal(literal)) => out.push_str(&literal.value),
        Some(Value::Quoted(quoted)) => {
            let quote = quoted.quote.as_char();
            out.push(quote);
            if let Some(content) = &quoted.content {
                out.push_str(&content.value);
            }
            out.push(quote);
        }
    }
}
