use std::fmt;

use crate::ast::{
    Comment, Document, Identifier, Literal, QuoteStyle, QuotedLiteral, Statement, Value,
    VariableDeclaration,
};
use crate::index::Index;
use crate::token::{Span, Token, TokenKind};

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Variable name not followed by `=`.
    ExpectedAssignment { name: String },
    /// Quote where the value cannot take one.
    UnexpectedQuote(char),
    /// Comment followed by something other than a line break.
    ExpectedCommentTerminator,
    /// Declaration followed by something other than a line break
    /// or comment.
    ExpectedDeclarationTerminator,
    /// Opening quote with no closing quote.
    UnterminatedQuote,
    /// Token that cannot begin a statement.
    UnexpectedToken(TokenKind),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedAssignment { name } => {
                write!(f, "expected '=' after variable \"{name}\"")
            }
            Self::UnexpectedQuote(quote) => write!(f, "unexpected quote {quote}"),
            Self::ExpectedCommentTerminator => {
                write!(f, "expected newline or end of document after comment")
            }
            Self::ExpectedDeclarationTerminator => {
                write!(
                    f,
                    "expected line break or comment after variable declaration"
                )
            }
            Self::UnterminatedQuote => write!(f, "unterminated quoted value"),
            Self::UnexpectedToken(kind) => {
                write!(f, "unexpected {kind} at start of statement")
            }
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {} column {}", span.line, span.column)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Result of a successful parse: the document and its name index.
///
/// Both are only reachable through accessors; edits go through
/// [`ParsedDocument::edit`], which rebuilds the index afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument {
    document: Document,
    index: Index,
}

impl ParsedDocument {
    /// Wrap a document, building its index.
    #[must_use]
    pub fn from_document(document: Document) -> Self {
        let index = Index::build(&document);
        Self { document, index }
    }

    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub const fn index(&self) -> &Index {
        &self.index
    }

    #[must_use]
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Modify the document, then rebuild the index from the result.
    pub fn edit<R>(&mut self, f: impl FnOnce(&mut Document) -> R) -> R {
        let result = f(&mut self.document);
        self.index = Index::build(&self.document);
        result
    }

    /// Look up the last declaration of `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&VariableDeclaration> {
        self.index.resolve(&self.document, name)
    }

    /// Value text of the last declaration of `name`.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&str> {
        self.get(name).map(VariableDeclaration::value_text)
    }
}

/// Parse a token stream into a document and its name index.
///
/// # Errors
///
/// Returns `ParseError` on the first statement that breaks the
/// grammar. No partial document is returned.
pub fn parse(tokens: &[Token]) -> Result<ParsedDocument, ParseError> {
    let document = Parser::new(tokens).parse()?;
    Ok(ParsedDocument::from_document(document))
}

/// Progress through a declaration's value.
#[derive(Debug)]
enum ValueState {
    AwaitingValue,
    Unquoted(Literal),
    OpenQuote(QuoteStyle, Option<Literal>),
    Closed(QuotedLiteral),
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse(mut self) -> Result<Document, ParseError> {
        let mut statements = Vec::new();

        while let Some(token) = self.bump() {
            let statement = match token.kind {
                TokenKind::Whitespace => continue,
                TokenKind::Newline => Statement::Newline,
                TokenKind::Comment => Statement::Comment(self.parse_comment()?),
                TokenKind::Identifier => {
                    Statement::VariableDeclaration(self.parse_declaration(token)?)
                }
                kind => {
                    return Err(ParseError {
                        kind: ParseErrorKind::UnexpectedToken(kind),
                        span: token.span,
                    });
                }
            };
            statements.push(statement);
        }

        Ok(Document { statements })
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn bump(&mut self) -> Option<&'a Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn next_if(&mut self, kind: TokenKind) -> Option<&'a Token> {
        let token = self.peek().filter(|t| t.is(kind))?;
        self.pos += 1;
        Some(token)
    }

    fn skip_whitespace(&mut self) {
        while self.next_if(TokenKind::Whitespace).is_some() {}
    }

    /// Comment marker already consumed.
    fn parse_comment(&mut self) -> Result<Comment, ParseError> {
        let body = self
            .next_if(TokenKind::CommentBody)
            .map(|token| token.value.clone());

        match self.peek() {
            None => Ok(Comment { body }),
            Some(token) if token.is(TokenKind::Newline) => Ok(Comment { body }),
            Some(token) => Err(ParseError {
                kind: ParseErrorKind::ExpectedCommentTerminator,
                span: token.span,
            }),
        }
    }

    /// Identifier already consumed. Stops before the terminating line
    /// break or comment so the caller emits it as its own statement.
    fn parse_declaration(&mut self, identifier: &Token) -> Result<VariableDeclaration, ParseError> {
        let name = identifier.value.clone();

        self.skip_whitespace();
        if self.next_if(TokenKind::AssignmentOperator).is_none() {
            let span = self.peek().map_or(identifier.span, |t| t.span);
            return Err(ParseError {
                kind: ParseErrorKind::ExpectedAssignment { name },
                span,
            });
        }

        let mut state = ValueState::AwaitingValue;
        while let Some(token) = self.peek() {
            if token.is(TokenKind::Newline) || token.is(TokenKind::Comment) {
                break;
            }
            self.pos += 1;
            state = match (token.kind, state) {
                (TokenKind::Whitespace, state) => state,
                (TokenKind::Quote, state) => Self::apply_quote(token, state)?,
                (TokenKind::Literal, ValueState::AwaitingValue) => {
                    ValueState::Unquoted(literal(token))
                }
                (TokenKind::Literal, ValueState::OpenQuote(style, None)) => {
                    ValueState::OpenQuote(style, Some(literal(token)))
                }
                _ => {
                    return Err(ParseError {
                        kind: ParseErrorKind::ExpectedDeclarationTerminator,
                        span: token.span,
                    });
                }
            };
        }

        let value = match state {
            ValueState::AwaitingValue => None,
            ValueState::Unquoted(literal) => Some(Value::Literal(literal)),
            ValueState::Closed(quoted) => Some(Value::Quoted(quoted)),
            ValueState::OpenQuote(..) => {
                return Err(ParseError {
                    kind: ParseErrorKind::UnterminatedQuote,
                    span: self.eof_span(),
                });
            }
        };

        Ok(VariableDeclaration {
            identifier: Identifier { name },
            value,
        })
    }

    fn apply_quote(token: &Token, state: ValueState) -> Result<ValueState, ParseError> {
        let ch = token.value.chars().next().unwrap_or('"');
        let unexpected = || ParseError {
            kind: ParseErrorKind::UnexpectedQuote(ch),
            span: token.span,
        };
        let style = QuoteStyle::from_char(ch).ok_or_else(unexpected)?;

        match state {
            ValueState::AwaitingValue => Ok(ValueState::OpenQuote(style, None)),
            ValueState::OpenQuote(open, content) if open == style => {
                Ok(ValueState::Closed(QuotedLiteral {
                    quote: open,
                    content,
                }))
            }
            _ => Err(unexpected()),
        }
    }

    fn eof_span(&self) -> Span {
        self.tokens.last().map_or(
            Span {
                offset: 0,
                length: 0,
                line: 1,
                column: 1,
            },
            |last| last.span,
        )
    }
}

fn literal(token: &Token) -> Literal {
    Literal {
        value: token.value.clone(),
    }
}
