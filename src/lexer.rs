use std::fmt;

use crate::token::{Span, Token, TokenKind};

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character that cannot start a variable name.
    InvalidIdentifierStart(char),
    /// Character that cannot appear inside a variable name.
    InvalidIdentifierCharacter(char),
    /// Variable name not followed by `=`.
    ExpectedAssignment { found: Option<char> },
    /// Quoted value whose closing quote never appears.
    UnterminatedQuote(char),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIdentifierStart(ch) => {
                write!(
                    f,
                    "variable names can only start with letters or \
                     underscores, found '{}'",
                    ch.escape_debug()
                )
            }
            Self::InvalidIdentifierCharacter(ch) => {
                write!(
                    f,
                    "variable names can only contain letters, numbers, \
                     and underscores, found '{}'",
                    ch.escape_debug()
                )
            }
            Self::ExpectedAssignment { found: None } => {
                write!(f, "expected '='")
            }
            Self::ExpectedAssignment { found: Some(ch) } => {
                write!(f, "expected '=', found '{}'", ch.escape_debug())
            }
            Self::UnterminatedQuote(quote) => {
                write!(f, "unterminated quoted value, expected closing {quote}")
            }
        }
    }
}

/// Error produced during lexical analysis.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {} column {}", span.line, span.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Split a `.env` document into tokens.
///
/// The returned tokens cover the input without gaps: joining every
/// token's `value` gives back the original text.
///
/// # Errors
///
/// Returns `LexError` on the first invalid variable name, missing
/// `=`, or unterminated quoted value. No partial token list is kept.
pub fn analyze(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).analyze()
}

/// What the lexer expects next, keyed by the previous token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Start of input, or after a line break, comment, or value.
    StatementStart,
    /// After a variable name.
    AwaitingAssignment,
    /// After `=`.
    AwaitingValue,
}

/// Position snapshot taken before consuming a token.
#[derive(Clone, Copy)]
struct Mark {
    pos: usize,
    line: usize,
    col: usize,
}

struct Lexer<'a> {
    source: &'a str,
    input: &'a [u8],
    pos: usize,
    line: usize,
    col: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    const fn new(source: &'a str) -> Self {
        Self {
            source,
            input: source.as_bytes(),
            pos: 0,
            line: 1,
            col: 1,
            tokens: Vec::new(),
        }
    }

    fn analyze(mut self) -> Result<Vec<Token>, LexError> {
        let mut state = State::StatementStart;

        while let Some(ch) = self.peek() {
            state = match state {
                State::StatementStart => match ch {
                    b'\n' | b'\r' => {
                        self.read_line_break();
                        State::StatementStart
                    }
                    b' ' | b'\t' => {
                        self.read_whitespace(is_blank);
                        State::StatementStart
                    }
                    b'#' => {
                        self.read_comment();
                        State::StatementStart
                    }
                    _ => {
                        self.read_identifier()?;
                        State::AwaitingAssignment
                    }
                },
                State::AwaitingAssignment => {
                    self.read_assignment()?;
                    State::AwaitingValue
                }
                State::AwaitingValue => {
                    self.read_value()?;
                    State::StatementStart
                }
            };
        }

        if state == State::AwaitingAssignment {
            return Err(self.error(
                LexErrorKind::ExpectedAssignment { found: None },
                self.mark(),
            ));
        }

        Ok(self.tokens)
    }

    const fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
            col: self.col,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn current_char(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        let Some(&byte) = self.input.get(self.pos) else {
            return;
        };
        match byte {
            b'\r' => {
                self.line += 1;
                self.col = 1;
            }
            // second half of \r\n was already counted
            b'\n' if self.pos > 0 && self.input[self.pos - 1] == b'\r' => {}
            b'\n' => {
                self.line += 1;
                self.col = 1;
            }
            // UTF-8 continuation bytes share the column of their lead byte
            _ if byte & 0xC0 == 0x80 => {}
            _ => self.col += 1,
        }
        self.pos += 1;
    }

    fn advance_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    fn emit(&mut self, kind: TokenKind, start: Mark) {
        let span = Span {
            offset: start.pos,
            length: self.pos - start.pos,
            line: start.line,
            column: start.col,
        };
        let value = &self.source[start.pos..self.pos];
        self.tokens.push(Token::new(kind, value, span));
    }

    fn error(&self, kind: LexErrorKind, at: Mark) -> LexError {
        let length = self.source[at.pos..].chars().next().map_or(0, char::len_utf8);
        LexError {
            kind,
            span: Span {
                offset: at.pos,
                length,
                line: at.line,
                column: at.col,
            },
        }
    }

    fn read_line_break(&mut self) {
        let start = self.mark();
        if self.peek() == Some(b'\r') {
            self.advance();
            if self.peek() == Some(b'\n') {
                self.advance();
            }
        } else {
            self.advance();
        }
        self.emit(TokenKind::Newline, start);
    }

    fn read_whitespace(&mut self, pred: impl Fn(u8) -> bool) {
        let start = self.mark();
        self.advance_while(pred);
        if self.pos > start.pos {
            self.emit(TokenKind::Whitespace, start);
        }
    }

    fn read_comment(&mut self) {
        let start = self.mark();
        self.advance(); // skip #
        self.emit(TokenKind::Comment, start);

        let body = self.mark();
        self.advance_while(|b| !is_line_break(b));
        if self.pos > body.pos {
            self.emit(TokenKind::CommentBody, body);
        }
    }

    fn read_identifier(&mut self) -> Result<(), LexError> {
        let start = self.mark();
        match self.peek() {
            Some(b) if b.is_ascii_alphabetic() || b == b'_' => self.advance(),
            _ => {
                let ch = self.current_char().unwrap_or_default();
                return Err(self.error(LexErrorKind::InvalidIdentifierStart(ch), start));
            }
        }

        while let Some(b) = self.peek() {
            if b.is_ascii_alphanumeric() || b == b'_' {
                self.advance();
            } else if matches!(b, b'=' | b'#') || is_blank(b) || is_line_break(b) {
                break;
            } else {
                let ch = self.current_char().unwrap_or_default();
                return Err(self.error(
                    LexErrorKind::InvalidIdentifierCharacter(ch),
                    self.mark(),
                ));
            }
        }

        self.emit(TokenKind::Identifier, start);
        Ok(())
    }

    fn read_assignment(&mut self) -> Result<(), LexError> {
        self.read_whitespace(is_blank);
        let start = self.mark();
        if self.peek() == Some(b'=') {
            self.advance();
            self.emit(TokenKind::AssignmentOperator, start);
            return Ok(());
        }
        let found = self.current_char();
        Err(self.error(LexErrorKind::ExpectedAssignment { found }, start))
    }

    /// Only spaces are skipped before a value; a leading tab is kept
    /// as part of an unquoted value.
    fn read_value(&mut self) -> Result<(), LexError> {
        self.read_whitespace(|b| b == b' ');
        match self.peek() {
            Some(quote @ (b'"' | b'\'')) => self.read_quoted(quote),
            _ => {
                let start = self.mark();
                self.advance_while(|b| b != b'#' && !is_line_break(b));
                if self.pos > start.pos {
                    self.emit(TokenKind::Literal, start);
                }
                Ok(())
            }
        }
    }

    fn read_quoted(&mut self, quote: u8) -> Result<(), LexError> {
        let open = self.mark();
        self.advance();
        self.emit(TokenKind::Quote, open);

        let content = self.mark();
        self.advance_while(|b| b != quote);
        if self.peek().is_none() {
            return Err(self.error(LexErrorKind::UnterminatedQuote(char::from(quote)), open));
        }
        if self.pos > content.pos {
            self.emit(TokenKind::Literal, content);
        }

        let close = self.mark();
        self.advance();
        self.emit(TokenKind::Quote, close);
        Ok(())
    }
}

const fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t')
}

const fn is_line_break(b: u8) -> bool {
    matches!(b, b'\n' | b'\r')
}
