use std::fmt;

/// Source location of a token or error.
///
/// `offset` and `length` are measured in bytes, `line` and `column`
/// are 1-based and count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub offset: usize,
    pub length: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    /// Byte offset just past the end of this span.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Variable name.
    Identifier,
    /// The `=` between a name and its value.
    AssignmentOperator,
    /// Value text, without surrounding quotes.
    Literal,
    /// A `"` or `'` delimiting a quoted value.
    Quote,
    /// Line break (`\n`, `\r\n` or `\r`).
    Newline,
    /// Run of spaces or tabs.
    Whitespace,
    /// The `#` that starts a comment.
    Comment,
    /// Everything after `#` up to the end of the line.
    CommentBody,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identifier => "identifier",
            Self::AssignmentOperator => "'='",
            Self::Literal => "value",
            Self::Quote => "quote",
            Self::Newline => "line break",
            Self::Whitespace => "whitespace",
            Self::Comment => "comment",
            Self::CommentBody => "comment body",
        };
        f.write_str(name)
    }
}

/// A single token with its kind, source text, and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            value: value.into(),
            span,
        }
    }

    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
