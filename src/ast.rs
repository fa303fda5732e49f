/// Complete `.env` document: statements in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub statements: Vec<Statement>,
}

/// One structural unit of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Line boundary.
    Newline,
    /// `# ...`
    Comment(Comment),
    /// `NAME=value`
    VariableDeclaration(VariableDeclaration),
}

/// Comment with optional body; `None` for a bare `#`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub body: Option<String>,
}

/// Variable name matching `[A-Za-z_][A-Za-z0-9_]*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: String,
}

/// Declaration with an optional value; `None` for `NAME=`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    pub identifier: Identifier,
    pub value: Option<Value>,
}

/// Right-hand side of a declaration, preserving its quoting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Literal(Literal),
    Quoted(QuotedLiteral),
}

/// Raw value text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    pub value: String,
}

/// Quoted value; `content` is `None` for `""` or `''`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotedLiteral {
    pub quote: QuoteStyle,
    pub content: Option<Literal>,
}

/// Quote character used around a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    Single,
    Double,
}

impl QuoteStyle {
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '\'' => Some(Self::Single),
            '"' => Some(Self::Double),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }
}

impl Value {
    /// Return the value text regardless of quoting style.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Literal(literal) => &literal.value,
            Self::Quoted(quoted) => quoted.content.as_ref().map_or("", |c| c.value.as_str()),
        }
    }
}

impl VariableDeclaration {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.identifier.name
    }

    /// Value text, empty when the declaration has no value.
    #[must_use]
    pub fn value_text(&self) -> &str {
        self.value.as_ref().map_or("", Value::text)
    }
}

impl Document {
    /// Iterate over the variable declarations in source order.
    pub fn declarations(&self) -> impl Iterator<Item = &VariableDeclaration> {
        self.statements.iter().filter_map(|statement| match statement {
            Statement::VariableDeclaration(declaration) => Some(declaration),
            _ => None,
        })
    }

    /// Iterate over the comments in source order.
    pub fn comments(&self) -> impl Iterator<Item = &Comment> {
        self.statements.iter().filter_map(|statement| match statement {
            Statement::Comment(comment) => Some(comment),
            _ => None,
        })
    }
}
