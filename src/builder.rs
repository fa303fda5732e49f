use crate::ast::{
    Comment, Document, Identifier, Literal, QuoteStyle, QuotedLiteral, Statement, Value,
    VariableDeclaration,
};

impl Document {
    /// Create a new empty document.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }

    /// Append a statement without a trailing line break.
    #[must_use]
    pub fn statement(mut self, statement: Statement) -> Self {
        self.statements.push(statement);
        self
    }

    /// Append a `NAME=value` line with an unquoted value.
    #[must_use]
    pub fn variable(self, name: &str, value: &str) -> Self {
        self.declaration(VariableDeclaration::new(name).literal(value))
    }

    /// Append a `NAME="value"` line.
    #[must_use]
    pub fn quoted(self, name: &str, value: &str, quote: QuoteStyle) -> Self {
        self.declaration(VariableDeclaration::new(name).quoted(value, quote))
    }

    /// Append a `NAME=` line with no value.
    #[must_use]
    pub fn empty(self, name: &str) -> Self {
        self.declaration(VariableDeclaration::new(name))
    }

    /// Append a declaration line.
    #[must_use]
    pub fn declaration(self, declaration: VariableDeclaration) -> Self {
        self.statement(Statement::VariableDeclaration(declaration))
            .blank()
    }

    /// Append a `#body` line.
    #[must_use]
    pub fn comment(self, body: &str) -> Self {
        let body = (!body.is_empty()).then(|| body.to_string());
        self.statement(Statement::Comment(Comment { body })).blank()
    }

    /// Append a line break.
    #[must_use]
    pub fn blank(self) -> Self {
        self.statement(Statement::Newline)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl VariableDeclaration {
    /// Create a declaration with no value.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            identifier: Identifier {
                name: name.to_string(),
            },
            value: None,
        }
    }

    /// Set an unquoted value.
    #[must_use]
    pub fn literal(mut self, value: &str) -> Self {
        self.value = Some(Value::Literal(Literal {
            value: value.to_string(),
        }));
        self
    }

    /// Set a quoted value. An empty string gives `""` with no content.
    #[must_use]
    pub fn quoted(mut self, value: &str, quote: QuoteStyle) -> Self {
        let content = (!value.is_empty()).then(|| Literal {
            value: value.to_string(),
        });
        self.value = Some(Value::Quoted(QuotedLiteral { quote, content }));
        self
    }
}
