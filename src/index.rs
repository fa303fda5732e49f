//! Name lookup over a parsed document.
//!
//! The index stores statement positions rather than nodes, so the
//! document stays the single owner of every declaration. Redeclaring
//! a name is allowed: the last declaration wins.

use std::collections::HashMap;

use crate::ast::{Document, Statement, VariableDeclaration};

/// Maps each declared name to the position of its last declaration
/// in `Document::statements`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    positions: HashMap<String, usize>,
}

impl Index {
    /// Build the index with a single pass over `document`.
    #[must_use]
    pub fn build(document: &Document) -> Self {
        let mut positions = HashMap::new();
        for (i, statement) in document.statements.iter().enumerate() {
            if let Statement::VariableDeclaration(declaration) = statement {
                positions.insert(declaration.identifier.name.clone(), i);
            }
        }
        Self { positions }
    }

    /// Statement position of the declaration for `name`.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Resolve `name` against the document this index was built from.
    /// Returns `None` if the statement at the stored position no longer
    /// declares `name`.
    #[must_use]
    pub fn resolve<'d>(
        &self,
        document: &'d Document,
        name: &str,
    ) -> Option<&'d VariableDeclaration> {
        match document.statements.get(self.position(name)?)? {
            Statement::VariableDeclaration(declaration) if declaration.name() == name => {
                Some(declaration)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Declared names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(String::as_str)
    }
}
