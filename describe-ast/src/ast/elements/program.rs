//! Program root and the surrounding `File` wrapper

use super::import::ImportDeclaration;
use super::node::{Meta, Node};

/// A compilation unit: its top-level statements
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Node>,
    pub meta: Meta,
}

impl Program {
    pub fn new(body: Vec<Node>) -> Self {
        Self {
            body,
            meta: Meta::new(),
        }
    }

    /// Top-level import declarations, in statement order
    pub fn imports(&self) -> impl Iterator<Item = &ImportDeclaration> {
        self.body.iter().filter_map(Node::as_import)
    }

    /// Insert `statement` before every other statement
    pub fn prepend(&mut self, statement: Node) {
        self.body.insert(0, statement);
    }
}

/// The decoded root
///
/// Babel wraps the program in a `File` node (comments, tokens, errors). When the input root
/// was a `File`, its other fields are kept in `file_meta` and the wrapper is re-emitted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceFile {
    pub program: Program,
    pub file_meta: Option<Meta>,
}

impl SourceFile {
    pub fn from_program(program: Program) -> Self {
        Self {
            program,
            file_meta: None,
        }
    }
}

impl From<Program> for SourceFile {
    fn from(program: Program) -> Self {
        Self::from_program(program)
    }
}
