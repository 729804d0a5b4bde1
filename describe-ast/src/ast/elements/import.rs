//! Import declarations
//!
//!     Only named specifiers (`import { A as B } from "x"`) are typed. Default and namespace
//!     specifiers stay opaque: they can never bind a symbol by its exported name, which is the
//!     only question the transform asks of an import.

use super::literal::{Identifier, StringLiteral};
use super::node::{Meta, Node};

#[derive(Debug, Clone, PartialEq)]
pub struct ImportDeclaration {
    pub specifiers: Vec<Node>,
    pub source: StringLiteral,
    pub meta: Meta,
}

impl ImportDeclaration {
    /// `import { name, ... } from "source"`
    pub fn named<S: AsRef<str>>(names: &[S], source: impl Into<String>) -> Self {
        Self {
            specifiers: names
                .iter()
                .map(|name| Node::ImportSpecifier(ImportSpecifier::named(name.as_ref())))
                .collect(),
            source: StringLiteral::new(source),
            meta: Meta::new(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source.value
    }

    /// Whether a named specifier imports `name` (the exported name, not the local alias)
    pub fn imports_named(&self, name: &str) -> bool {
        self.specifiers.iter().any(|spec| match spec {
            Node::ImportSpecifier(spec) => spec.imported_name() == Some(name),
            _ => false,
        })
    }
}

/// A named import specifier
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSpecifier {
    /// Identifier or StringLiteral (`import { "a-b" as ab }`)
    pub imported: Box<Node>,
    pub local: Box<Node>,
    pub meta: Meta,
}

impl ImportSpecifier {
    pub fn named(name: &str) -> Self {
        Self {
            imported: Box::new(Node::Identifier(Identifier::new(name))),
            local: Box::new(Node::Identifier(Identifier::new(name))),
            meta: Meta::new(),
        }
    }

    /// Exported name, when it is written as an identifier
    pub fn imported_name(&self) -> Option<&str> {
        match self.imported.as_ref() {
            Node::Identifier(ident) => Some(&ident.name),
            _ => None,
        }
    }
}
