//! Leaf nodes: string literals and identifiers

use super::node::Meta;

/// A string literal. `meta` keeps Babel's `extra.raw`, so quoting survives re-encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: String,
    pub meta: Meta,
}

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            meta: Meta::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub meta: Meta,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meta: Meta::new(),
        }
    }
}
