//! Opaque pass-through nodes
//!
//!     Every node kind the model does not type is kept as its `type` plus a list of fields.
//!     A field is a nested node, a list, or a plain JSON value (numbers, flags, `loc`, ...).
//!     Nested nodes are found and traversed, plain values are carried as-is.

use super::node::Node;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct OpaqueNode {
    pub kind: String,
    pub fields: Vec<(String, Field)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Node(Box<Node>),
    List(Vec<Field>),
    Value(Value),
}

impl OpaqueNode {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.fields.push((name.into(), field));
        self
    }

    /// Shorthand for a field holding one node
    pub fn with_node(self, name: impl Into<String>, node: Node) -> Self {
        self.with_field(name, Field::Node(Box::new(node)))
    }

    /// Shorthand for a field holding a list of nodes
    pub fn with_nodes(self, name: impl Into<String>, nodes: Vec<Node>) -> Self {
        let list = nodes
            .into_iter()
            .map(|node| Field::Node(Box::new(node)))
            .collect();
        self.with_field(name, Field::List(list))
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|(field_name, _)| field_name == name)
            .map(|(_, field)| field)
    }

    /// All nested nodes, in field order
    pub fn nodes(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        for (_, field) in &self.fields {
            field.collect_nodes(&mut out);
        }
        out
    }

    pub fn nodes_mut(&mut self) -> Vec<&mut Node> {
        let mut out = Vec::new();
        for (_, field) in &mut self.fields {
            field.collect_nodes_mut(&mut out);
        }
        out
    }
}

impl Field {
    fn collect_nodes<'a>(&'a self, out: &mut Vec<&'a Node>) {
        match self {
            Field::Node(node) => out.push(node.as_ref()),
            Field::List(items) => {
                for item in items {
                    item.collect_nodes(out);
                }
            }
            Field::Value(_) => {}
        }
    }

    fn collect_nodes_mut<'a>(&'a mut self, out: &mut Vec<&'a mut Node>) {
        match self {
            Field::Node(node) => out.push(node.as_mut()),
            Field::List(items) => {
                for item in items {
                    item.collect_nodes_mut(out);
                }
            }
            Field::Value(_) => {}
        }
    }
}
