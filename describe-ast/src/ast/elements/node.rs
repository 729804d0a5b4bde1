//! The node variant set

use super::import::{ImportDeclaration, ImportSpecifier};
use super::jsx::{JsxAttribute, JsxElement, JsxExpressionContainer, JsxIdentifier};
use super::literal::{Identifier, StringLiteral};
use super::opaque::OpaqueNode;
use serde_json::{Map, Value};

/// Fields of a typed node that the model does not interpret, kept verbatim.
pub type Meta = Map<String, Value>;

/// Any node below the program root
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    ImportDeclaration(ImportDeclaration),
    ImportSpecifier(ImportSpecifier),
    JsxElement(JsxElement),
    JsxAttribute(JsxAttribute),
    JsxExpressionContainer(JsxExpressionContainer),
    JsxIdentifier(JsxIdentifier),
    StringLiteral(StringLiteral),
    Identifier(Identifier),
    Opaque(OpaqueNode),
}

impl Node {
    /// The Babel `type` of this node
    pub fn node_type(&self) -> &str {
        match self {
            Node::ImportDeclaration(_) => "ImportDeclaration",
            Node::ImportSpecifier(_) => "ImportSpecifier",
            Node::JsxElement(_) => "JSXElement",
            Node::JsxAttribute(_) => "JSXAttribute",
            Node::JsxExpressionContainer(_) => "JSXExpressionContainer",
            Node::JsxIdentifier(_) => "JSXIdentifier",
            Node::StringLiteral(_) => "StringLiteral",
            Node::Identifier(_) => "Identifier",
            Node::Opaque(opaque) => &opaque.kind,
        }
    }

    /// Short human readable label, used by inspection formats
    pub fn display_label(&self) -> String {
        match self {
            Node::ImportDeclaration(decl) => {
                let names: Vec<&str> = decl
                    .specifiers
                    .iter()
                    .filter_map(|spec| match spec {
                        Node::ImportSpecifier(spec) => spec.imported_name(),
                        _ => None,
                    })
                    .collect();
                format!("{{ {} }} from \"{}\"", names.join(", "), decl.source())
            }
            Node::ImportSpecifier(spec) => spec.imported_name().unwrap_or("?").to_string(),
            Node::JsxElement(element) => format!("<{}>", element.name().unwrap_or("?")),
            Node::JsxAttribute(attr) => attr.name().unwrap_or("?").to_string(),
            Node::JsxExpressionContainer(_) => "{…}".to_string(),
            Node::JsxIdentifier(ident) => ident.name.clone(),
            Node::StringLiteral(lit) => format!("\"{}\"", lit.value),
            Node::Identifier(ident) => ident.name.clone(),
            Node::Opaque(opaque) => opaque.kind.clone(),
        }
    }

    /// Direct child nodes, in traversal order
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::ImportDeclaration(decl) => decl.specifiers.iter().collect(),
            Node::ImportSpecifier(spec) => vec![spec.imported.as_ref(), spec.local.as_ref()],
            Node::JsxElement(element) => element
                .opening
                .attributes
                .iter()
                .chain(element.children.iter())
                .collect(),
            Node::JsxAttribute(attr) => {
                let mut children = vec![attr.name.as_ref()];
                children.extend(attr.value.as_deref());
                children
            }
            Node::JsxExpressionContainer(container) => vec![container.expression.as_ref()],
            Node::Opaque(opaque) => opaque.nodes(),
            Node::JsxIdentifier(_) | Node::StringLiteral(_) | Node::Identifier(_) => Vec::new(),
        }
    }

    /// Mutable counterpart of [Node::children]
    pub fn children_mut(&mut self) -> Vec<&mut Node> {
        match self {
            Node::ImportDeclaration(decl) => decl.specifiers.iter_mut().collect(),
            Node::ImportSpecifier(spec) => vec![spec.imported.as_mut(), spec.local.as_mut()],
            Node::JsxElement(element) => element
                .opening
                .attributes
                .iter_mut()
                .chain(element.children.iter_mut())
                .collect(),
            Node::JsxAttribute(attr) => {
                let mut children = vec![attr.name.as_mut()];
                children.extend(attr.value.as_deref_mut());
                children
            }
            Node::JsxExpressionContainer(container) => vec![container.expression.as_mut()],
            Node::Opaque(opaque) => opaque.nodes_mut(),
            Node::JsxIdentifier(_) | Node::StringLiteral(_) | Node::Identifier(_) => Vec::new(),
        }
    }

    pub fn as_jsx_element(&self) -> Option<&JsxElement> {
        match self {
            Node::JsxElement(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_import(&self) -> Option<&ImportDeclaration> {
        match self {
            Node::ImportDeclaration(decl) => Some(decl),
            _ => None,
        }
    }

    pub fn as_string_literal(&self) -> Option<&StringLiteral> {
        match self {
            Node::StringLiteral(lit) => Some(lit),
            _ => None,
        }
    }
}

impl From<ImportDeclaration> for Node {
    fn from(decl: ImportDeclaration) -> Self {
        Node::ImportDeclaration(decl)
    }
}

impl From<JsxElement> for Node {
    fn from(element: JsxElement) -> Self {
        Node::JsxElement(element)
    }
}

impl From<JsxAttribute> for Node {
    fn from(attr: JsxAttribute) -> Self {
        Node::JsxAttribute(attr)
    }
}

impl From<JsxExpressionContainer> for Node {
    fn from(container: JsxExpressionContainer) -> Self {
        Node::JsxExpressionContainer(container)
    }
}

impl From<StringLiteral> for Node {
    fn from(lit: StringLiteral) -> Self {
        Node::StringLiteral(lit)
    }
}

impl From<Identifier> for Node {
    fn from(ident: Identifier) -> Self {
        Node::Identifier(ident)
    }
}

impl From<OpaqueNode> for Node {
    fn from(opaque: OpaqueNode) -> Self {
        Node::Opaque(opaque)
    }
}
