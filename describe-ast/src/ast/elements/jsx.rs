//! JSX elements and their parts
//!
//!     Mirrors Babel's split between `JSXElement`, its opening/closing elements and the
//!     attribute list. Element names and attribute names are nodes: a plain `JSXIdentifier`
//!     in the common case, an opaque `JSXMemberExpression` / `JSXNamespacedName` otherwise.
//!
//!     Name lookups ([JsxElement::name], [JsxAttribute::name]) only answer for plain
//!     identifiers. `<a:llm>` or `ns:llm="x"` never match a bare name.

use super::literal::StringLiteral;
use super::node::{Meta, Node};
use super::opaque::OpaqueNode;

#[derive(Debug, Clone, PartialEq)]
pub struct JsxElement {
    pub opening: JsxOpeningElement,
    pub closing: Option<JsxClosingElement>,
    pub children: Vec<Node>,
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsxOpeningElement {
    pub name: Box<Node>,
    pub attributes: Vec<Node>,
    pub self_closing: bool,
    pub meta: Meta,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsxClosingElement {
    pub name: Box<Node>,
    pub meta: Meta,
}

impl JsxElement {
    /// `<name {attributes}>{children}</name>`, always with an explicit closing element
    pub fn new(name: &str, attributes: Vec<Node>, children: Vec<Node>) -> Self {
        Self {
            opening: JsxOpeningElement {
                name: Box::new(Node::JsxIdentifier(JsxIdentifier::new(name))),
                attributes,
                self_closing: false,
                meta: Meta::new(),
            },
            closing: Some(JsxClosingElement {
                name: Box::new(Node::JsxIdentifier(JsxIdentifier::new(name))),
                meta: Meta::new(),
            }),
            children,
            meta: Meta::new(),
        }
    }

    /// `<name {attributes} />`
    pub fn self_closing(name: &str, attributes: Vec<Node>) -> Self {
        Self {
            opening: JsxOpeningElement {
                name: Box::new(Node::JsxIdentifier(JsxIdentifier::new(name))),
                attributes,
                self_closing: true,
                meta: Meta::new(),
            },
            closing: None,
            children: Vec::new(),
            meta: Meta::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self.opening.name.as_ref() {
            Node::JsxIdentifier(ident) => Some(&ident.name),
            _ => None,
        }
    }

    pub fn attributes(&self) -> &[Node] {
        &self.opening.attributes
    }

    /// Index of the first attribute named exactly `name`
    pub fn attribute_position(&self, name: &str) -> Option<usize> {
        self.opening.attributes.iter().position(|attr| match attr {
            Node::JsxAttribute(attr) => attr.name() == Some(name),
            _ => false,
        })
    }

    pub fn attribute(&self, name: &str) -> Option<&JsxAttribute> {
        self.attribute_position(name)
            .and_then(|index| match &self.opening.attributes[index] {
                Node::JsxAttribute(attr) => Some(attr),
                _ => None,
            })
    }

    /// Child elements, skipping text and expression children
    pub fn child_elements(&self) -> impl Iterator<Item = &JsxElement> {
        self.children.iter().filter_map(Node::as_jsx_element)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsxAttribute {
    pub name: Box<Node>,
    /// `None` for a bare attribute (`<Foo llm />`)
    pub value: Option<Box<Node>>,
    pub meta: Meta,
}

impl JsxAttribute {
    pub fn new(name: &str, value: Option<Node>) -> Self {
        Self {
            name: Box::new(Node::JsxIdentifier(JsxIdentifier::new(name))),
            value: value.map(Box::new),
            meta: Meta::new(),
        }
    }

    /// `name="value"`
    pub fn string(name: &str, value: &str) -> Self {
        Self::new(name, Some(Node::StringLiteral(StringLiteral::new(value))))
    }

    /// `name={expression}`
    pub fn expression(name: &str, expression: Node) -> Self {
        Self::new(
            name,
            Some(Node::JsxExpressionContainer(JsxExpressionContainer::new(
                expression,
            ))),
        )
    }

    pub fn name(&self) -> Option<&str> {
        match self.name.as_ref() {
            Node::JsxIdentifier(ident) => Some(&ident.name),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsxExpressionContainer {
    pub expression: Box<Node>,
    pub meta: Meta,
}

impl JsxExpressionContainer {
    pub fn new(expression: Node) -> Self {
        Self {
            expression: Box::new(expression),
            meta: Meta::new(),
        }
    }

    /// `{}` (or `{/* comment */}`)
    pub fn empty() -> Self {
        Self::new(Node::Opaque(OpaqueNode::new("JSXEmptyExpression")))
    }

    pub fn is_empty(&self) -> bool {
        self.expression.node_type() == "JSXEmptyExpression"
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JsxIdentifier {
    pub name: String,
    pub meta: Meta,
}

impl JsxIdentifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meta: Meta::new(),
        }
    }
}
