//! AST definitions and utilities for describe
//!
//!     The model is a tagged variant over the handful of node kinds the transform needs to
//!     inspect or build, plus an opaque kind that carries everything else through untouched.
//!
//! Typed kinds
//!
//!     Program, ImportDeclaration, ImportSpecifier, JSXElement, JSXAttribute,
//!     JSXExpressionContainer, JSXIdentifier, StringLiteral and Identifier. Their structural
//!     fields are decoded into Rust types; every other field (`start`, `end`, `loc`, `extra`,
//!     `importKind`, ...) is kept verbatim in the node's [Meta] so an untouched node encodes
//!     back to the same JSON.
//!
//! Opaque kinds
//!
//!     Any other node (functions, returns, calls, fragments, JSX text...) becomes an
//!     [OpaqueNode]. Its fields are still scanned for nested nodes, so JSX returned from a
//!     component body is reachable by the walk.
//!
//!     See [babel] for the interchange rules and [traits] for traversal.

pub mod babel;
pub mod elements;
pub mod error;
pub mod traits;

pub use elements::{
    Field, Identifier, ImportDeclaration, ImportSpecifier, JsxAttribute, JsxClosingElement,
    JsxElement, JsxExpressionContainer, JsxIdentifier, JsxOpeningElement, Meta, Node, OpaqueNode,
    Program, SourceFile, StringLiteral,
};
pub use error::AstError;
pub use traits::{walk_node, walk_program, VisitorMut};
