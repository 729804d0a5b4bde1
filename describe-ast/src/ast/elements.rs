//! Node kinds
//!
//!     [Node] is the closed variant set. Each typed kind lives in its own module; the opaque
//!     kind and its [Field] values live in [opaque].

pub mod import;
pub mod jsx;
pub mod literal;
pub mod node;
pub mod opaque;
pub mod program;

pub use import::{ImportDeclaration, ImportSpecifier};
pub use jsx::{
    JsxAttribute, JsxClosingElement, JsxElement, JsxExpressionContainer, JsxIdentifier,
    JsxOpeningElement,
};
pub use literal::{Identifier, StringLiteral};
pub use node::{Meta, Node};
pub use opaque::{Field, OpaqueNode};
pub use program::{Program, SourceFile};
