//! # describe-ast
//!
//! The program model the describe transform operates on.
//!
//! File Layout
//!
//!     The tree is never parsed from source here. An external parser (Babel) produces it, and
//!     this crate only decodes its JSON interchange form, lets passes walk and rewrite it, and
//!     encodes it back:
//!
//!     src/ast
//!       ├── elements     Node kinds (program, imports, JSX, literals, opaque pass-through)
//!       ├── babel.rs     JSON decoding / encoding
//!       ├── traits.rs    Mutable visitor and the depth-first walk
//!       └── error.rs     Decoding errors
//!     src/formats
//!       └── treeviz.rs   One-line-per-node inspection output

pub mod ast;
pub mod formats;

pub use ast::{
    AstError, Field, Identifier, ImportDeclaration, ImportSpecifier, JsxAttribute,
    JsxClosingElement, JsxElement, JsxExpressionContainer, JsxIdentifier, JsxOpeningElement, Meta,
    Node, OpaqueNode, Program, SourceFile, StringLiteral, VisitorMut,
};
pub use formats::treeviz::to_treeviz_str;
