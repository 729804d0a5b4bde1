//! Standard transform definitions
//!
//! Pre-built pipelines for the common paths, defined as `once_cell::sync::Lazy` statics.
//! Each uses the default [`DescribeOptions`]; build a custom pipeline with
//! [`describe_json_with`] when the names differ.

use crate::describe::DescribeOptions;
use crate::transforms::stages::{DecodeJson, DescribeStage, EncodeJson, Treeviz};
use crate::transforms::Transform;
use describe_ast::SourceFile;
use once_cell::sync::Lazy;

/// Type alias for transforms ending in a program
pub type AstTransform = Transform<String, SourceFile>;

/// Type alias for transforms ending in rendered text
pub type TextTransform = Transform<String, String>;

/// JSON text → SourceFile, no rewrite
pub static JSON_TO_AST: Lazy<AstTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(DecodeJson));

/// JSON text → rewritten SourceFile
pub static DESCRIBE_AST: Lazy<AstTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(DecodeJson)
        .then(DescribeStage::default())
});

/// JSON text → rewritten JSON text
pub static DESCRIBE_JSON: Lazy<TextTransform> =
    Lazy::new(|| describe_json_with(DescribeOptions::default()));

/// JSON text → treeviz of the rewritten program
pub static DESCRIBE_TREEVIZ: Lazy<TextTransform> =
    Lazy::new(|| {
        Transform::from_fn(Ok)
            .then_transform(&*DESCRIBE_AST)
            .then(Treeviz)
    });

/// JSON text → rewritten SourceFile with custom names
pub fn describe_ast_with(options: DescribeOptions) -> AstTransform {
    Transform::from_fn(Ok)
        .then(DecodeJson)
        .then(DescribeStage::new(options))
}

/// JSON text → rewritten JSON text with custom names
pub fn describe_json_with(options: DescribeOptions) -> TextTransform {
    describe_ast_with(options).then(EncodeJson)
}

/// JSON text → treeviz of the rewritten program with custom names
pub fn describe_treeviz_with(options: DescribeOptions) -> TextTransform {
    describe_ast_with(options).then(Treeviz)
}
