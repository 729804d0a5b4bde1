//! Source loading utilities
//!
//! `SourceLoader` reads a Babel JSON tree from a file or string and runs transforms on it.
//! Used by the CLI and by tests.
//!
//! ```rust,ignore
//! use describe_transform::loader::SourceLoader;
//! use describe_transform::transforms::standard::DESCRIBE_TREEVIZ;
//!
//! let loader = SourceLoader::from_path("component.ast.json")?;
//! let file = loader.describe()?;
//! let tree = loader.with(&DESCRIBE_TREEVIZ)?;
//! ```

use crate::describe::DescribeOptions;
use crate::transforms::standard::{describe_ast_with, DESCRIBE_AST, JSON_TO_AST};
use crate::transforms::{Transform, TransformError};
use describe_ast::SourceFile;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Transform error: {0}")]
    TransformError(#[from] TransformError),
}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::IoError(err.to_string())
    }
}

pub struct SourceLoader {
    source: String,
}

impl SourceLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(SourceLoader { source })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        SourceLoader {
            source: source.into(),
        }
    }

    /// Run any pipeline that starts from JSON text
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.source.clone())?)
    }

    /// Decode without rewriting
    pub fn parse(&self) -> Result<SourceFile, LoaderError> {
        self.with(&JSON_TO_AST)
    }

    /// Decode and rewrite with the default names
    pub fn describe(&self) -> Result<SourceFile, LoaderError> {
        self.with(&DESCRIBE_AST)
    }

    pub fn describe_with(&self, options: &DescribeOptions) -> Result<SourceFile, LoaderError> {
        self.with(&describe_ast_with(options.clone()))
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}
