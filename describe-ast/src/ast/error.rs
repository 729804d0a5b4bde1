//! Error types for decoding the interchange tree

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AstError {
    /// The input is not valid JSON
    #[error("invalid JSON: {0}")]
    Json(String),
    /// A node position holds something that is not a `{ "type": ... }` object
    #[error("expected a node object, found {0}")]
    NotANode(String),
    #[error("{kind} is missing required field `{field}`")]
    MissingField { kind: String, field: &'static str },
    #[error("{kind}.{field}: expected {expected}, found {found}")]
    UnexpectedShape {
        kind: String,
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}

impl From<serde_json::Error> for AstError {
    fn from(err: serde_json::Error) -> Self {
        AstError::Json(err.to_string())
    }
}
