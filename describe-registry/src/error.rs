use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// The snapshot is not a JSON array of `{ id, parentId, content }` objects
    #[error("invalid node snapshot: {0}")]
    Snapshot(String),
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Snapshot(err.to_string())
    }
}
