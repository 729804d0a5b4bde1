//! The unit of registration

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};

/// One mounted wrapper instance
///
/// Serialises as `{ "id", "parentId", "content" }`. A missing `parentId` or `content` reads as
/// null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeNode {
    pub id: String,
    /// `None` for a root node
    #[serde(default)]
    pub parent_id: Option<String>,
    /// `None` for a structural node with no description of its own
    #[serde(default)]
    pub content: Option<String>,
}

impl DescribeNode {
    pub fn new(id: impl Into<String>, parent_id: Option<&str>, content: Option<&str>) -> Self {
        Self {
            id: id.into(),
            parent_id: parent_id.map(str::to_string),
            content: content.map(str::to_string),
        }
    }

    pub fn root(id: impl Into<String>, content: Option<&str>) -> Self {
        Self::new(id, None, content)
    }

    pub fn child(id: impl Into<String>, parent_id: &str, content: Option<&str>) -> Self {
        Self::new(id, Some(parent_id), content)
    }

    /// Trimmed content, when there is any left after trimming
    pub fn description(&self) -> Option<&str> {
        self.content
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}

/// Decode a JSON array of nodes, keeping file order
pub fn nodes_from_json_str(source: &str) -> Result<Vec<DescribeNode>, RegistryError> {
    Ok(serde_json::from_str(source)?)
}
