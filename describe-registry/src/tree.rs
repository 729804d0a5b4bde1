//! Keyed store of registered nodes

use crate::node::DescribeNode;
use crate::serialize::to_description_str;
use std::collections::BTreeMap;

/// Nodes keyed by id; at most one entry per id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescribeTree {
    nodes: BTreeMap<String, DescribeNode>,
}

impl DescribeTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `node.id`, returning the previous one
    pub fn insert(&mut self, node: DescribeNode) -> Option<DescribeNode> {
        self.nodes.insert(node.id.clone(), node)
    }

    /// Remove the entry for `id`; removing an absent id is a no-op
    pub fn remove(&mut self, id: &str) -> Option<DescribeNode> {
        self.nodes.remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&DescribeNode> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DescribeNode> {
        self.nodes.values()
    }

    /// Snapshot of every entry, sorted by id
    pub fn nodes(&self) -> Vec<DescribeNode> {
        self.nodes.values().cloned().collect()
    }

    pub fn to_description_str(&self) -> String {
        to_description_str(self.iter())
    }
}

impl FromIterator<DescribeNode> for DescribeTree {
    fn from_iter<T: IntoIterator<Item = DescribeNode>>(iter: T) -> Self {
        let mut tree = DescribeTree::new();
        for node in iter {
            tree.insert(node);
        }
        tree
    }
}
