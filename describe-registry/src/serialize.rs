//! Tree → description string
//!
//!     1. Group nodes by parent id (`None` is the root group).
//!     2. Sort each group by id, plain byte-wise string order.
//!     3. Walk depth-first from the root group. A node with non-blank content emits
//!        `"  " * depth + "- " + trimmed content`; its children are walked at `depth + 1`
//!        whether or not it emitted a line.
//!     4. Join with `\n`, no trailing newline.
//!
//! Nodes whose parent chain never reaches the root group are not emitted.

use crate::node::DescribeNode;
use std::collections::{HashMap, HashSet};

const INDENT: &str = "  ";
const BULLET: &str = "- ";

pub fn to_description_str<'a, I>(nodes: I) -> String
where
    I: IntoIterator<Item = &'a DescribeNode>,
{
    let mut groups: HashMap<Option<&str>, Vec<&DescribeNode>> = HashMap::new();
    for node in nodes {
        groups.entry(node.parent_id.as_deref()).or_default().push(node);
    }
    for group in groups.values_mut() {
        group.sort_by(|a, b| a.id.cmp(&b.id));
    }

    // Depth-first over an explicit stack, so deep parent chains cannot exhaust the call stack.
    let mut pending: Vec<(&DescribeNode, usize)> = Vec::new();
    push_children(&groups, None, 0, &mut pending);

    let mut lines = Vec::new();
    let mut expanded = HashSet::new();
    while let Some((node, depth)) = pending.pop() {
        if let Some(text) = node.description() {
            lines.push(format!("{}{}{}", INDENT.repeat(depth), BULLET, text));
        }
        // A snapshot may repeat an id; each id's children are walked once.
        if expanded.insert(node.id.as_str()) {
            push_children(&groups, Some(node.id.as_str()), depth + 1, &mut pending);
        }
    }
    lines.join("\n")
}

/// Queue the children of `parent` so the smallest id is popped first
fn push_children<'a>(
    groups: &HashMap<Option<&'a str>, Vec<&'a DescribeNode>>,
    parent: Option<&'a str>,
    depth: usize,
    pending: &mut Vec<(&'a DescribeNode, usize)>,
) {
    if let Some(children) = groups.get(&parent) {
        pending.extend(children.iter().rev().map(|node| (*node, depth)));
    }
}
