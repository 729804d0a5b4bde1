//! Scoped registration
//!
//! An [Attachment] is what a mounted wrapper holds. It registers its node when created and
//! unregisters it when dropped, on every exit path.
//!
//! ```rust,ignore
//! let panel = registry.attach(Some("Pokedex"));
//! {
//!     let card = panel.attach_child(Some("Pikachu"));
//!     assert_eq!(registry.description(), "- Pokedex\n  - Pikachu");
//! }
//! assert_eq!(registry.description(), "- Pokedex");
//! ```

use crate::node::DescribeNode;
use crate::registry::DescribeRegistry;
use tracing::trace;

#[must_use = "dropping an attachment unregisters its node immediately"]
pub struct Attachment<'r> {
    registry: &'r DescribeRegistry,
    node: DescribeNode,
}

impl DescribeRegistry {
    /// Register a root node under a fresh id
    pub fn attach(&self, content: Option<&str>) -> Attachment<'_> {
        Attachment::new(self, None, content)
    }
}

impl<'r> Attachment<'r> {
    fn new(
        registry: &'r DescribeRegistry,
        parent_id: Option<&str>,
        content: Option<&str>,
    ) -> Self {
        let node = DescribeNode::new(registry.next_id(), parent_id, content);
        registry.register(node.clone());
        Self { registry, node }
    }

    /// Register a child of this node under a fresh id
    pub fn attach_child(&self, content: Option<&str>) -> Attachment<'r> {
        Attachment::new(self.registry, Some(self.node.id.as_str()), content)
    }

    pub fn id(&self) -> &str {
        &self.node.id
    }

    pub fn parent_id(&self) -> Option<&str> {
        self.node.parent_id.as_deref()
    }

    pub fn content(&self) -> Option<&str> {
        self.node.content.as_deref()
    }

    pub fn node(&self) -> &DescribeNode {
        &self.node
    }

    /// Update the content in place, keeping id and parent
    ///
    /// Re-registers only when the content actually changed; returns whether it did.
    pub fn set_content(&mut self, content: Option<&str>) -> bool {
        if self.node.content.as_deref() == content {
            trace!(id = %self.node.id, "content unchanged");
            return false;
        }
        self.node.content = content.map(str::to_string);
        self.registry.register(self.node.clone());
        true
    }

    /// Move this attachment to a fresh id
    ///
    /// The old entry is removed before the new one is added, so the slot is never listed
    /// twice. Children attached under the old id are not moved.
    pub fn reattach(&mut self) {
        let id = self.registry.next_id();
        self.registry.unregister(&self.node.id);
        self.node.id = id;
        self.registry.register(self.node.clone());
    }

    /// Unregister now
    pub fn detach(self) {}
}

impl Drop for Attachment<'_> {
    fn drop(&mut self) {
        self.registry.unregister(&self.node.id);
    }
}

impl std::fmt::Debug for Attachment<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Attachment").field(&self.node).finish()
    }
}
