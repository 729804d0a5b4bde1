//! The shared registry
//!
//! One [DescribeRegistry] per host surface. Each mutation runs under a reentrant publish
//! lock: the tree is changed and rendered under the tree mutex, which is released before
//! the sink is touched. Publications from different threads therefore land in mutation
//! order, and a sink may call back into the registry from `state` or `set_state`.

use crate::node::DescribeNode;
use crate::sink::StateSink;
use crate::tree::DescribeTree;
use parking_lot::{Mutex, ReentrantMutex};
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, trace};

pub const DEFAULT_STATE_KEY: &str = "__widget_context";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Sink key the description is published under
    pub state_key: String,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            state_key: DEFAULT_STATE_KEY.to_string(),
        }
    }
}

pub struct DescribeRegistry {
    tree: Mutex<DescribeTree>,
    publishing: ReentrantMutex<()>,
    sink: Arc<dyn StateSink>,
    options: RegistryOptions,
    next_id: AtomicU64,
}

impl DescribeRegistry {
    pub fn new(sink: Arc<dyn StateSink>) -> Self {
        Self::with_options(sink, RegistryOptions::default())
    }

    pub fn with_options(sink: Arc<dyn StateSink>, options: RegistryOptions) -> Self {
        Self {
            tree: Mutex::new(DescribeTree::new()),
            publishing: ReentrantMutex::new(()),
            sink,
            options,
            next_id: AtomicU64::new(0),
        }
    }

    pub fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Insert or overwrite `node`, then publish
    pub fn register(&self, node: DescribeNode) {
        let _publishing = self.publishing.lock();
        let description = {
            let mut tree = self.tree.lock();
            debug!(
                id = %node.id,
                parent = node.parent_id.as_deref().unwrap_or("-"),
                "register"
            );
            tree.insert(node);
            tree.to_description_str()
        };
        self.publish(description);
    }

    /// Remove `id` (absent ids are a no-op), then publish
    ///
    /// Children of `id` stay registered. Until they are removed too they are unreachable
    /// from the root and do not appear in the description.
    pub fn unregister(&self, id: &str) {
        let _publishing = self.publishing.lock();
        let description = {
            let mut tree = self.tree.lock();
            let removed = tree.remove(id).is_some();
            debug!(id, removed, "unregister");
            tree.to_description_str()
        };
        self.publish(description);
    }

    /// Snapshot of every registered node, sorted by id
    pub fn nodes(&self) -> Vec<DescribeNode> {
        self.tree.lock().nodes()
    }

    pub fn description(&self) -> String {
        self.tree.lock().to_description_str()
    }

    /// Fresh id for a new attachment
    ///
    /// Ids are padded to the width of `u64::MAX`, so their string order matches
    /// allocation order.
    pub fn next_id(&self) -> String {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        format!("d{n:020}")
    }

    /// Merge `description` into the sink state. Callers hold the publish lock.
    fn publish(&self, description: String) {
        let mut state = match self.sink.state() {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        trace!(
            key = %self.options.state_key,
            lines = description.lines().count(),
            "publish description"
        );
        state.insert(self.options.state_key.clone(), Value::String(description));
        self.sink.set_state(Value::Object(state));
    }
}

impl std::fmt::Debug for DescribeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescribeRegistry")
            .field("tree", &*self.tree.lock())
            .field("options", &self.options)
            .finish()
    }
}
