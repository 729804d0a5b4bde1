//! # describe-registry
//!
//! Runtime half of describe: every mounted wrapper contributes one [DescribeNode] to a shared
//! [DescribeTree], and every change republishes the tree as an indented bullet list into an
//! external [StateSink].
//!
//! ```text
//! register(a, root, "Pokedex")          - Pokedex
//! register(b, a,    None)         →       - Pikachu
//! register(c, b,    "Pikachu")
//! ```
//!
//! Layout
//!
//!     node.rs          DescribeNode and snapshot decoding
//!     tree.rs          Keyed store of nodes
//!     serialize.rs     Tree → description string (pure)
//!     sink.rs          StateSink contract and the in-memory sink
//!     registry.rs      Locked tree + sink, change propagation
//!     attachment.rs    Scoped registration bound to a value's lifetime
//!     error.rs         Snapshot decoding errors

pub mod attachment;
pub mod error;
pub mod node;
pub mod registry;
pub mod serialize;
pub mod sink;
pub mod tree;

pub use attachment::Attachment;
pub use error::RegistryError;
pub use node::{nodes_from_json_str, DescribeNode};
pub use registry::{DescribeRegistry, RegistryOptions, DEFAULT_STATE_KEY};
pub use serialize::to_description_str;
pub use sink::{MemorySink, StateSink};
pub use tree::DescribeTree;
