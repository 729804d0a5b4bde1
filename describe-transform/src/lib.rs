//! # describe-transform
//!
//! Rewrites elements carrying the reserved marker attribute into explicit wrapper elements,
//! and makes sure the wrapper symbol is imported exactly once.
//!
//! ```text
//! <Card llm="Pokemon card" className="card" />
//!
//!   becomes
//!
//! import { LLMDescribe } from "@/widgets/llm-describe";
//! <LLMDescribe content="Pokemon card"><Card className="card" /></LLMDescribe>
//! ```
//!
//! Layout
//!
//!     describe.rs      The rewrite pass itself (options, report, visitor)
//!     transforms       Composable Runnable / Transform pipeline types
//!       ├── stages     JSON decode, describe, JSON encode, treeviz
//!       └── standard   Pre-built pipelines as lazy statics
//!     loader.rs        Load a JSON tree from a file or string and run a pipeline over it
//!
//! The rewrite is idempotent: the marker attribute is physically removed from every element
//! it wraps, so a second run finds nothing to do.

pub mod describe;
pub mod loader;
pub mod transforms;

pub use describe::{describe_program, DescribeOptions, DescribePass, TransformReport};
pub use loader::{LoaderError, SourceLoader};
pub use transforms::stages::DescribeStage;
pub use transforms::{Runnable, Transform, TransformError};
