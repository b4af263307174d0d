//! Source discovery and pipeline orchestration.
//!
//! - **walker**: lists source files in a deterministic order
//! - **pipeline**: drives extraction, deduplication and the artifact write
//!
//! Processing order is part of the output contract: deduplication
//! keeps the first record seen, so the same sources must always be
//! visited in the same order.

pub mod pipeline;
pub mod walker;

pub use pipeline::{extract_source, IngestPipeline};
pub use walker::FileWalker;
