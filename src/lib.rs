//! postseed - post seed extraction from authoring documents
//!
//! Turns word-processor documents and spreadsheet workbooks into a
//! deduplicated JSON array of post records for downstream publishing.
//!
//! # Architecture
//!
//! - **core**: Domain logic (interface-agnostic)
//!   - config, error, types, xdg
//!   - extract (document and spreadsheet extractors)
//!   - aggregate (deduplication, artifact I/O)
//!   - ingest (discovery, pipeline orchestration)
//!   - covers (slugs and cover plans)
//!   - services (shared service container)
//!
//! - **cli**: clap adapter (depends on core)
//!
//! # Output
//!
//! Each record has exactly `title`, `content`, `tags`, `source` and
//! `status`. Titles are unique; when two sources produce the same
//! title, the one discovered first wins.

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{PostSeedError, Result};
pub use crate::core::services::Services;
pub use crate::core::types::*;
