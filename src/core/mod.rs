//! Core domain logic (interface-agnostic)
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: `PostRecord` and run statistics
//! - **xdg**: XDG directory handling
//! - **extract**: Document and spreadsheet extractors
//! - **aggregate**: Deduplication and artifact I/O
//! - **ingest**: Source discovery and pipeline orchestration
//! - **covers**: Slugs and cover plans for downstream renderers
//! - **services**: Unified service container

pub mod aggregate;
pub mod config;
pub mod covers;
pub mod error;
pub mod extract;
pub mod ingest;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{PostSeedError, Result};
pub use services::Services;
