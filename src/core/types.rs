//! Core data types for postseed.
//!
//! `PostRecord` is the only entity that leaves the pipeline. The
//! stats structs report what happened during a run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Lifecycle state written on every record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PostStatus {
    #[default]
    Published,
}

/// A normalized post extracted from one document or one spreadsheet row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Non-empty title, also the dedup key
    pub title: String,

    /// Body text; equals `title` when no body was recoverable
    pub content: String,

    /// Tags in discovery order
    pub tags: Vec<String>,

    /// Provenance label (`file.docx` or `book.xlsx:Sheet1`)
    pub source: String,

    pub status: PostStatus,
}

impl PostRecord {
    /// Create a published record
    pub fn published(
        title: impl Into<String>,
        content: impl Into<String>,
        tags: Vec<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tags,
            source: source.into(),
            status: PostStatus::Published,
        }
    }
}

/// Statistics from the extraction phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestStats {
    /// Source files discovered by the walker
    pub documents_found: usize,

    /// Source files that produced at least one candidate
    pub documents_extracted: usize,

    /// Source files that failed or yielded nothing
    pub documents_skipped: usize,

    /// Candidate records before deduplication
    pub candidates: usize,
}

/// Statistics from a complete pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    pub documents_found: usize,
    pub documents_extracted: usize,
    pub documents_skipped: usize,
    pub candidates: usize,

    /// Candidates dropped because their title was already seen
    pub duplicates_removed: usize,

    /// Records in the written artifact
    pub records_written: usize,

    /// Run duration in milliseconds
    pub duration_ms: u64,

    /// Where the artifact was written
    pub output_path: PathBuf,
}
