//! Ingest pipeline orchestration.
//!
//! Coordinates the end-to-end run:
//! 1. Discover source files
//! 2. Extract candidates per file (bounded concurrency)
//! 3. Concatenate per-file buckets in discovery order
//! 4. Deduplicate by title and write the artifact

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Semaphore;

use crate::core::aggregate::{dedupe_by_title, write_artifact};
use crate::core::config::Config;
use crate::core::error::{PostSeedError, Result};
use crate::core::extract::{extract_document, extract_workbook, SourceKind, TextConverter};
use crate::core::ingest::FileWalker;
use crate::core::types::{IngestStats, PostRecord, RunStats};

/// Orchestrates the ingest pipeline
pub struct IngestPipeline {
    walker: FileWalker,
    converter: Arc<dyn TextConverter>,
    max_concurrent: usize,
}

impl IngestPipeline {
    /// Create a new ingest pipeline
    ///
    /// # Arguments
    ///
    /// * `walker` - Discovers source files
    /// * `converter` - Turns word-processor documents into text
    /// * `max_concurrent` - Files extracted at the same time (min 1)
    pub fn new(
        walker: FileWalker,
        converter: Arc<dyn TextConverter>,
        max_concurrent: usize,
    ) -> Self {
        Self {
            walker,
            converter,
            max_concurrent: max_concurrent.max(1),
        }
    }

    /// Create a pipeline from configuration with the given converter
    pub fn from_config(config: &Config, converter: Arc<dyn TextConverter>) -> Result<Self> {
        let walker = FileWalker::from_config(&config.sources)?;
        Ok(Self::new(
            walker,
            converter,
            config.limits.max_concurrent_extractions,
        ))
    }

    /// Extract candidates from every source file under `root`
    ///
    /// Files are extracted on blocking tasks, but candidates are
    /// returned in discovery order regardless of completion order.
    /// Failures on individual files are logged and skipped.
    pub async fn collect(&self, root: &Path) -> Result<(Vec<PostRecord>, IngestStats)> {
        tracing::info!("Discovering source documents in {:?}", root);
        let files = self.walker.collect_files(root)?;
        tracing::info!("Found {} source documents", files.len());

        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let mut handles = Vec::with_capacity(files.len());

        for path in &files {
            let permit = Arc::clone(&semaphore)
                .acquire_owned()
                .await
                .map_err(|e| PostSeedError::TaskFailed(e.to_string()))?;
            let converter = Arc::clone(&self.converter);
            let path = path.clone();

            handles.push(tokio::task::spawn_blocking(move || {
                let _permit = permit;
                extract_source(converter.as_ref(), &path)
            }));
        }

        let mut stats = IngestStats {
            documents_found: files.len(),
            ..IngestStats::default()
        };
        let mut candidates = Vec::new();

        for (path, handle) in files.iter().zip(handles) {
            match handle.await {
                Ok(bucket) if !bucket.is_empty() => {
                    tracing::debug!("{:?} produced {} candidates", path, bucket.len());
                    stats.documents_extracted += 1;
                    candidates.extend(bucket);
                }
                Ok(_) => {
                    stats.documents_skipped += 1;
                }
                Err(e) => {
                    tracing::warn!("Extraction task for {:?} failed: {}", path, e);
                    stats.documents_skipped += 1;
                }
            }
        }

        stats.candidates = candidates.len();
        Ok((candidates, stats))
    }

    /// Run the full pipeline and write the artifact to `output`
    ///
    /// Only a failure to discover sources or to write the artifact
    /// aborts the run.
    pub async fn run(&self, root: &Path, output: &Path) -> Result<RunStats> {
        let start = Instant::now();

        let (candidates, ingest) = self.collect(root).await?;
        let unique = dedupe_by_title(candidates);
        let records_written = write_artifact(output, &unique)?;

        let duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            "Run complete: {} documents ({} extracted, {} skipped), \
             {} candidates, {} duplicates, {} records written in {}ms",
            ingest.documents_found,
            ingest.documents_extracted,
            ingest.documents_skipped,
            ingest.candidates,
            ingest.candidates - records_written,
            records_written,
            duration_ms
        );

        Ok(RunStats {
            documents_found: ingest.documents_found,
            documents_extracted: ingest.documents_extracted,
            documents_skipped: ingest.documents_skipped,
            candidates: ingest.candidates,
            duplicates_removed: ingest.candidates - records_written,
            records_written,
            duration_ms,
            output_path: output.to_path_buf(),
        })
    }
}

/// Dispatch one source file to the extractor for its format
pub fn extract_source(converter: &dyn TextConverter, path: &Path) -> Vec<PostRecord> {
    match SourceKind::from_path(path) {
        Some(SourceKind::Document) => extract_document(converter, path).into_iter().collect(),
        Some(SourceKind::Workbook) => match extract_workbook(path) {
            Ok(records) => records,
            Err(e) if e.is_recoverable() => {
                tracing::warn!("{}", e);
                Vec::new()
            }
            Err(e) => {
                tracing::error!("Unexpected error reading {:?}: {}", path, e);
                Vec::new()
            }
        },
        None => {
            tracing::debug!("Skipping unsupported file: {:?}", path);
            Vec::new()
        }
    }
}
