//! Source document discovery.
//!
//! Lists files under the source directory that match the include
//! patterns, in lexicographic order. Deduplication keeps the first
//! occurrence of a title, so this order decides which record wins.

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::config::SourcesConfig;
use crate::core::error::{PostSeedError, Result};

/// File system walker with pattern-based filtering
pub struct FileWalker {
    /// Patterns to include (e.g., "*.docx")
    include_patterns: Vec<Pattern>,

    /// Patterns to exclude (e.g., "~$*")
    exclude_patterns: Vec<Pattern>,

    /// Directory levels to descend; 1 lists the root only
    max_depth: usize,

    /// Maximum file size in bytes (skip larger files)
    max_file_size_bytes: u64,
}

impl FileWalker {
    /// Create a new file walker
    ///
    /// # Arguments
    ///
    /// * `include_patterns` - Glob patterns for files to include
    /// * `exclude_patterns` - Glob patterns for files to exclude
    /// * `max_depth` - Directory levels to descend
    /// * `max_file_size_mb` - Maximum file size in megabytes
    pub fn new(
        include_patterns: Vec<String>,
        exclude_patterns: Vec<String>,
        max_depth: usize,
        max_file_size_mb: usize,
    ) -> Result<Self> {
        let include = compile_patterns(include_patterns, "include")?;
        let exclude = compile_patterns(exclude_patterns, "exclude")?;

        Ok(Self {
            include_patterns: include,
            exclude_patterns: exclude,
            max_depth,
            max_file_size_bytes: (max_file_size_mb as u64) * 1024 * 1024,
        })
    }

    /// Create a walker from the `[sources]` configuration
    pub fn from_config(config: &SourcesConfig) -> Result<Self> {
        Self::new(
            config.include_patterns.clone(),
            config.exclude_patterns.clone(),
            config.max_depth,
            config.max_file_size_mb,
        )
    }

    /// Collect all matching files from a directory, sorted by path
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(PostSeedError::InvalidPath(format!(
                "Source directory does not exist or is not a directory: {}",
                root.display()
            )));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .max_depth(self.max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| self.should_process_entry(e, root))
        {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }

                    let path = entry.path();

                    if let Ok(metadata) = entry.metadata() {
                        if metadata.len() > self.max_file_size_bytes {
                            tracing::debug!(
                                "Skipping large file: {:?} ({} bytes)",
                                path,
                                metadata.len()
                            );
                            continue;
                        }
                    }

                    if self.matches_patterns(path) {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    /// Skip hidden directories, never the root itself
    fn should_process_entry(&self, entry: &DirEntry, root: &Path) -> bool {
        let path = entry.path();

        if path == root {
            return true;
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') && entry.file_type().is_dir() {
                return false;
            }
        }

        true
    }

    /// Check a file path against include/exclude patterns
    ///
    /// Patterns match either the full path or the bare file name.
    fn matches_patterns(&self, path: &Path) -> bool {
        let path_str = match path.to_str() {
            Some(s) => s,
            None => return false,
        };
        let file_name = path.file_name().and_then(|f| f.to_str()).unwrap_or("");

        let matches = |p: &Pattern| p.matches(path_str) || p.matches(file_name);

        self.include_patterns.iter().any(matches) && !self.exclude_patterns.iter().any(matches)
    }
}

fn compile_patterns(patterns: Vec<String>, kind: &str) -> Result<Vec<Pattern>> {
    patterns
        .into_iter()
        .map(|p| {
            Pattern::new(&p).map_err(|e| {
                PostSeedError::ConfigError(format!("Invalid {kind} pattern '{p}': {e}"))
            })
        })
        .collect()
}
