// Test fixtures for integration testing

use postseed::core::error::{PostSeedError, Result};
use postseed::core::extract::TextConverter;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Files whose text starts with this marker fail conversion
#[allow(dead_code)]
pub const FAIL_MARKER: &str = "!fail";

/// Stand-in for the external converter
///
/// Source fixtures are written as plain text, so "conversion" just
/// reads the file back.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeConverter {
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl FakeConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextConverter for FakeConverter {
    fn convert(&self, path: &Path) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let text = fs::read_to_string(path)?;
        if text.starts_with(FAIL_MARKER) {
            return Err(PostSeedError::conversion(path, "exit status: 1"));
        }
        Ok(text)
    }
}

/// Temporary source directory with named files
#[allow(dead_code)]
pub struct SourceDir {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

#[allow(dead_code)]
impl SourceDir {
    /// Create with custom files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();

        for (name, content) in files {
            let full_path = dir.path().join(name);
            if let Some(parent) = full_path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&full_path, content).unwrap();
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// A mixed set of interview-post documents
    pub fn interview_posts() -> Self {
        Self::with_files(&[
            ("Rust：所有权.docx", "所有权是什么\n每个值都有一个所有者\n离开作用域时释放"),
            ("Go:并发.docx", "Goroutine 调度\nGMP 模型"),
            ("Solo.docx", "Solo"),
            ("blank.docx", "\n   \n"),
            ("broken.docx", "!fail"),
            ("~$Solo.docx", "lock file"),
            ("notes.txt", "Not a source"),
        ])
    }

    /// Copy a checked-in fixture from `tests/fixtures` into the directory
    pub fn add_fixture(&self, name: &str) -> PathBuf {
        let dest = self.dir.path().join(name);
        fs::copy(fixture_path(name), &dest).unwrap();
        dest
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

/// Path of a checked-in fixture file
///
/// `posts.xlsx` stores sheet "Zeta" before "Alpha"; Zeta only uses
/// column C.
#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}
