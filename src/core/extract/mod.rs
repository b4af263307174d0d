//! Format-specific extractors.
//!
//! - **document**: word-processor files, tags from the file name
//! - **spreadsheet**: workbooks, one candidate per row, tags from cells
//!
//! The two tag strategies are deliberately separate: each format
//! encodes its tags in a different place.

pub mod document;
pub mod spreadsheet;

pub use document::{extract_document, CommandConverter, TextConverter};
pub use spreadsheet::extract_workbook;

use std::path::Path;

/// Which extractor handles a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Document,
    Workbook,
}

impl SourceKind {
    /// Classify a path by extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "docx" | "doc" | "odt" | "rtf" => Some(SourceKind::Document),
            "xlsx" | "xlsm" | "xls" | "ods" => Some(SourceKind::Workbook),
            _ => None,
        }
    }
}
