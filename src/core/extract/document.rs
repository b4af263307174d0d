//! Word-processor document extraction.
//!
//! Documents are turned into plain text by a [`TextConverter`], then
//! split positionally: the first non-blank line is the title and the
//! rest is the body. Tags come from the file name, not the text.

use std::path::Path;
use std::process::Command;

use crate::core::config::ConversionConfig;
use crate::core::error::{PostSeedError, Result};
use crate::core::types::PostRecord;

/// Converts a document on disk into plain text
pub trait TextConverter: Send + Sync {
    fn convert(&self, path: &Path) -> Result<String>;
}

impl<F> TextConverter for F
where
    F: Fn(&Path) -> Result<String> + Send + Sync,
{
    fn convert(&self, path: &Path) -> Result<String> {
        self(path)
    }
}

/// Runs an external program and reads the text from its stdout
///
/// The document path is appended after the configured arguments,
/// e.g. `textutil -convert txt -stdout <path>`.
#[derive(Debug, Clone)]
pub struct CommandConverter {
    program: String,
    args: Vec<String>,
}

impl CommandConverter {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &ConversionConfig) -> Self {
        Self::new(config.program.clone(), config.args.clone())
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl TextConverter for CommandConverter {
    fn convert(&self, path: &Path) -> Result<String> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .output()
            .map_err(|e| {
                PostSeedError::conversion(path, format!("failed to run '{}': {e}", self.program))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PostSeedError::conversion(
                path,
                format!("'{}' {}: {}", self.program, output.status, stderr.trim()),
            ));
        }

        // Undecodable bytes are dropped rather than replaced
        Ok(output.stdout.utf8_chunks().map(|c| c.valid()).collect())
    }
}

/// Extract a post from one document
///
/// Returns `None` when conversion fails (logged as a warning) or when
/// the document has no non-blank lines.
pub fn extract_document(converter: &dyn TextConverter, path: &Path) -> Option<PostRecord> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let text = match converter.convert(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", file_name, e);
            return None;
        }
    };

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let record = record_from_text(&text, &file_name, &stem);
    if record.is_none() {
        tracing::debug!("No text in {}", file_name);
    }
    record
}

/// Build a record from converted document text
///
/// `file_name` becomes the source label, `stem` feeds the tags.
pub fn record_from_text(text: &str, file_name: &str, stem: &str) -> Option<PostRecord> {
    let lines: Vec<&str> = text
        .split(is_line_boundary)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let (title, rest) = lines.split_first()?;

    // A single-line document repeats its title as the body
    let body = if rest.is_empty() { &lines[..] } else { rest };
    let content = body.join("\n").trim().to_string();

    Some(PostRecord::published(
        *title,
        content,
        tags_from_stem(stem),
        file_name,
    ))
}

/// Split a file stem into tags on ASCII or full-width colons
pub fn tags_from_stem(stem: &str) -> Vec<String> {
    stem.replace('：', ":")
        .split(':')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0B}'
            | '\u{0C}'
            | '\u{1C}'
            | '\u{1D}'
            | '\u{1E}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}
