//! Spreadsheet workbook extraction.
//!
//! Every row of every sheet is a candidate post. The third column
//! carries the text in a loose `标题：<title>内容：<content>` form; the
//! first two columns carry tags.

use std::borrow::Cow;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::core::error::{PostSeedError, Result};
use crate::core::types::PostRecord;

/// Marker preceding the title inside the text cell
pub const TITLE_MARKER: &str = "标题：";

/// Marker preceding the body inside the text cell
pub const CONTENT_MARKER: &str = "内容：";

const TEXT_COLUMN: usize = 2;
const TAG_COLUMNS: usize = 2;

/// Extract posts from every sheet of a workbook, in stored order
pub fn extract_workbook(path: &Path) -> Result<Vec<PostRecord>> {
    let workbook_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut workbook =
        open_workbook_auto(path).map_err(|e| PostSeedError::workbook(path, e.to_string()))?;

    let mut records = Vec::new();
    for sheet_name in workbook.sheet_names() {
        let range = match workbook.worksheet_range(&sheet_name) {
            Ok(range) => range,
            Err(e) => {
                tracing::warn!(
                    "Skipping sheet '{}' in {}: {}",
                    sheet_name,
                    workbook_name,
                    e
                );
                continue;
            }
        };

        // Ranges start at the first used cell; re-anchor rows at column A
        let col_offset = range.start().map(|(_, col)| col as usize).unwrap_or(0);
        let rows = range.rows().map(|row| anchor_row(row, col_offset));

        let sheet_records = extract_sheet(&workbook_name, &sheet_name, rows);
        tracing::debug!(
            "{}:{} produced {} candidates",
            workbook_name,
            sheet_name,
            sheet_records.len()
        );
        records.extend(sheet_records);
    }

    Ok(records)
}

/// Extract posts from the rows of one sheet
pub fn extract_sheet<I>(workbook_name: &str, sheet_name: &str, rows: I) -> Vec<PostRecord>
where
    I: IntoIterator,
    I::Item: AsRef<[Data]>,
{
    let source = format!("{workbook_name}:{sheet_name}");
    rows.into_iter()
        .filter_map(|row| extract_row(row.as_ref(), &source))
        .collect()
}

/// Extract a post from one row, or `None` if the row carries no text
pub fn extract_row(row: &[Data], source: &str) -> Option<PostRecord> {
    let Some(Data::String(text)) = row.get(TEXT_COLUMN) else {
        return None;
    };

    let raw = text.trim().replace('\u{3000}', " ");
    if raw.is_empty() {
        return None;
    }

    let (title, content) = split_title_content(&raw);
    if title.is_empty() {
        return None;
    }
    let content = if content.is_empty() {
        title.clone()
    } else {
        content
    };

    let tags = row
        .iter()
        .take(TAG_COLUMNS)
        .filter_map(cell_text)
        .collect();

    Some(PostRecord::published(title, content, tags, source))
}

/// Split normalized cell text into `(title, content)`
///
/// Only the first content marker splits; later ones stay in the body.
pub fn split_title_content(raw: &str) -> (String, String) {
    if let Some((title_part, content_part)) = raw.split_once(CONTENT_MARKER) {
        (
            title_part.replace(TITLE_MARKER, "").trim().to_string(),
            content_part.trim().to_string(),
        )
    } else if raw.contains(TITLE_MARKER) {
        (raw.replace(TITLE_MARKER, "").trim().to_string(), String::new())
    } else {
        (raw.to_string(), String::new())
    }
}

/// Text of a tag cell; empty, error, zero and `false` cells carry no tag
fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) | Data::Bool(false) | Data::Int(0) => return None,
        Data::Float(f) if *f == 0.0 => return None,
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    };
    (!text.is_empty()).then_some(text)
}

fn anchor_row(row: &[Data], col_offset: usize) -> Cow<'_, [Data]> {
    if col_offset == 0 {
        return Cow::Borrowed(row);
    }
    let mut padded = vec![Data::Empty; col_offset];
    padded.extend_from_slice(row);
    Cow::Owned(padded)
}
