//! Cover image planning for downstream consumers.
//!
//! Rendering and the content-store update live outside this crate.
//! This module fixes the parts they share with the artifact: how a
//! title becomes a file slug, and which text goes on each cover.

use serde::Serialize;

use crate::core::types::PostRecord;

/// URL prefix under which cover images are served
pub const DEFAULT_URL_PREFIX: &str = "/uploads/post-covers";

/// Subtitle used when a record has no tags
pub const DEFAULT_SUBTITLE: &str = "AI Interview Posts";

const MAX_SLUG_CHARS: usize = 60;
const MAX_HEADLINE_CHARS: usize = 40;
const MAX_SUBTITLE_TAGS: usize = 3;

/// Everything a renderer needs to produce one cover
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverPlan {
    /// Exact record title, the lookup key in the content store
    pub title: String,
    pub slug: String,
    pub file_name: String,
    pub relative_path: String,
    /// Title shortened for the image
    pub headline: String,
    pub subtitle: String,
}

/// Derive a URL-safe slug from free text
///
/// Lowercases, turns spaces into hyphens, drops anything outside
/// `[a-z0-9-]` and keeps at most 60 characters. Returns `fallback`
/// when nothing survives.
pub fn slugify(text: &str, fallback: &str) -> String {
    let slug: String = text
        .to_lowercase()
        .replace(' ', "-")
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .take(MAX_SLUG_CHARS)
        .collect();

    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug
    }
}

/// Plan covers for every record with a non-blank title
///
/// Records whose slug comes out empty (e.g. CJK-only titles) fall
/// back to `post-<n>`, `n` being the 1-based position in `records`.
pub fn plan_covers(records: &[PostRecord], url_prefix: &str) -> Vec<CoverPlan> {
    let prefix = url_prefix.trim_end_matches('/');

    records
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| {
            let title = record.title.trim();
            if title.is_empty() {
                return None;
            }

            let slug = slugify(title, &format!("post-{}", idx + 1));
            let file_name = format!("{slug}.png");

            Some(CoverPlan {
                title: record.title.clone(),
                relative_path: format!("{prefix}/{file_name}"),
                headline: title.chars().take(MAX_HEADLINE_CHARS).collect(),
                subtitle: subtitle_for(&record.tags),
                slug,
                file_name,
            })
        })
        .collect()
}

fn subtitle_for(tags: &[String]) -> String {
    if tags.is_empty() {
        DEFAULT_SUBTITLE.to_string()
    } else {
        tags.iter()
            .take(MAX_SUBTITLE_TAGS)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" · ")
    }
}
