// Document extraction through the TextConverter seam

use crate::common::{FakeConverter, SourceDir};
use postseed::core::extract::document::{extract_document, record_from_text, tags_from_stem};
use postseed::core::types::PostStatus;

#[test]
fn test_title_body_and_filename_tags() {
    let source = SourceDir::with_files(&[("Topic1:Topic2.docx", "My Title\nLine A\nLine B")]);
    let converter = FakeConverter::new();

    let record = extract_document(&converter, &source.files[0]).unwrap();

    assert_eq!(record.title, "My Title");
    assert_eq!(record.content, "Line A\nLine B");
    assert_eq!(record.tags, vec!["Topic1", "Topic2"]);
    assert_eq!(record.source, "Topic1:Topic2.docx");
    assert_eq!(record.status, PostStatus::Published);
    assert_eq!(converter.calls(), 1);
}

#[test]
fn test_single_line_document() {
    let source = SourceDir::with_files(&[("Solo.docx", "Solo")]);
    let converter = FakeConverter::new();

    let record = extract_document(&converter, &source.files[0]).unwrap();

    assert_eq!(record.title, "Solo");
    assert_eq!(record.content, "Solo");
    assert_eq!(record.tags, vec!["Solo"]);
}

#[test]
fn test_conversion_failure_yields_none() {
    let source = SourceDir::with_files(&[("broken.docx", "!fail")]);
    let converter = FakeConverter::new();

    assert!(extract_document(&converter, &source.files[0]).is_none());
    assert_eq!(converter.calls(), 1);
}

#[test]
fn test_blank_document_yields_none() {
    let source = SourceDir::with_files(&[("blank.docx", "\n \t \n\n")]);
    let converter = FakeConverter::new();

    assert!(extract_document(&converter, &source.files[0]).is_none());
}

#[test]
fn test_full_width_colon_filename() {
    let source = SourceDir::with_files(&[("面试：算法：动态规划.docx", "背包问题\n状态转移")]);
    let converter = FakeConverter::new();

    let record = extract_document(&converter, &source.files[0]).unwrap();

    assert_eq!(record.tags, vec!["面试", "算法", "动态规划"]);
    assert_eq!(record.source, "面试：算法：动态规划.docx");
}

#[test]
fn test_tag_delimiter_equivalence() {
    let stems = [
        "a:b:c",
        " spaced : out ",
        "::leading",
        "trailing::",
        "none",
        "混合:中文:English",
    ];

    for stem in stems {
        let full_width = stem.replace(':', "：");
        assert_eq!(
            tags_from_stem(stem),
            tags_from_stem(&full_width),
            "stem {stem:?}"
        );
    }
}

#[test]
fn test_content_is_never_empty() {
    let texts = ["x", "x\n\n", "  title  \n  body  ", "a\nb\nc"];
    for text in texts {
        let record = record_from_text(text, "f.docx", "f").unwrap();
        assert!(!record.content.is_empty(), "text {text:?}");
    }
}
