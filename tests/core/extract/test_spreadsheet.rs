// Spreadsheet row extraction over in-memory cells and a real workbook

use calamine::Data;
use postseed::core::extract::spreadsheet::{extract_row, extract_sheet, extract_workbook};

use crate::common::fixture_path;

fn s(text: &str) -> Data {
    Data::String(text.to_string())
}

#[test]
fn test_labelled_row() {
    let row = [s("TagA"), s("TagB"), s("标题：T内容： C")];
    let record = extract_row(&row, "posts.xlsx:Sheet1").unwrap();

    assert_eq!(record.title, "T");
    assert_eq!(record.content, "C");
    assert_eq!(record.tags, vec!["TagA", "TagB"]);
    assert_eq!(record.source, "posts.xlsx:Sheet1");
}

#[test]
fn test_unlabelled_row_without_tags() {
    let row = [s(""), s(""), s("just text")];
    let record = extract_row(&row, "posts.xlsx:Sheet1").unwrap();

    assert_eq!(record.title, "just text");
    assert_eq!(record.content, "just text");
    assert!(record.tags.is_empty());
}

#[test]
fn test_two_column_row_skipped() {
    let row = [s("TagA"), s("标题：T内容：C")];
    assert!(extract_row(&row, "posts.xlsx:Sheet1").is_none());
}

#[test]
fn test_extra_columns_ignored() {
    let row = [s("A"), s("B"), s("标题：T"), s("D"), s("E")];
    let record = extract_row(&row, "posts.xlsx:Sheet1").unwrap();

    assert_eq!(record.title, "T");
    assert_eq!(record.tags, vec!["A", "B"]);
}

#[test]
fn test_multiline_cell_content() {
    let row = [
        s("面试"),
        Data::Empty,
        s("标题：Redis 持久化\n内容：RDB 快照\nAOF 日志"),
    ];
    let record = extract_row(&row, "posts.xlsx:Sheet1").unwrap();

    assert_eq!(record.title, "Redis 持久化");
    assert_eq!(record.content, "RDB 快照\nAOF 日志");
    assert_eq!(record.tags, vec!["面试"]);
}

#[test]
fn test_sheets_concatenate_in_order() {
    let first = vec![
        vec![s("a"), s("b"), s("One")],
        vec![Data::Empty, Data::Empty, Data::Float(1.0)],
        vec![s("a"), s("b"), s("Two")],
    ];
    let second = vec![vec![s("c"), Data::Empty, s("Three")]];

    let mut records = extract_sheet("posts.xlsx", "Q1", &first);
    records.extend(extract_sheet("posts.xlsx", "Q2", &second));

    let summary: Vec<_> = records
        .iter()
        .map(|r| (r.title.as_str(), r.source.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("One", "posts.xlsx:Q1"),
            ("Two", "posts.xlsx:Q1"),
            ("Three", "posts.xlsx:Q2"),
        ]
    );
}

#[test]
fn test_workbook_sheets_in_stored_order() {
    let records = extract_workbook(&fixture_path("posts.xlsx")).unwrap();

    let summary: Vec<_> = records
        .iter()
        .map(|r| (r.title.as_str(), r.content.as_str(), r.source.as_str()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Only C", "body", "posts.xlsx:Zeta"),
            ("Second", "Second", "posts.xlsx:Zeta"),
            ("T", "C", "posts.xlsx:Alpha"),
            ("Dup", "from workbook", "posts.xlsx:Alpha"),
            ("Zero tags", "Zero tags", "posts.xlsx:Alpha"),
            ("Numbered", "Numbered", "posts.xlsx:Alpha"),
        ]
    );
}

#[test]
fn test_workbook_tags_from_leading_columns() {
    let records = extract_workbook(&fixture_path("posts.xlsx")).unwrap();
    let tags: Vec<_> = records.iter().map(|r| r.tags.clone()).collect();

    // Zeta's text sits in column C with nothing before it
    assert!(tags[0].is_empty());
    assert!(tags[1].is_empty());
    assert_eq!(tags[2], vec!["TagB"]);
    assert_eq!(tags[3], vec!["TagA", "TagB"]);
    // 0 and FALSE carry no tag
    assert!(tags[4].is_empty());
    assert_eq!(tags[5], vec!["7"]);
}
