//! Tests for CLI output formatting helpers

use postseed::cli::output::{format_count, format_duration};

#[test]
fn test_format_duration_ranges() {
    assert_eq!(format_duration(0), "0ms");
    assert_eq!(format_duration(250), "250ms");
    assert_eq!(format_duration(2_000), "2.00s");
    assert_eq!(format_duration(59_990), "59.99s");
    assert_eq!(format_duration(125_000), "2m 5.0s");
}

#[test]
fn test_format_count_pluralizes() {
    assert_eq!(format_count(1, "post"), "1 post");
    assert_eq!(format_count(2, "post"), "2 posts");
    assert_eq!(format_count(0, "cover"), "0 covers");
}
