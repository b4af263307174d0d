//! Tests for the completions CLI command

use clap_complete::Shell;
use postseed::cli::commands::completions::write_completions;

#[test]
fn test_bash_completions_mention_commands() {
    let mut buf = Vec::new();
    write_completions(Shell::Bash, &mut buf);

    let script = String::from_utf8(buf).unwrap();
    assert!(script.contains("postseed"));
    assert!(script.contains("build"));
    assert!(script.contains("plan-covers"));
}
