//! Tests for the show-config CLI command

use crate::cli::test_helpers::create_cli_test_services;
use postseed::cli::commands::config::{execute, ConfigArgs};
use postseed::cli::OutputFormat;

#[tokio::test]
async fn test_show_config_human() {
    let (services, _out) = create_cli_test_services();

    let result = execute(ConfigArgs {}, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "show-config failed: {:?}", result.err());
}

#[tokio::test]
async fn test_show_config_json() {
    let (services, _out) = create_cli_test_services();

    let result = execute(ConfigArgs {}, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "show-config failed: {:?}", result.err());
}
