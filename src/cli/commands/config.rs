//! Config command - show current configuration

use crate::cli::output::{print_header, print_json};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    pub config_file: String,
    #[serde(flatten)]
    pub config: &'a crate::core::config::Config,
}

/// Execute the config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config_file = XdgDirs::new().config_file().to_string_lossy().into_owned();

    match format {
        OutputFormat::Human => {
            print_header("Configuration:");
            println!("# config file: {config_file}");
            print!("{}", toml::to_string_pretty(services.config.as_ref())?);
        }
        OutputFormat::Json => print_json(&ConfigResponse {
            config_file,
            config: services.config.as_ref(),
        })?,
    }

    Ok(())
}
