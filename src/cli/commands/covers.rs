//! Plan-covers command - list cover slugs and paths for an artifact

use crate::cli::output::{colors, format_count, print_header, print_json};
use crate::cli::OutputFormat;
use crate::core::aggregate::read_artifact;
use crate::core::covers::{plan_covers, DEFAULT_URL_PREFIX};
use crate::core::services::Services;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the plan-covers command
#[derive(Args, Debug)]
pub struct PlanCoversArgs {
    /// Artifact to read [default: configured output path]
    #[arg(long, short = 'a')]
    pub artifact: Option<PathBuf>,

    /// URL prefix for cover image paths
    #[arg(long, default_value = DEFAULT_URL_PREFIX)]
    pub url_prefix: String,
}

/// Execute the plan-covers command
pub async fn execute(
    args: PlanCoversArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let artifact = args
        .artifact
        .unwrap_or_else(|| services.config.output.path.clone());

    let records = match read_artifact(&artifact) {
        Ok(records) => records,
        Err(e) if e.is_not_found() => {
            return Err(format!("{}. Run 'postseed build' first.", e.message()).into());
        }
        Err(e) => return Err(e.into()),
    };
    let plans = plan_covers(&records, &args.url_prefix);

    match format {
        OutputFormat::Human => {
            print_header(&format!(
                "{} for {}",
                format_count(plans.len(), "cover"),
                artifact.display()
            ));
            for plan in &plans {
                println!(
                    "  {}  {}  {}",
                    colors::slug(&plan.slug),
                    colors::path(&plan.relative_path),
                    colors::detail(&plan.headline)
                );
            }
        }
        OutputFormat::Json => print_json(&plans)?,
    }

    Ok(())
}
