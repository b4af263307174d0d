//! Build command - extract posts and write the seed artifact

use crate::cli::output::{colors, format_count, format_duration, print_json, print_warning};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Directory containing source documents [default: from config]
    #[arg(long, short = 's')]
    pub source_dir: Option<PathBuf>,

    /// Path of the JSON artifact [default: from config]
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Documents extracted at the same time [default: from config]
    #[arg(long, short = 'j')]
    pub concurrency: Option<usize>,

    /// Suppress progress output
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Execute the build command
pub async fn execute(
    args: BuildArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.concurrency == Some(0) {
        return Err("Concurrency must be at least 1.".into());
    }

    let source_dir = args
        .source_dir
        .unwrap_or_else(|| services.config.sources.dir.clone());
    let output = args
        .output
        .unwrap_or_else(|| services.config.output.path.clone());

    if !source_dir.is_dir() {
        return Err(format!(
            "Source directory '{}' does not exist or is not a directory.",
            source_dir.display()
        )
        .into());
    }

    if !args.quiet && format == OutputFormat::Human {
        eprintln!(
            "Extracting posts from {}...",
            colors::path(&source_dir.display().to_string())
        );
    }

    let pipeline = services.create_pipeline(args.concurrency)?;
    let stats = pipeline.run(&source_dir, &output).await?;

    match format {
        OutputFormat::Human => {
            println!(
                "{} {} -> {}",
                colors::done("Generated"),
                colors::count(&format_count(stats.records_written, "post")),
                colors::path(&stats.output_path.display().to_string())
            );
            if !args.quiet {
                println!(
                    "{}",
                    colors::detail(&format!(
                        "{} found, {} extracted, {} skipped, {} duplicates removed in {}",
                        format_count(stats.documents_found, "document"),
                        stats.documents_extracted,
                        stats.documents_skipped,
                        stats.duplicates_removed,
                        format_duration(stats.duration_ms)
                    ))
                );
            }
            if stats.documents_found == 0 {
                print_warning("No source documents matched the include patterns.");
            }
        }
        OutputFormat::Json => print_json(&stats)?,
    }

    Ok(())
}
