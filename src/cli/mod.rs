//! CLI adapter for postseed
//!
//! Provides the command-line interface over `core/`. Commands parse
//! their arguments, call into the core, and format the result.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// postseed - build a post seed artifact from Word and Excel sources
///
/// Extracts title, body and tags from word-processor documents and
/// spreadsheet rows, removes duplicate titles and writes a JSON array
/// for downstream publishing.
#[derive(Parser, Debug)]
#[command(name = "postseed")]
#[command(version)]
#[command(about = "Build a deduplicated post seed from documents", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract posts from the source directory and write the artifact
    Build(commands::BuildArgs),

    /// Show cover slugs and paths for an existing artifact
    #[command(name = "plan-covers")]
    PlanCovers(commands::PlanCoversArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  postseed completions bash > ~/.local/share/bash-completion/completions/postseed
    ///   zsh:   postseed completions zsh > ~/.zfunc/_postseed
    ///   fish:  postseed completions fish > ~/.config/fish/completions/postseed.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Completions don't need configuration
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();
    tracing::debug!("Config file candidate: {:?}", xdg.config_file());

    let config = Config::load_with_xdg(&xdg)?;
    config.log_config();

    let services = Arc::new(Services::new(config));

    match cli.command {
        Commands::Build(args) => commands::build::execute(args, &services, cli.format).await,
        Commands::PlanCovers(args) => {
            commands::covers::execute(args, &services, cli.format).await
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
