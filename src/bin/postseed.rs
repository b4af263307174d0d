//! postseed CLI - build a post seed artifact from Word and Excel sources
//!
//! # Examples
//!
//! ```bash
//! # Extract ./word/*.docx and ./word/*.xlsx into scripts/post_seed.json
//! postseed build
//!
//! # Custom locations, four documents at a time
//! postseed build --source-dir ~/drafts --output out/seed.json -j 4
//!
//! # Cover slugs for the generated artifact
//! postseed plan-covers --format json
//! ```

use clap::Parser;
use postseed::cli::output::print_error;
use postseed::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Logs go to stderr so JSON output on stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "postseed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
