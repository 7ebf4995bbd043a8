//! storyreel CLI binary.
//!
//! This binary provides command-line access to storyreel:
//! - Generate a full interactive episode
//! - Generate a single story segment, optionally with its clip

use clap::Parser;
use storyreel::{ObservabilityConfig, StoryreelConfig, init_observability_with_config};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_episode, run_segment};

    // GEMINI_API_KEY may live in .env
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    init_observability_with_config(
        ObservabilityConfig::default()
            .with_log_level(log_level)
            .with_json_logs(cli.json_logs),
    )?;

    let config = match &cli.config {
        Some(path) => StoryreelConfig::from_file(path)?,
        None => StoryreelConfig::load()?,
    };

    match cli.command {
        Commands::Episode(args) => run_episode(config, args, cli.offline).await?,
        Commands::Segment(args) => run_segment(config, args, cli.offline).await?,
    }

    Ok(())
}
