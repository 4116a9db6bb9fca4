use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use super::Cli;
use crate::{output, ColorRanker, SortConfig};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = SortConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config {}", cli.config.display()))?;

    let ranked = ColorRanker::new()
        .parallel(!cli.sequential)
        .rank(&config.target_color, &config.files, config.ids.as_deref())
        .context("Failed to rank images")?;

    let json = output::render(&ranked, cli.with_scores).context("Failed to encode ranking")?;
    println!("{json}");

    Ok(())
}

/// Logs go to stderr so stdout carries only the ranking.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
