use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "colorsort")]
#[command(version)]
#[command(about = "Rank images by how close their colors are to a target color")]
pub struct Cli {
    /// JSON config with `targetColor`/`color`, `files` and optional `ids`
    pub config: PathBuf,

    /// Emit `{token, score}` objects instead of bare tokens
    #[arg(long)]
    pub with_scores: bool,

    /// Decode and score images one at a time
    #[arg(long)]
    pub sequential: bool,

    /// Show debug logs on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
