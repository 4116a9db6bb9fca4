pub mod cli;
pub mod color;
pub mod config;
pub mod distance;
pub mod error;
pub mod image_source;
pub mod output;
pub mod ranker;

pub use color::TargetColor;
pub use config::SortConfig;
pub use error::RankError;
pub use ranker::{rank, ColorRanker, Ranked, Token};
