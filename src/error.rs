use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a ranking run. All variants are fatal.
#[derive(Error, Debug)]
pub enum RankError {
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("Config is missing required field `{0}`")]
    MissingField(&'static str),
    #[error("Invalid target color {value:?}: {reason}")]
    ColorFormat { value: String, reason: String },
    #[error("Failed to decode image {}: {source}", .path.display())]
    ImageDecode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("Image {} contains no pixels", .0.display())]
    EmptyImage(PathBuf),
    #[error("Got {files} files but {ids} ids")]
    ShapeMismatch { files: usize, ids: usize },
}

impl RankError {
    pub(crate) fn color(value: &str, reason: impl Into<String>) -> Self {
        RankError::ColorFormat {
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = RankError> = std::result::Result<T, E>;
