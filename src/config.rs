use crate::error::{RankError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A ranking job as read from disk.
///
/// Accepts both `{"targetColor", "files"}` and `{"color", "files", "ids"}`.
#[derive(Debug, Clone, PartialEq)]
pub struct SortConfig {
    pub target_color: String,
    pub files: Vec<PathBuf>,
    /// Opaque tokens emitted instead of paths, one per file.
    pub ids: Option<Vec<serde_json::Value>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    #[serde(alias = "color")]
    target_color: Option<String>,
    files: Option<Vec<PathBuf>>,
    #[serde(default)]
    ids: Option<Vec<serde_json::Value>>,
}

impl SortConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|source| RankError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&data)?;
        debug!(
            config = %path.display(),
            files = config.files.len(),
            has_ids = config.ids.is_some(),
            "loaded config"
        );
        Ok(config)
    }

    pub fn from_json(data: &str) -> Result<Self> {
        let raw: RawConfig = serde_json::from_str(data)?;
        let config = Self {
            target_color: raw
                .target_color
                .ok_or(RankError::MissingField("targetColor"))?,
            files: raw.files.ok_or(RankError::MissingField("files"))?,
            ids: raw.ids,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        match &self.ids {
            Some(ids) if ids.len() != self.files.len() => Err(RankError::ShapeMismatch {
                files: self.files.len(),
                ids: ids.len(),
            }),
            _ => Ok(()),
        }
    }
}
