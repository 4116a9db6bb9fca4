use crate::color::TargetColor;
use crate::distance::mean_distance;
use crate::error::{RankError, Result};
use crate::image_source::{DiskImages, PixelSource};
use rayon::prelude::*;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Output unit for one image: its path, or the caller's id for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Token {
    Path(PathBuf),
    Id(serde_json::Value),
}

/// One entry of a finished ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranked {
    pub token: Token,
    pub score: f64,
}

pub struct ColorRanker<S = DiskImages> {
    source: S,
    parallel: bool,
}

impl ColorRanker<DiskImages> {
    pub fn new() -> Self {
        Self::with_source(DiskImages)
    }
}

impl Default for ColorRanker<DiskImages> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PixelSource> ColorRanker<S> {
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            parallel: true,
        }
    }

    /// Score images on the rayon pool (default) or one after another.
    /// Either way the result is identical.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Mean color distance between `target` and every pixel of one image.
    pub fn score(&self, target: &TargetColor, path: &Path) -> Result<f64> {
        let img = self.source.load(path)?;
        let score = mean_distance(target, img.pixels().map(|p| p.0))
            .ok_or_else(|| RankError::EmptyImage(path.to_path_buf()))?;
        debug!(path = %path.display(), score, "scored image");
        Ok(score)
    }

    /// Scores for `files` in input order. Fails with the error of the
    /// first failing file in input order.
    pub fn scores(&self, target: &TargetColor, files: &[PathBuf]) -> Result<Vec<f64>> {
        let results: Vec<Result<f64>> = if self.parallel {
            files.par_iter().map(|f| self.score(target, f)).collect()
        } else {
            files.iter().map(|f| self.score(target, f)).collect()
        };
        results.into_iter().collect()
    }

    /// Rank `files` by ascending mean distance to `target_hex`.
    ///
    /// When `ids` is given each output token is the id at the file's
    /// position instead of the path. Lengths and color are checked before
    /// any image is decoded; any failure aborts the whole ranking.
    pub fn rank(
        &self,
        target_hex: &str,
        files: &[PathBuf],
        ids: Option<&[serde_json::Value]>,
    ) -> Result<Vec<Ranked>> {
        if let Some(ids) = ids {
            if ids.len() != files.len() {
                return Err(RankError::ShapeMismatch {
                    files: files.len(),
                    ids: ids.len(),
                });
            }
        }
        let target = TargetColor::parse(target_hex)?;

        info!(
            color = %target,
            files = files.len(),
            parallel = self.parallel,
            "ranking images"
        );
        let scores = self.scores(&target, files)?;

        let ranked = argsort(&scores)
            .into_iter()
            .map(|i| Ranked {
                token: match ids {
                    Some(ids) => Token::Id(ids[i].clone()),
                    None => Token::Path(files[i].clone()),
                },
                score: scores[i],
            })
            .collect();
        Ok(ranked)
    }
}

/// Indices of `scores` in ascending score order; ties keep input order.
pub fn argsort(scores: &[f64]) -> Vec<usize> {
    let mut idxs: Vec<usize> = (0..scores.len()).collect();
    idxs.sort_by(|&a, &b| scores[a].total_cmp(&scores[b]));
    idxs
}

/// Rank `files` against `target_hex`, decoding from disk.
pub fn rank(
    target_hex: &str,
    files: &[PathBuf],
    ids: Option<&[serde_json::Value]>,
) -> Result<Vec<Token>> {
    let ranked = ColorRanker::new().rank(target_hex, files, ids)?;
    Ok(ranked.into_iter().map(|r| r.token).collect())
}
