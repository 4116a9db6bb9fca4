use crate::error::{RankError, Result};
use image::RgbImage;
use std::path::Path;

/// Where the ranker gets pixels from.
///
/// Implementations must be shareable across the rayon pool.
pub trait PixelSource: Sync {
    fn load(&self, path: &Path) -> Result<RgbImage>;
}

/// Decodes images from disk with the `image` crate.
///
/// Every format is normalized to 8-bit RGB: grayscale is expanded to three
/// channels and alpha is discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskImages;

impl PixelSource for DiskImages {
    fn load(&self, path: &Path) -> Result<RgbImage> {
        let img = image::open(path).map_err(|source| RankError::ImageDecode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(img.to_rgb8())
    }
}
