use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbaImage};
use tracing::info;

use crate::error::OcrCipherError;

/// Terminal stage of the pipeline: consumes the reconstructed image.
pub trait PipelineOutput {
    fn write(&self, image: &RgbaImage) -> crate::error::Result<()>;
}

/// Writes the reconstructed image to disk, format derived from the file
/// extension.
pub struct SaveImage {
    path: PathBuf,
}

impl SaveImage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PipelineOutput for SaveImage {
    fn write(&self, image: &RgbaImage) -> crate::error::Result<()> {
        let ext = self
            .path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_lowercase())
            .unwrap_or_default();

        // JPEG has no alpha channel; flatten before encoding.
        let result = if ext == "jpg" || ext == "jpeg" {
            DynamicImage::ImageRgba8(image.clone()).to_rgb8().save(&self.path)
        } else {
            image.save(&self.path)
        };
        result.map_err(|e| {
            OcrCipherError::output(format!("failed to save {}: {e}", self.path.display()))
        })?;

        info!(path = %self.path.display(), "reconstructed image saved");
        Ok(())
    }
}
