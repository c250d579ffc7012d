//! OCR capability boundary.
//!
//! The engine itself is an external collaborator; this module fixes its
//! output contract — a sequence of `(text, bounds, confidence)` tuples — and
//! normalizes the two bound shapes engines emit (corner quads and lbrt
//! scalars) into [`BoundingRegion`]s.

use std::path::Path;

use image::DynamicImage;
use serde::Deserialize;
use tracing::debug;

use crate::charset::{PositionalCharacter, PositionalCharacterSet};
use crate::error::OcrCipherError;
use crate::geometry::{BoundingRegion, Position};

/// Raw bounding shape as emitted by an OCR engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawCharBox {
    /// left/bottom/right/top distances, y measured from the image bottom.
    Lbrt {
        left: i32,
        bottom: i32,
        right: i32,
        top: i32,
    },
    /// Four `[x, y]` corner points in pixel coordinates (y down from the
    /// image top).
    Corners {
        top_left: [i32; 2],
        top_right: [i32; 2],
        bottom_left: [i32; 2],
        bottom_right: [i32; 2],
    },
}

impl RawCharBox {
    /// Normalizes either raw shape into a [`BoundingRegion`].
    pub fn into_region(self, img_width: u32, img_height: u32) -> crate::error::Result<BoundingRegion> {
        match self {
            RawCharBox::Lbrt {
                left,
                bottom,
                right,
                top,
            } => BoundingRegion::from_lbrt(left, bottom, right, top, img_width, img_height),
            RawCharBox::Corners {
                top_left,
                top_right,
                bottom_left,
                bottom_right,
            } => BoundingRegion::from_corners(
                Position::new(top_left[0], top_left[1]),
                Position::new(top_right[0], top_right[1]),
                Position::new(bottom_left[0], bottom_left[1]),
                Position::new(bottom_right[0], bottom_right[1]),
                img_width,
                img_height,
            ),
        }
    }
}

/// One recognized character as emitted by an OCR engine.
#[derive(Debug, Clone, Deserialize)]
pub struct RawOcrChar {
    pub text: String,
    pub bounds: RawCharBox,
    #[serde(default)]
    pub confidence: f32,
}

impl RawOcrChar {
    /// Converts engine output into a validated positional character.
    pub fn into_positional(
        self,
        img_width: u32,
        img_height: u32,
    ) -> crate::error::Result<PositionalCharacter> {
        let region = self.bounds.into_region(img_width, img_height)?;
        PositionalCharacter::from_text(&self.text, region)
    }
}

/// Maps an image to the characters recognized in it, with bounds.
pub trait OcrEngine {
    fn recognize(&self, image: &DynamicImage) -> crate::error::Result<PositionalCharacterSet>;
}

/// Recognition result file: the raw engine contract serialized as YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct RecognitionFile {
    pub characters: Vec<RawOcrChar>,
}

/// Engine that replays a fixed recognition result.
///
/// Keeps the pipeline independent of any real OCR backend: the result of an
/// external engine run is fed in as data, either in code or from a YAML file.
pub struct StaticOcr {
    characters: Vec<RawOcrChar>,
}

impl StaticOcr {
    pub fn new(characters: Vec<RawOcrChar>) -> Self {
        Self { characters }
    }

    /// Loads a serialized recognition result from disk.
    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| OcrCipherError::ocr(format!("failed to read {}: {e}", path.display())))?;
        let file: RecognitionFile = serde_yml::from_str(&content)
            .map_err(|e| OcrCipherError::ocr(format!("failed to parse {}: {e}", path.display())))?;
        Ok(Self::new(file.characters))
    }
}

impl OcrEngine for StaticOcr {
    fn recognize(&self, image: &DynamicImage) -> crate::error::Result<PositionalCharacterSet> {
        debug!(characters = self.characters.len(), "replaying recognition result");
        self.characters
            .iter()
            .cloned()
            .map(|c| c.into_positional(image.width(), image.height()))
            .collect()
    }
}
