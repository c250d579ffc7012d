//! Typeface loading and best-fit sizing.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use ab_glyph::{Font, FontArc, FontVec, PxScale, ScaleFont};
use tracing::{debug, info};

use crate::error::OcrCipherError;

/// Upper bound for the fitted font size, in pixels.
pub const MAX_FONT_SIZE: u32 = 128;

/// Fits a fixed typeface to a target glyph width.
///
/// The typeface is injected at construction and shared by every glyph. Width
/// measurements and completed fits are memoized for the fitter's lifetime;
/// both memo tables sit behind mutexes so one fitter can serve a parallel
/// measuring phase.
pub struct FontFitter {
    font: FontArc,
    max_size: u32,
    widths: Mutex<HashMap<(u32, char), f32>>,
    fits: Mutex<HashMap<(u32, String), u32>>,
}

impl FontFitter {
    pub fn new(font: FontArc) -> Self {
        Self {
            font,
            max_size: MAX_FONT_SIZE,
            widths: Mutex::new(HashMap::new()),
            fits: Mutex::new(HashMap::new()),
        }
    }

    pub fn from_bytes(data: Vec<u8>) -> crate::error::Result<Self> {
        let font = FontArc::try_from_vec(data)
            .map_err(|e| OcrCipherError::font_load(format!("failed to parse font data: {e}")))?;
        Ok(Self::new(font))
    }

    pub fn from_file(path: &Path) -> crate::error::Result<Self> {
        let data = std::fs::read(path).map_err(|e| {
            OcrCipherError::font_load(format!("failed to read font {}: {e}", path.display()))
        })?;
        info!(path = %path.display(), "loaded typeface");
        Self::from_bytes(data)
    }

    /// Resolves a monospace face from the system font database.
    pub fn from_system() -> crate::error::Result<Self> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();

        let query = fontdb::Query {
            families: &[fontdb::Family::Monospace],
            ..fontdb::Query::default()
        };
        let id = db.query(&query).ok_or_else(|| {
            OcrCipherError::font_load("no monospace face in the system font database")
        })?;
        let (source, index) = db
            .face_source(id)
            .ok_or_else(|| OcrCipherError::font_load("font face has no readable source"))?;

        let data: Vec<u8> = match source {
            fontdb::Source::File(path) => std::fs::read(&path).map_err(|e| {
                OcrCipherError::font_load(format!("failed to read font {}: {e}", path.display()))
            })?,
            fontdb::Source::Binary(data) | fontdb::Source::SharedFile(_, data) => {
                data.as_ref().as_ref().to_vec()
            }
        };

        let font = FontVec::try_from_vec_and_index(data, index)
            .map_err(|e| OcrCipherError::font_load(format!("failed to parse system font: {e}")))?;
        info!(index, "resolved monospace system font");
        Ok(Self::new(FontArc::from(font)))
    }

    pub fn font(&self) -> &FontArc {
        &self.font
    }

    /// Largest size whose rendered width of `text` stays strictly below
    /// `target_width`, scanned linearly upward from size 1.
    ///
    /// Width is non-decreasing in size for a fixed typeface, so the first
    /// candidate at or past the target ends the scan.
    pub fn fit(&self, target_width: u32, text: &str) -> PxScale {
        if let Some(&size) = self
            .fits
            .lock()
            .expect("fit memo poisoned")
            .get(&(target_width, text.to_string()))
        {
            return PxScale::from(size as f32);
        }

        let mut best = 1u32;
        for size in 1..=self.max_size {
            if self.text_width(size, text) >= target_width as f32 {
                break;
            }
            best = size;
        }

        self.fits
            .lock()
            .expect("fit memo poisoned")
            .insert((target_width, text.to_string()), best);
        debug!(target_width, text, size = best, "fitted font size");
        PxScale::from(best as f32)
    }

    /// Advance width of `text` at `size`, summed over memoized per-glyph
    /// measurements.
    pub fn text_width(&self, size: u32, text: &str) -> f32 {
        text.chars().map(|ch| self.glyph_width(size, ch)).sum()
    }

    /// Number of distinct `(size, char)` measurements taken so far.
    pub fn measurement_count(&self) -> usize {
        self.widths.lock().expect("width memo poisoned").len()
    }

    fn glyph_width(&self, size: u32, ch: char) -> f32 {
        if let Some(&width) = self
            .widths
            .lock()
            .expect("width memo poisoned")
            .get(&(size, ch))
        {
            return width;
        }

        let scaled = self.font.as_scaled(PxScale::from(size as f32));
        let width = scaled.h_advance(self.font.glyph_id(ch));
        self.widths
            .lock()
            .expect("width memo poisoned")
            .insert((size, ch), width);
        width
    }
}
