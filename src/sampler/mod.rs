//! Foreground/background color extraction.
//!
//! Separates glyph pixels from background pixels with a high-pass text mask,
//! then votes per class over a channel-quantized color histogram. Quantizing
//! merges the near-duplicate shades that antialiasing and compression smear
//! around a glyph; mapping the winning bucket back to its strongest original
//! color keeps the rendered output crisp instead of flattened.

use std::collections::HashMap;

use image::{Rgba, RgbaImage, imageops};
use imageproc::filter::gaussian_blur_f32;
use tracing::debug;

use crate::geometry::{BoundingRegion, RectOrigin};

/// Returned for both classes when the crop degenerates to zero area.
pub const SENTINEL_COLOR: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Tuning knobs for color extraction.
#[derive(Debug, Clone, Copy)]
pub struct SamplerConfig {
    /// Blur radius as a fraction of the shorter crop side.
    pub kernel_size_fac: f32,
    /// Luminance threshold separating glyph edges from background.
    pub pixel_thresh: u8,
    /// Channel quantization step for histogram voting.
    pub downsample_fac: u8,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            kernel_size_fac: 0.05,
            pixel_thresh: 16,
            downsample_fac: 96,
        }
    }
}

/// Extracts the dominant foreground (glyph) and background colors of an
/// image region.
pub struct ColorSampler {
    config: SamplerConfig,
}

impl ColorSampler {
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// Returns `(foreground, background)` for the pixels inside `region`.
    ///
    /// The crop is clamped to the image bounds; a zero-area crop yields the
    /// sentinel pair. A crop with no variance leaves the mask all-background,
    /// in which case both classes resolve to the same dominant color.
    pub fn sample(&self, image: &RgbaImage, region: &BoundingRegion) -> (Rgba<u8>, Rgba<u8>) {
        let Some(crop) = crop_region(image, region) else {
            return (SENTINEL_COLOR, SENTINEL_COLOR);
        };

        let mask = self.text_mask(&crop);

        let mut fg_hist: HashMap<[u8; 4], u64> = HashMap::new();
        let mut bg_hist: HashMap<[u8; 4], u64> = HashMap::new();
        for (pixel, &is_glyph) in crop.pixels().zip(mask.iter()) {
            let hist = if is_glyph { &mut fg_hist } else { &mut bg_hist };
            *hist.entry(pixel.0).or_default() += 1;
        }

        let fg = self.dominant_color(&fg_hist);
        let bg = self.dominant_color(&bg_hist);
        debug!(?fg, ?bg, "sampled region colors");

        match (fg, bg) {
            (Some(fg), Some(bg)) => (fg, bg),
            (Some(fg), None) => (fg, fg),
            (None, Some(bg)) => (bg, bg),
            (None, None) => (SENTINEL_COLOR, SENTINEL_COLOR),
        }
    }

    /// High-pass text mask: `true` where the crop differs sharply from its
    /// blurred self, which is where glyph edges live.
    fn text_mask(&self, crop: &RgbaImage) -> Vec<bool> {
        let (width, height) = crop.dimensions();
        let radius = (self.config.kernel_size_fac * width.min(height) as f32)
            .floor()
            .max(1.0);
        let blurred = gaussian_blur_f32(crop, radius);

        crop.pixels()
            .zip(blurred.pixels())
            .map(|(p, b)| {
                let dr = p[0].abs_diff(b[0]) as f32;
                let dg = p[1].abs_diff(b[1]) as f32;
                let db = p[2].abs_diff(b[2]) as f32;
                let luminance = 0.299 * dr + 0.587 * dg + 0.114 * db;
                luminance >= self.config.pixel_thresh as f32
            })
            .collect()
    }

    /// Votes on the quantized histogram, then recovers the strongest
    /// original color inside the winning bucket.
    fn dominant_color(&self, hist: &HashMap<[u8; 4], u64>) -> Option<Rgba<u8>> {
        let fac = self.config.downsample_fac;

        let mut buckets: HashMap<[u8; 4], u64> = HashMap::new();
        for (&color, &count) in hist {
            *buckets.entry(downsample_rgba(color, fac)).or_default() += count;
        }

        // Ties break on the color value itself so results stay deterministic
        // across hash orderings.
        let (&winner, _) = buckets.iter().max_by_key(|&(&color, &count)| (count, color))?;

        hist.iter()
            .filter(|&(&color, _)| downsample_rgba(color, fac) == winner)
            .max_by_key(|&(&color, &count)| (count, color))
            .map(|(&color, _)| Rgba(color))
    }
}

/// Quantizes every channel by integer division.
fn downsample_rgba(color: [u8; 4], fac: u8) -> [u8; 4] {
    if fac == 0 {
        return color;
    }
    [
        (color[0] / fac) * fac,
        (color[1] / fac) * fac,
        (color[2] / fac) * fac,
        (color[3] / fac) * fac,
    ]
}

/// Crops `region` out of `image`, translating the stored bottom-left
/// semantics into the buffer's top-left pixel addressing and clamping to the
/// image bounds. Returns `None` for zero-area crops.
fn crop_region(image: &RgbaImage, region: &BoundingRegion) -> Option<RgbaImage> {
    let (x0, y0, x1, y1) = region.to_rect(RectOrigin::TopLeft);
    let (img_w, img_h) = image.dimensions();

    let x0 = x0.clamp(0, img_w as i32);
    let y0 = y0.clamp(0, img_h as i32);
    let x1 = x1.clamp(0, img_w as i32);
    let y1 = y1.clamp(0, img_h as i32);
    if x1 <= x0 || y1 <= y0 {
        return None;
    }

    Some(imageops::crop_imm(image, x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32).to_image())
}
