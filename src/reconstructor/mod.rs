//! Image reconstruction: stamps every enciphered character over its source
//! region, matching local font size and colors.

use ab_glyph::PxScale;
use image::{DynamicImage, Rgba, RgbaImage, imageops};
use imageproc::drawing::draw_text_mut;
use rayon::prelude::*;
use serde::Deserialize;
use tracing::info;

use crate::charset::{PositionalCharacter, PositionalCharacterSet};
use crate::font::FontFitter;
use crate::geometry::RectOrigin;
use crate::sampler::ColorSampler;

/// Glyph paint policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStyle {
    /// Fill the glyph body with the background-derived color and stroke its
    /// outline with the foreground-derived color. Emphasizes edges over fill.
    #[default]
    Outlined,
    /// Conventional rendering: fill with the foreground-derived color.
    Filled,
}

/// 1-px 8-way offsets approximating an outline stroke.
const STROKE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// One fully measured draw operation, ready to stamp.
struct DrawOp {
    text: String,
    /// Clip rectangle in pixel coordinates, clamped to the canvas.
    clip: (u32, u32, u32, u32),
    scale: PxScale,
    fill: Rgba<u8>,
    stroke: Option<Rgba<u8>>,
}

/// Orchestrates color sampling, font fitting, and glyph stamping.
pub struct Reconstructor {
    fitter: FontFitter,
    sampler: ColorSampler,
    style: RenderStyle,
}

impl Reconstructor {
    pub fn new(fitter: FontFitter, sampler: ColorSampler, style: RenderStyle) -> Self {
        Self {
            fitter,
            sampler,
            style,
        }
    }

    /// Stamps every enciphered character over its region on a copy of
    /// `source`.
    ///
    /// Measuring and color sampling only read the source image and run in
    /// parallel. Drawing is strictly sequential in input order, so
    /// overlapping regions resolve to the later character. Each glyph is
    /// clipped to its own region: pixels outside the drawn regions stay
    /// byte-identical to the source.
    pub fn reconstruct(
        &self,
        characters: &PositionalCharacterSet,
        source: &DynamicImage,
    ) -> crate::error::Result<RgbaImage> {
        let source = source.to_rgba8();
        let mut output = source.clone();

        let ops = characters
            .par_iter()
            .map(|pc| self.prepare(pc, &source))
            .collect::<crate::error::Result<Vec<_>>>()?;

        for op in ops.iter().flatten() {
            stamp(&mut output, self.fitter.font(), op);
        }

        info!(glyphs = characters.len(), "reconstruction complete");
        Ok(output)
    }

    /// Measures one character: anchor, fitted size, sampled colors.
    ///
    /// Returns `Ok(None)` when the region falls entirely outside the canvas.
    fn prepare(
        &self,
        pc: &PositionalCharacter,
        source: &RgbaImage,
    ) -> crate::error::Result<Option<DrawOp>> {
        let region = pc.region();
        let text = pc.character().as_str();

        let scale = self.fitter.fit(region.width().max(0) as u32, text);
        let (fg, bg) = self.sampler.sample(source, region);
        let (fill, stroke) = match self.style {
            RenderStyle::Outlined => (bg, Some(fg)),
            RenderStyle::Filled => (fg, None),
        };

        let (x0, y0, x1, y1) = region.to_rect(RectOrigin::TopLeft);
        let (img_w, img_h) = source.dimensions();
        let x0 = x0.clamp(0, img_w as i32);
        let y0 = y0.clamp(0, img_h as i32);
        let x1 = x1.clamp(0, img_w as i32);
        let y1 = y1.clamp(0, img_h as i32);
        if x1 <= x0 || y1 <= y0 {
            return Ok(None);
        }

        Ok(Some(DrawOp {
            text: text.to_string(),
            clip: (x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32),
            scale,
            fill,
            stroke,
        }))
    }
}

/// Draws one glyph into its clip rectangle and blits the result back.
///
/// Working on a cropped patch keeps the stroke offsets and any glyph
/// overshoot from leaking outside the character's own region.
fn stamp(canvas: &mut RgbaImage, font: &ab_glyph::FontArc, op: &DrawOp) {
    let (x, y, w, h) = op.clip;
    let mut patch = imageops::crop_imm(canvas, x, y, w, h).to_image();

    if let Some(stroke) = op.stroke {
        for (dx, dy) in STROKE_OFFSETS {
            draw_text_mut(&mut patch, stroke, dx, dy, op.scale, font, &op.text);
        }
    }
    draw_text_mut(&mut patch, op.fill, 0, 0, op.scale, font, &op.text);

    imageops::replace(canvas, &patch, x as i64, y as i64);
}
