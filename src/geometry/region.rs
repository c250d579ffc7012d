use crate::error::OcrCipherError;
use crate::geometry::Position;

/// Coordinate origin used when extracting a drawable rectangle from a
/// [`BoundingRegion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectOrigin {
    /// y grows upward from the image bottom (the OCR engine convention).
    BottomLeft,
    /// y grows downward from the image top (the pixel-addressing convention).
    TopLeft,
}

/// Axis-aligned bounds of one recognized character inside a fixed-size image.
///
/// `top` is the distance from the image *bottom* to the top edge of the box,
/// matching the left/bottom/right/top convention OCR engines emit. The
/// enclosing image dimensions are captured at construction so the y-axis can
/// be flipped without extra context; they never change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingRegion {
    left: i32,
    top: i32,
    width: i32,
    height: i32,
    img_width: u32,
    img_height: u32,
}

impl BoundingRegion {
    /// Creates a region from its left/top corner and extents.
    ///
    /// Fails with a geometry error when either extent is negative.
    pub fn new(
        left: i32,
        top: i32,
        width: i32,
        height: i32,
        img_width: u32,
        img_height: u32,
    ) -> crate::error::Result<Self> {
        if width < 0 || height < 0 {
            return Err(OcrCipherError::geometry(format!(
                "region extents must be non-negative, got {width}x{height}"
            )));
        }
        Ok(Self {
            left,
            top,
            width,
            height,
            img_width,
            img_height,
        })
    }

    /// Builds a region from left/bottom/right/top distances, y measured from
    /// the image bottom.
    pub fn from_lbrt(
        left: i32,
        bottom: i32,
        right: i32,
        top: i32,
        img_width: u32,
        img_height: u32,
    ) -> crate::error::Result<Self> {
        Self::new(left, top, right - left, top - bottom, img_width, img_height)
    }

    /// Collapses a four-corner quad (pixel coordinates, y down from the image
    /// top) into its axis-aligned hull.
    pub fn from_corners(
        top_left: Position,
        top_right: Position,
        bottom_left: Position,
        bottom_right: Position,
        img_width: u32,
        img_height: u32,
    ) -> crate::error::Result<Self> {
        let corners = [top_left, top_right, bottom_left, bottom_right];
        let left = corners.iter().map(|p| p.x).min().unwrap_or(0);
        let right = corners.iter().map(|p| p.x).max().unwrap_or(0);
        let min_y = corners.iter().map(|p| p.y).min().unwrap_or(0);
        let max_y = corners.iter().map(|p| p.y).max().unwrap_or(0);

        // Pixel y grows downward; the stored `top`/`bottom` grow upward.
        let top = img_height as i32 - min_y;
        let bottom = img_height as i32 - max_y;
        Self::from_lbrt(left, bottom, right, top, img_width, img_height)
    }

    pub fn left(&self) -> i32 {
        self.left
    }

    pub fn top(&self) -> i32 {
        self.top
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn img_width(&self) -> u32 {
        self.img_width
    }

    pub fn img_height(&self) -> u32 {
        self.img_height
    }

    /// Extracts `(x0, y0, x1, y1)` under the requested origin.
    ///
    /// `BottomLeft` keeps the stored bottom-up y values; `TopLeft` flips the
    /// y-axis with the stored image height, yielding rectangle coordinates
    /// usable directly for pixel addressing.
    pub fn to_rect(&self, origin: RectOrigin) -> (i32, i32, i32, i32) {
        match origin {
            RectOrigin::BottomLeft => (
                self.left,
                self.top,
                self.left + self.width,
                self.top - self.height,
            ),
            RectOrigin::TopLeft => (
                self.left,
                self.img_height as i32 - self.top,
                self.left + self.width,
                self.img_height as i32 - (self.top - self.height),
            ),
        }
    }

    /// Top-left corner in pixel coordinates; the draw anchor for this region.
    pub fn anchor(&self) -> Position {
        let (x0, y0, _, _) = self.to_rect(RectOrigin::TopLeft);
        Position::new(x0, y0)
    }
}
