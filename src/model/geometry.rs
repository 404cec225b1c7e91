//! Bounding boxes in page image coordinates.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in image pixel coordinates.
///
/// Serialized as `[x1, y1, x2, y2]`, the layout the analyzer emits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct BBox {
    /// Left edge
    pub x1: f64,
    /// Top edge
    pub y1: f64,
    /// Right edge
    pub x2: f64,
    /// Bottom edge
    pub y2: f64,
}

impl BBox {
    /// Create a box from its corners.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Width of the box (may be negative for malformed boxes).
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Height of the box (may be negative for malformed boxes).
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Check if the box encloses no area.
    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }

    /// Integer pixel region of this box inside an image of the given size.
    ///
    /// Coordinates are truncated toward zero and clamped to the image.
    /// Returns `None` when nothing of the box remains.
    pub fn pixel_rect(&self, image_width: u32, image_height: u32) -> Option<PixelRect> {
        let clamp = |v: f64, max: u32| -> u32 { (v.trunc() as i64).clamp(0, max as i64) as u32 };

        let x1 = clamp(self.x1, image_width);
        let y1 = clamp(self.y1, image_height);
        let x2 = clamp(self.x2, image_width);
        let y2 = clamp(self.y2, image_height);

        if x2 <= x1 || y2 <= y1 {
            return None;
        }

        Some(PixelRect {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        })
    }
}

impl From<[f64; 4]> for BBox {
    fn from([x1, y1, x2, y2]: [f64; 4]) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

impl From<BBox> for [f64; 4] {
    fn from(b: BBox) -> Self {
        [b.x1, b.y1, b.x2, b.y2]
    }
}

/// A cropping region in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    /// Left edge
    pub x: u32,
    /// Top edge
    pub y: u32,
    /// Width in pixels (non-zero)
    pub width: u32,
    /// Height in pixels (non-zero)
    pub height: u32,
}
