//! Page-space geometry.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An axis-aligned box in page-pixel coordinates, `(x0, y0)` top-left.
///
/// Construction rejects negative extents, so `width()` and `height()` are
/// never negative. Zero-area boxes are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f32; 4]", into = "[f32; 4]")]
pub struct BoundingBox {
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
}

impl BoundingBox {
    /// Create a validated bounding box.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Result<Self> {
        let finite = [x0, y0, x1, y1].iter().all(|v| v.is_finite());
        if !finite || x1 < x0 || y1 < y0 {
            return Err(Error::InvalidBoundingBox { x0, y0, x1, y1 });
        }
        Ok(Self { x0, y0, x1, y1 })
    }

    /// Create a box from its top-left corner and size.
    pub fn from_origin(x: f32, y: f32, width: f32, height: f32) -> Result<Self> {
        Self::new(x, y, x + width, y + height)
    }

    /// Left edge.
    pub fn x0(&self) -> f32 {
        self.x0
    }

    /// Top edge.
    pub fn y0(&self) -> f32 {
        self.y0
    }

    /// Right edge.
    pub fn x1(&self) -> f32 {
        self.x1
    }

    /// Bottom edge.
    pub fn y1(&self) -> f32 {
        self.y1
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Width and height rounded to whole pixels.
    pub fn pixel_size(&self) -> (u32, u32) {
        (self.width().round() as u32, self.height().round() as u32)
    }
}

impl TryFrom<[f32; 4]> for BoundingBox {
    type Error = Error;

    fn try_from([x0, y0, x1, y1]: [f32; 4]) -> Result<Self> {
        Self::new(x0, y0, x1, y1)
    }
}

impl From<BoundingBox> for [f32; 4] {
    fn from(bbox: BoundingBox) -> Self {
        [bbox.x0, bbox.y0, bbox.x1, bbox.y1]
    }
}
