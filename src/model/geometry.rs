//! Page-space geometry.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in page coordinates.
///
/// The origin is the top-left corner of the page: `y0` is the top edge and
/// `y1` the bottom edge, so `y0 <= y1` for a well-formed box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge
    pub x0: f32,
    /// Top edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Bottom edge
    pub y1: f32,
}

impl BoundingBox {
    /// Create a new bounding box from its four edges.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width of the box.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Height of the box.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Check whether this box intersects another.
    ///
    /// Boxes that merely touch along an edge count as intersecting.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x0 <= other.x1 && other.x0 <= self.x1 && self.y0 <= other.y1 && other.y0 <= self.y1
    }

    /// Signed horizontal overlap with another box.
    ///
    /// Positive when the boxes share horizontal extent, negative when they
    /// are horizontally disjoint (the magnitude is the gap between them).
    pub fn horizontal_overlap(&self, other: &BoundingBox) -> f32 {
        self.x1.min(other.x1) - self.x0.max(other.x0)
    }

    /// Vertical gap between this box and another.
    ///
    /// The smaller of the two edge-to-edge distances, so a block above or
    /// below the target measures from its nearest edge.
    pub fn vertical_gap(&self, other: &BoundingBox) -> f32 {
        let a = (self.y1 - other.y0).abs();
        let b = (self.y0 - other.y1).abs();
        a.min(b)
    }

    /// Check whether this box lies strictly above another.
    pub fn is_above(&self, other: &BoundingBox) -> bool {
        self.y1 < other.y0
    }

    /// Check whether this box lies strictly below another.
    pub fn is_below(&self, other: &BoundingBox) -> bool {
        self.y0 > other.y1
    }
}
