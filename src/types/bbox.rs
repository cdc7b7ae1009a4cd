//! Axis-aligned detection boxes.

use std::cmp::Ordering;

use serde::Serialize;

/// A detection box in normalised image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    /// Detector-assigned identifier.
    pub id: u32,
    /// Left edge.
    pub x1: f32,
    /// Top edge.
    pub y1: f32,
    /// Right edge.
    pub x2: f32,
    /// Bottom edge.
    pub y2: f32,
    /// Detection score in [0.0, 1.0].
    pub confidence: f32,
    /// Position in the generated input, used as the ordering tie-break.
    pub original_index: usize,
}

impl BoundingBox {
    /// Create a box from its top-left corner and size.
    pub fn new(
        id: u32,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        confidence: f32,
        original_index: usize,
    ) -> Self {
        Self {
            id,
            x1: x,
            y1: y,
            x2: x + width,
            y2: y + height,
            confidence,
            original_index,
        }
    }

    /// Area of the box.
    pub fn area(&self) -> f32 {
        (self.x2 - self.x1) * (self.y2 - self.y1)
    }

    /// Intersection over union with another box. Zero when the boxes are
    /// disjoint or the union is degenerate.
    pub fn iou(&self, other: &BoundingBox) -> f32 {
        let ix1 = self.x1.max(other.x1);
        let iy1 = self.y1.max(other.y1);
        let ix2 = self.x2.min(other.x2);
        let iy2 = self.y2.min(other.y2);

        if ix2 <= ix1 || iy2 <= iy1 {
            return 0.0;
        }

        let inter = (ix2 - ix1) * (iy2 - iy1);
        let union = self.area() + other.area() - inter;
        if union <= 0.0 {
            return 0.0;
        }
        inter / union
    }

    /// Processing order: higher confidence first, then lower original index.
    ///
    /// This is a total order over boxes from one generator run, so every sort
    /// algorithm produces the same sequence.
    pub fn rank_cmp(&self, other: &BoundingBox) -> Ordering {
        other
            .confidence
            .total_cmp(&self.confidence)
            .then(self.original_index.cmp(&other.original_index))
    }

    /// True if `self` must come strictly before `other`.
    pub fn ranks_before(&self, other: &BoundingBox) -> bool {
        self.rank_cmp(other) == Ordering::Less
    }
}
