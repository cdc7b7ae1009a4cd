//! Greedy non-max suppression.

use crate::sort::SortAlgorithm;
use crate::types::BoundingBox;

/// Sort `boxes` into processing order with the chosen algorithm.
pub fn rank(boxes: &mut [BoundingBox], algorithm: SortAlgorithm) {
    algorithm.sort_by(boxes, BoundingBox::ranks_before);
}

/// Keep each box not suppressed by an earlier kept box.
///
/// `ranked` must already be in processing order (see [`rank`]). A later box
/// is suppressed when its IoU with a kept box is strictly above
/// `iou_threshold`. O(n²).
pub fn suppress(ranked: &[BoundingBox], iou_threshold: f32) -> Vec<BoundingBox> {
    let mut suppressed = vec![false; ranked.len()];
    let mut kept = Vec::new();

    for i in 0..ranked.len() {
        if suppressed[i] {
            continue;
        }
        kept.push(ranked[i]);
        for j in i + 1..ranked.len() {
            if !suppressed[j] && ranked[i].iou(&ranked[j]) > iou_threshold {
                suppressed[j] = true;
            }
        }
    }

    kept
}

/// Rank a copy of `boxes` and run NMS on it.
pub fn non_max_suppression(
    boxes: &[BoundingBox],
    algorithm: SortAlgorithm,
    iou_threshold: f32,
) -> Vec<BoundingBox> {
    let mut ranked = boxes.to_vec();
    rank(&mut ranked, algorithm);
    suppress(&ranked, iou_threshold)
}
