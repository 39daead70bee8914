//! Deterministic ordering of normalized records.

use std::cmp::Ordering;

use boxes_core::time::sort_millis;
use boxes_core::{BoxCreated, LearningCreated};

/// Confidence used for ordering. Non-finite values count as `0`.
fn sort_confidence(learning: &LearningCreated) -> f64 {
    if learning.confidence.is_finite() {
        learning.confidence
    } else {
        0.0
    }
}

/// Learning order: confidence descending, then newest first.
pub fn compare_learnings(a: &LearningCreated, b: &LearningCreated) -> Ordering {
    sort_confidence(b)
        .total_cmp(&sort_confidence(a))
        .then_with(|| sort_millis(&b.ts).cmp(&sort_millis(&a.ts)))
}

/// Box order: newest first.
pub fn compare_boxes(a: &BoxCreated, b: &BoxCreated) -> Ordering {
    sort_millis(&b.ts).cmp(&sort_millis(&a.ts))
}

/// Sort learnings in place. Equal keys keep file order.
pub fn rank_learnings(learnings: &mut [LearningCreated]) {
    learnings.sort_by(compare_learnings);
}

/// Sort boxes in place. Equal timestamps keep file order.
pub fn rank_boxes(boxes: &mut [BoxCreated]) {
    boxes.sort_by(compare_boxes);
}
