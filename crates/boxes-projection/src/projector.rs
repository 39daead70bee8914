//! Log → summary projection.

use std::path::Path;

use boxes_core::constants::{DEFAULT_MAX_BOXES, DEFAULT_MAX_LEARNINGS};
use boxes_events::{NormalizedLog, Result, read_log};
use tracing::debug;

use crate::rank::{rank_boxes, rank_learnings};
use crate::render::render_report;

/// How many records of each kind a projection keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectionLimits {
    /// Top learnings kept.
    pub max_learnings: usize,
    /// Most recent boxes kept.
    pub max_boxes: usize,
}

impl Default for ProjectionLimits {
    fn default() -> Self {
        Self {
            max_learnings: DEFAULT_MAX_LEARNINGS,
            max_boxes: DEFAULT_MAX_BOXES,
        }
    }
}

impl ProjectionLimits {
    /// Limits from configured counts. Zero falls back to the default.
    #[must_use]
    pub fn new(max_learnings: usize, max_boxes: usize) -> Self {
        let defaults = Self::default();
        Self {
            max_learnings: if max_learnings == 0 {
                defaults.max_learnings
            } else {
                max_learnings
            },
            max_boxes: if max_boxes == 0 {
                defaults.max_boxes
            } else {
                max_boxes
            },
        }
    }
}

/// Rank, truncate and render a normalized log.
///
/// Returns `None` when the log has neither boxes nor learnings.
pub fn project(log: &NormalizedLog, limits: ProjectionLimits) -> Option<String> {
    if log.is_empty() {
        return None;
    }

    let mut learnings = log.learnings.clone();
    rank_learnings(&mut learnings);
    learnings.truncate(limits.max_learnings);

    let mut boxes = log.boxes.clone();
    rank_boxes(&mut boxes);
    boxes.truncate(limits.max_boxes);

    debug!(
        learnings = learnings.len(),
        boxes = boxes.len(),
        "projected event log"
    );
    Some(render_report(&learnings, &boxes))
}

/// Read the log at `path` and project it.
pub async fn project_file(path: &Path, limits: ProjectionLimits) -> Result<Option<String>> {
    let log = read_log(path).await?;
    Ok(project(&log, limits))
}
