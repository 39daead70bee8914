//! Settings types.

use std::path::PathBuf;

use boxes_core::constants::{DEFAULT_MAX_BOXES, DEFAULT_MAX_LEARNINGS};
use boxes_core::logging::DEFAULT_LOG_LEVEL;
use serde::{Deserialize, Serialize};

use crate::loader::default_boxes_file;

/// Runtime configuration for capture and injection.
///
/// Every field has a compiled default, so a partial settings file is valid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BoxesSettings {
    /// When set, capture and injection are full no-ops.
    pub disabled: bool,
    /// Event log location. `None` means `~/.response-boxes/analytics/boxes.jsonl`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boxes_file: Option<PathBuf>,
    /// Learnings kept in a projection.
    pub max_learnings: usize,
    /// Boxes kept in a projection.
    pub max_boxes: usize,
    /// Log filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for BoxesSettings {
    fn default() -> Self {
        Self {
            disabled: false,
            boxes_file: None,
            max_learnings: DEFAULT_MAX_LEARNINGS,
            max_boxes: DEFAULT_MAX_BOXES,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl BoxesSettings {
    /// Resolved event log path.
    #[must_use]
    pub fn boxes_file_path(&self) -> PathBuf {
        self.boxes_file.clone().unwrap_or_else(default_boxes_file)
    }

    /// Replace zero truncation counts with their defaults.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if self.max_learnings == 0 {
            self.max_learnings = DEFAULT_MAX_LEARNINGS;
        }
        if self.max_boxes == 0 {
            self.max_boxes = DEFAULT_MAX_BOXES;
        }
        self
    }
}
