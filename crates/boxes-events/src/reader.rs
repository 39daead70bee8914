//! Tolerant whole-log reader.

use std::io::ErrorKind;
use std::path::Path;

use boxes_core::{BoxCreated, LearningCreated};
use tracing::{debug, trace};

use crate::errors::{EventLogError, Result};
use crate::normalize::{LogEntry, SkipReason, parse_line};

/// Normalized contents of an event log, in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NormalizedLog {
    /// Box records.
    pub boxes: Vec<BoxCreated>,
    /// Learning records with non-empty insights.
    pub learnings: Vec<LearningCreated>,
}

impl NormalizedLog {
    /// True when neither boxes nor learnings were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty() && self.learnings.is_empty()
    }
}

/// Normalize log content already in memory. Bad lines are skipped.
pub fn normalize_log(content: &str) -> NormalizedLog {
    let mut log = NormalizedLog::default();
    let mut skipped = 0usize;

    for (index, line) in content.lines().enumerate() {
        match parse_line(line) {
            Ok(LogEntry::BoxCreated(record)) => log.boxes.push(record),
            Ok(LogEntry::LearningCreated(record)) => log.learnings.push(record),
            Ok(LogEntry::Unrecognized { event }) => {
                trace!(line = index + 1, %event, "ignoring unrecognized event");
            }
            Err(SkipReason::Blank) => {}
            Err(reason) => {
                skipped += 1;
                debug!(line = index + 1, %reason, "skipping log line");
            }
        }
    }

    if skipped > 0 {
        debug!(
            skipped,
            boxes = log.boxes.len(),
            learnings = log.learnings.len(),
            "event log read with skipped lines"
        );
    }
    log
}

/// Read and normalize the log at `path`.
///
/// A missing file is an empty log. Invalid UTF-8 is replaced rather than
/// rejected, so one corrupt line cannot hide the rest.
pub async fn read_log(path: &Path) -> Result<NormalizedLog> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            trace!(path = %path.display(), "event log not found");
            return Ok(NormalizedLog::default());
        }
        Err(e) => return Err(EventLogError::io("read", path, e)),
    };
    Ok(normalize_log(&String::from_utf8_lossy(&bytes)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
