//! Append-only JSONL writer.

use std::path::Path;

use boxes_core::{BoxCreated, EventRecord};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::errors::{EventLogError, Result};

/// Serialize records into one JSONL chunk: one line per record, each
/// terminated by `\n`.
pub fn encode_lines(records: &[BoxCreated]) -> Result<String> {
    let mut chunk = String::new();
    for record in records {
        let line = serde_json::to_string(&EventRecord::BoxCreated(record.clone()))?;
        chunk.push_str(&line);
        chunk.push('\n');
    }
    Ok(chunk)
}

/// Append `records` to the log at `path`, creating the file and its parent
/// directories if needed. Returns the number of records written.
///
/// Existing content is never truncated or reordered. Lines stay whole for a
/// single writer; appenders in other processes are not coordinated. An empty
/// batch does not touch the file system.
pub async fn append_records(path: &Path, records: &[BoxCreated]) -> Result<usize> {
    if records.is_empty() {
        return Ok(0);
    }

    let chunk = encode_lines(records)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| EventLogError::io("create directory", parent, e))?;
    }

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await
        .map_err(|e| EventLogError::io("open", path, e))?;
    file.write_all(chunk.as_bytes())
        .await
        .map_err(|e| EventLogError::io("append to", path, e))?;
    file.flush()
        .await
        .map_err(|e| EventLogError::io("flush", path, e))?;
    file.sync_data()
        .await
        .map_err(|e| EventLogError::io("sync", path, e))?;

    debug!(path = %path.display(), count = records.len(), "appended box records");
    Ok(records.len())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
