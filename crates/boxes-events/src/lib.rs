//! # boxes-events
//!
//! The append-only JSONL event log behind response boxes.
//!
//! - [`factory`]: turn extracted segments into `BoxCreated` records
//! - [`writer`]: append a batch of lines, creating the file on demand
//! - [`normalize`]: fill defaults into partially-typed records
//! - [`reader`]: read a whole log, skipping lines that fail to parse
//!
//! [`EventLog`] bundles the writer and reader behind one path.

#![deny(unsafe_code)]

pub mod errors;
pub mod factory;
pub mod normalize;
pub mod reader;
pub mod writer;

use std::path::{Path, PathBuf};

use boxes_core::BoxCreated;

pub use errors::{EventLogError, Result};
pub use factory::{CaptureContext, build_box_events};
pub use normalize::{LogEntry, SkipReason, parse_line};
pub use reader::{NormalizedLog, normalize_log, read_log};
pub use writer::append_records;

/// Handle on one event log file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    /// Log stored at `path`. Nothing is touched until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File location.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append records. See [`append_records`].
    pub async fn append(&self, records: &[BoxCreated]) -> Result<usize> {
        append_records(&self.path, records).await
    }

    /// Read and normalize the whole log. See [`read_log`].
    pub async fn read(&self) -> Result<NormalizedLog> {
        read_log(&self.path).await
    }
}
