//! Error types for the event log.
//!
//! Only writing can fail loudly. Reading treats a missing file as an empty
//! log and skips bad lines, so the only read error is an unreadable file.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by event log operations.
#[derive(Debug, Error)]
pub enum EventLogError {
    /// File-system failure.
    #[error("failed to {op} {}: {source}", path.display())]
    Io {
        /// What was being attempted (e.g. `append to`).
        op: &'static str,
        /// Path involved.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A record could not be serialized.
    #[error("failed to serialize event record: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl EventLogError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

/// Convenience type alias for event log results.
pub type Result<T> = std::result::Result<T, EventLogError>;
