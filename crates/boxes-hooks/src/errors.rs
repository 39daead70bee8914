//! Hook error types.

use thiserror::Error;

/// Errors surfaced to the host from a hook.
///
/// The host decides what to do with them; a failed capture must never
/// interrupt the assistant turn that produced it.
#[derive(Debug, Error)]
pub enum HookError {
    /// Reading or appending the event log failed.
    #[error(transparent)]
    EventLog(#[from] boxes_events::EventLogError),

    /// A host event payload was not valid JSON for its shape.
    #[error("invalid host event: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Convenience type alias for hook results.
pub type Result<T> = std::result::Result<T, HookError>;
