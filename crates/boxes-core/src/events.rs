//! Persisted event records.
//!
//! The event log is newline-delimited JSON, one [`EventRecord`] per line.
//! Records are discriminated by an `event` field naming the kind:
//!
//! ```json
//! {"event":"BoxCreated","id":"rb_…","ts":"2026-01-01T00:00:00.000Z","box_type":"Warning",…}
//! {"event":"LearningCreated","insight":"…","confidence":0.9,"ts":"…"}
//! ```
//!
//! Field names are `snake_case` on the wire.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Ordered field mapping (normalized key → value), first-occurrence order.
pub type FieldMap = IndexMap<String, String>;

/// Kinds of event this crate set knows about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A box was extracted from assistant output.
    BoxCreated,
    /// An insight was synthesized from earlier boxes (written externally).
    LearningCreated,
}

impl EventKind {
    /// Wire name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BoxCreated => "BoxCreated",
            Self::LearningCreated => "LearningCreated",
        }
    }

    /// Parse a wire name. Unknown names yield `None`.
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "BoxCreated" => Some(Self::BoxCreated),
            "LearningCreated" => Some(Self::LearningCreated),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A box captured from assistant output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoxCreated {
    /// Unique record id.
    pub id: String,
    /// Creation time, ISO-8601.
    pub ts: String,
    /// Box label (e.g. `Warning`).
    pub box_type: String,
    /// Parsed fields in first-occurrence order.
    pub fields: FieldMap,
    /// Free-form capture context (session, directory, …).
    pub context: Map<String, Value>,
    /// Initial relevance score derived from the box type.
    pub initial_score: i64,
    /// Record schema version.
    pub schema_version: i64,
}

/// An insight synthesized from earlier boxes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LearningCreated {
    /// Insight text. Never empty once normalized.
    pub insight: String,
    /// Confidence, nominally in `[0, 1]` (not enforced).
    pub confidence: f64,
    /// Creation time, ISO-8601.
    pub ts: String,
}

/// One line of the event log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum EventRecord {
    /// See [`BoxCreated`].
    BoxCreated(BoxCreated),
    /// See [`LearningCreated`].
    LearningCreated(LearningCreated),
}

impl EventRecord {
    /// Kind of this record.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::BoxCreated(_) => EventKind::BoxCreated,
            Self::LearningCreated(_) => EventKind::LearningCreated,
        }
    }
}

impl From<BoxCreated> for EventRecord {
    fn from(record: BoxCreated) -> Self {
        Self::BoxCreated(record)
    }
}

impl From<LearningCreated> for EventRecord {
    fn from(record: LearningCreated) -> Self {
        Self::LearningCreated(record)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
