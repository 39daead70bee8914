//! Tolerant record normalization.
//!
//! Every line of the log goes through [`parse_line`], which never fails the
//! whole read: a line either becomes a fully-typed [`LogEntry`] or is skipped
//! with a [`SkipReason`]. Missing or wrong-typed sub-fields are filled with
//! defaults so older log formats stay readable:
//!
//! | Field | Default |
//! |---|---|
//! | `ts` | epoch (`1970-01-01T00:00:00.000Z`) |
//! | `id` | `rb_legacy_<ts>` |
//! | `box_type` | legacy `type`, else `Unknown` |
//! | `fields`, `context` | empty |
//! | `initial_score` | 50 |
//! | `schema_version` | 0 |
//! | `confidence` | 0.0 |
//!
//! The discriminator is the `event` field. A missing or non-string value
//! means a pre-discriminator `BoxCreated` record.

use boxes_core::constants::{
    EVENT_FIELD, LEGACY_INITIAL_SCORE, LEGACY_SCHEMA_VERSION, LEGACY_TYPE_FIELD, UNKNOWN_BOX_TYPE,
};
use boxes_core::ids::legacy_box_id;
use boxes_core::time::EPOCH_ISO;
use boxes_core::{BoxCreated, EventKind, FieldMap, LearningCreated};
use serde_json::{Map, Value};

/// A normalized log line.
#[derive(Clone, Debug, PartialEq)]
pub enum LogEntry {
    /// A box record.
    BoxCreated(BoxCreated),
    /// A learning record with a non-empty insight.
    LearningCreated(LearningCreated),
    /// A record whose `event` names a kind this reader does not know.
    Unrecognized {
        /// The unknown discriminator.
        event: String,
    },
}

/// Why a line produced no entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Empty or whitespace-only line.
    Blank,
    /// Not valid JSON (typically a torn write).
    Malformed(String),
    /// Valid JSON, but not an object.
    NotAnObject,
    /// A learning without insight text.
    EmptyInsight,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "blank line"),
            Self::Malformed(e) => write!(f, "malformed JSON: {e}"),
            Self::NotAnObject => write!(f, "not a JSON object"),
            Self::EmptyInsight => write!(f, "learning without insight"),
        }
    }
}

/// Parse and normalize one log line.
pub fn parse_line(line: &str) -> Result<LogEntry, SkipReason> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(SkipReason::Blank);
    }
    let value: Value =
        serde_json::from_str(trimmed).map_err(|e| SkipReason::Malformed(e.to_string()))?;
    let Value::Object(record) = value else {
        return Err(SkipReason::NotAnObject);
    };
    normalize_record(&record)
}

/// Normalize a decoded JSON object.
pub fn normalize_record(record: &Map<String, Value>) -> Result<LogEntry, SkipReason> {
    let kind = match record.get(EVENT_FIELD) {
        Some(Value::String(name)) => match EventKind::from_wire(name) {
            Some(kind) => kind,
            None => {
                return Ok(LogEntry::Unrecognized {
                    event: name.clone(),
                });
            }
        },
        _ => EventKind::BoxCreated,
    };

    match kind {
        EventKind::BoxCreated => Ok(LogEntry::BoxCreated(normalize_box(record))),
        EventKind::LearningCreated => normalize_learning(record)
            .map(LogEntry::LearningCreated)
            .ok_or(SkipReason::EmptyInsight),
    }
}

/// Fill a `BoxCreated` from a partially-typed record.
pub fn normalize_box(record: &Map<String, Value>) -> BoxCreated {
    let ts = string_field(record, "ts").unwrap_or_else(|| EPOCH_ISO.to_string());
    let box_type = string_field(record, "box_type")
        .or_else(|| string_field(record, LEGACY_TYPE_FIELD))
        .unwrap_or_else(|| UNKNOWN_BOX_TYPE.to_string());

    BoxCreated {
        id: string_field(record, "id").unwrap_or_else(|| legacy_box_id(&ts)),
        box_type,
        fields: record.get("fields").map(coerce_fields).unwrap_or_default(),
        context: match record.get("context") {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        },
        initial_score: record
            .get("initial_score")
            .and_then(integer)
            .unwrap_or(LEGACY_INITIAL_SCORE),
        schema_version: record
            .get("schema_version")
            .and_then(integer)
            .unwrap_or(LEGACY_SCHEMA_VERSION),
        ts,
    }
}

/// Fill a `LearningCreated`. Returns `None` when the insight is missing or empty.
pub fn normalize_learning(record: &Map<String, Value>) -> Option<LearningCreated> {
    let insight = string_field(record, "insight").filter(|s| !s.is_empty())?;
    Some(LearningCreated {
        insight,
        confidence: record
            .get("confidence")
            .and_then(Value::as_f64)
            .unwrap_or(0.0),
        ts: string_field(record, "ts").unwrap_or_else(|| EPOCH_ISO.to_string()),
    })
}

/// Convert a `fields` value into string pairs, keeping order.
///
/// Strings are kept as-is, numbers and booleans in their JSON text form,
/// nested values as compact JSON. Nulls are dropped, as is anything that is
/// not an object.
pub fn coerce_fields(value: &Value) -> FieldMap {
    let Value::Object(map) = value else {
        return FieldMap::new();
    };
    map.iter()
        .filter_map(|(key, val)| {
            let text = match val {
                Value::Null => return None,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some((key.clone(), text))
        })
        .collect()
}

fn string_field(record: &Map<String, Value>, key: &str) -> Option<String> {
    record.get(key).and_then(Value::as_str).map(str::to_string)
}

#[allow(clippy::cast_possible_truncation)]
fn integer(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().filter(|f| f.is_finite()).map(|f| f.round() as i64))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    // ── parse_line ──────────────────────────────────────────────────

    #[test]
    fn blank_lines_skipped() {
        assert_eq!(parse_line(""), Err(SkipReason::Blank));
        assert_eq!(parse_line("   \r"), Err(SkipReason::Blank));
    }

    #[test]
    fn torn_line_skipped() {
        assert_matches!(
            parse_line(r#"{"event":"BoxCreated","id":"#),
            Err(SkipReason::Malformed(_))
        );
    }

    #[test]
    fn non_objects_skipped() {
        assert_eq!(parse_line("42"), Err(SkipReason::NotAnObject));
        assert_eq!(parse_line("[1,2]"), Err(SkipReason::NotAnObject));
        assert_eq!(parse_line("null"), Err(SkipReason::NotAnObject));
        assert_eq!(parse_line(r#""text""#), Err(SkipReason::NotAnObject));
    }

    #[test]
    fn complete_box_passes_through() {
        let line = r#"{"event":"BoxCreated","id":"rb_x","ts":"2026-01-01T00:00:00.000Z","box_type":"Choice","fields":{"what":"a","why":"b"},"context":{"session_id":"s"},"initial_score":60,"schema_version":1}"#;
        let entry = parse_line(line).unwrap();
        let LogEntry::BoxCreated(record) = entry else {
            panic!("expected box");
        };
        assert_eq!(record.id, "rb_x");
        assert_eq!(record.box_type, "Choice");
        assert_eq!(record.fields["what"], "a");
        assert_eq!(record.context["session_id"], "s");
        assert_eq!(record.initial_score, 60);
        assert_eq!(record.schema_version, 1);
    }

    #[test]
    fn learning_with_empty_insight_discarded() {
        assert_eq!(
            parse_line(r#"{"event":"LearningCreated","insight":"","confidence":0.9}"#),
            Err(SkipReason::EmptyInsight)
        );
        assert_eq!(
            parse_line(r#"{"event":"LearningCreated","confidence":0.9}"#),
            Err(SkipReason::EmptyInsight)
        );
    }

    #[test]
    fn unknown_discriminator_is_unrecognized() {
        assert_eq!(
            parse_line(r#"{"event":"BoxScored","id":"x"}"#),
            Ok(LogEntry::Unrecognized {
                event: "BoxScored".into()
            })
        );
    }

    // ── normalize_record ────────────────────────────────────────────

    #[test]
    fn missing_discriminator_is_legacy_box() {
        let entry = normalize_record(&object(json!({"type": "Warning"}))).unwrap();
        assert_matches!(entry, LogEntry::BoxCreated(ref b) if b.box_type == "Warning");
    }

    #[test]
    fn non_string_discriminator_is_legacy_box() {
        let entry = normalize_record(&object(json!({"event": 7, "box_type": "Choice"}))).unwrap();
        assert_matches!(entry, LogEntry::BoxCreated(ref b) if b.box_type == "Choice");
    }

    // ── normalize_box ───────────────────────────────────────────────

    #[test]
    fn empty_box_gets_every_default() {
        let record = normalize_box(&Map::new());
        assert_eq!(record.ts, EPOCH_ISO);
        assert_eq!(record.id, format!("rb_legacy_{EPOCH_ISO}"));
        assert_eq!(record.box_type, "Unknown");
        assert!(record.fields.is_empty());
        assert!(record.context.is_empty());
        assert_eq!(record.initial_score, 50);
        assert_eq!(record.schema_version, 0);
    }

    #[test]
    fn legacy_id_uses_record_timestamp() {
        let record = normalize_box(&object(json!({"ts": "2025-05-05T00:00:00Z"})));
        assert_eq!(record.id, "rb_legacy_2025-05-05T00:00:00Z");
    }

    #[test]
    fn box_type_preferred_over_legacy_type() {
        let record = normalize_box(&object(json!({"box_type": "Choice", "type": "Warning"})));
        assert_eq!(record.box_type, "Choice");
    }

    #[test]
    fn wrong_typed_fields_default() {
        let record = normalize_box(&object(json!({
            "id": 12,
            "ts": false,
            "box_type": ["x"],
            "fields": "nope",
            "context": [1],
            "initial_score": "high",
            "schema_version": "one"
        })));
        assert_eq!(record.ts, EPOCH_ISO);
        assert!(record.id.starts_with("rb_legacy_"));
        assert_eq!(record.box_type, "Unknown");
        assert!(record.fields.is_empty());
        assert!(record.context.is_empty());
        assert_eq!(record.initial_score, 50);
        assert_eq!(record.schema_version, 0);
    }

    #[test]
    fn fractional_score_rounds() {
        let record = normalize_box(&object(json!({"initial_score": 72.6})));
        assert_eq!(record.initial_score, 73);
    }

    // ── normalize_learning ──────────────────────────────────────────

    #[test]
    fn learning_defaults() {
        let learning = normalize_learning(&object(json!({"insight": "x"}))).unwrap();
        assert!(learning.confidence.abs() < f64::EPSILON);
        assert_eq!(learning.ts, EPOCH_ISO);
    }

    #[test]
    fn non_numeric_confidence_is_zero() {
        let learning =
            normalize_learning(&object(json!({"insight": "x", "confidence": "high"}))).unwrap();
        assert!(learning.confidence.abs() < f64::EPSILON);
    }

    // ── coerce_fields ───────────────────────────────────────────────

    #[test]
    fn coerce_keeps_order_and_stringifies_scalars() {
        let fields = coerce_fields(&json!({"z": "text", "a": 3, "m": true, "n": null, "o": {"k": 1}}));
        let pairs: Vec<(&str, &str)> = fields
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![("z", "text"), ("a", "3"), ("m", "true"), ("o", r#"{"k":1}"#)]
        );
    }
}
