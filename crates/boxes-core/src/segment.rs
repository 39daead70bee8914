//! In-memory representation of one extracted box.

use serde::Serialize;

use crate::events::FieldMap;

/// One box found in assistant text.
///
/// Produced by the extractor and consumed immediately by the record factory.
/// Field keys are normalized (lower-case, whitespace runs collapsed to `_`)
/// and keep first-occurrence order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Box label as written in the header, trimmed (e.g. `Choice`).
    pub box_type: String,
    /// Parsed `**Name**: value` fields.
    pub fields: FieldMap,
    /// The matched span, trimmed.
    pub raw: String,
}

impl Segment {
    /// Value of a field by normalized key.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_lookup() {
        let mut fields = FieldMap::new();
        let _ = fields.insert("risk".into(), "data loss".into());
        let segment = Segment {
            box_type: "Warning".into(),
            fields,
            raw: String::new(),
        };
        assert_eq!(segment.field("risk"), Some("data loss"));
        assert_eq!(segment.field("missing"), None);
    }

    #[test]
    fn serializes_camel_case() {
        let segment = Segment {
            box_type: "Choice".into(),
            fields: FieldMap::new(),
            raw: "x".into(),
        };
        let json = serde_json::to_string(&segment).unwrap();
        assert!(json.contains("\"boxType\":\"Choice\""));
    }
}
