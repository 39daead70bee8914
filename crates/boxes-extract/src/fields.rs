//! Field-line parsing inside a box body.

use std::sync::LazyLock;

use boxes_core::FieldMap;
use regex::Regex;

/// `**Name**: value` anywhere on a line; the value runs to end of line.
static FIELD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*:\s*(.+)").expect("field pattern compiles"));

/// Normalize a field name into a key: trimmed, lower-cased, whitespace runs
/// collapsed to a single `_`.
pub fn normalize_field_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_lowercase()
}

/// Parse one line. Returns `(key, value)` when both are non-empty.
pub fn parse_field_line(line: &str) -> Option<(String, String)> {
    let caps = FIELD_PATTERN.captures(line)?;
    let key = normalize_field_name(caps.get(1)?.as_str());
    let value = caps.get(2)?.as_str().trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value.to_string()))
}

/// Parse every field line in a body. The first occurrence of a key wins.
pub fn parse_fields(body: &str) -> FieldMap {
    let mut fields = FieldMap::new();
    for line in body.lines() {
        if let Some((key, value)) = parse_field_line(line) {
            let _ = fields.entry(key).or_insert(value);
        }
    }
    fields
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
