//! Plain-text report rendering.

use std::fmt::Write;

use boxes_core::{BoxCreated, LearningCreated};

/// First line of every report.
pub const REPORT_TITLE: &str = "PRIOR SESSION LEARNINGS (from Response Boxes):";

/// Heading above the learnings block.
pub const PATTERNS_HEADING: &str = "Patterns (AI-synthesized learnings)";

/// Heading above the boxes block.
pub const BOXES_HEADING: &str = "Recent notable boxes";

/// Last line of every report.
pub const CLOSING_LINE: &str = "Apply relevant learnings using a 🔄 Reflection box in your response.";

/// Shown in place of a confidence that is not a finite number.
pub const NON_FINITE_CONFIDENCE: &str = "--";

/// Fields shown per box summary.
const SUMMARY_FIELDS: usize = 2;

/// Confidence with two decimals, or [`NON_FINITE_CONFIDENCE`].
pub fn format_confidence(confidence: f64) -> String {
    if confidence.is_finite() {
        format!("{confidence:.2}")
    } else {
        NON_FINITE_CONFIDENCE.to_string()
    }
}

/// `key: value` pairs for the first two fields, joined by ` | `.
pub fn summarize_fields(record: &BoxCreated) -> String {
    record
        .fields
        .iter()
        .take(SUMMARY_FIELDS)
        .map(|(key, value)| format!("{key}: {value}"))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Render already-ranked, already-truncated records.
///
/// Each section is emitted only when it has entries and is followed by a
/// blank line.
pub fn render_report(learnings: &[LearningCreated], boxes: &[BoxCreated]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{REPORT_TITLE}");
    out.push('\n');

    if !learnings.is_empty() {
        let _ = writeln!(out, "{PATTERNS_HEADING}");
        for learning in learnings {
            let _ = writeln!(
                out,
                "• [{}] {}",
                format_confidence(learning.confidence),
                learning.insight
            );
        }
        out.push('\n');
    }

    if !boxes.is_empty() {
        let _ = writeln!(out, "{BOXES_HEADING}");
        for record in boxes {
            let _ = writeln!(out, "• {}: {}", record.box_type, summarize_fields(record));
        }
        out.push('\n');
    }

    out.push_str(CLOSING_LINE);
    out
}
