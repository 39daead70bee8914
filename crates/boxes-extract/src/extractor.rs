//! Segment extraction: header scan, span split, field parse.

use boxes_core::Segment;
use tracing::trace;

use crate::fields::parse_fields;
use crate::header::scan_headers;

/// Extract every box in `text`, one segment per header, in order.
///
/// A segment spans from its header line to the next header (exclusive), or
/// to the end of the text for the last one. Spans are trimmed and empty ones
/// dropped. The body is everything after the header's own line break.
pub fn extract_segments(text: &str) -> Vec<Segment> {
    let headers = scan_headers(text);
    let mut segments = Vec::with_capacity(headers.len());

    for (index, header) in headers.iter().enumerate() {
        let end = headers.get(index + 1).map_or(text.len(), |next| next.start);
        let block = text[header.start..end].trim();
        if block.is_empty() {
            continue;
        }

        let body = block
            .find('\n')
            .map_or("", |line_end| block[line_end + 1..].trim());
        let fields = parse_fields(body);

        trace!(box_type = %header.box_type, fields = fields.len(), "segment extracted");
        segments.push(Segment {
            box_type: header.box_type.clone(),
            fields,
            raw: block.to_string(),
        });
    }

    segments
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
