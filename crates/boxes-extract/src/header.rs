//! Header-line matching.

use std::sync::LazyLock;

use regex::Regex;

/// `<marker> <Type> <10+ dashes>`, one line. The type is letters and spaces.
static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s+([A-Za-z][A-Za-z ]*)\s+[-\x{2500}]{10,}\s*$")
        .expect("header pattern compiles")
});

/// A header found in the text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderMatch {
    /// Byte offset of the start of the header line.
    pub start: usize,
    /// Box type, trimmed; case and inner spacing preserved.
    pub box_type: String,
}

/// Match a single line (without its terminator) against the header grammar.
///
/// Returns the trimmed box type. The marker is matched but not kept.
pub fn match_header_line(line: &str) -> Option<String> {
    let caps = HEADER_PATTERN.captures(line)?;
    let box_type = caps.get(2)?.as_str().trim();
    (!box_type.is_empty()).then(|| box_type.to_string())
}

/// Find every header line in `text`, in order.
pub fn scan_headers(text: &str) -> Vec<HeaderMatch> {
    let mut headers = Vec::new();
    let mut offset = 0;

    for line in text.split('\n') {
        let content = line.strip_suffix('\r').unwrap_or(line);
        if let Some(box_type) = match_header_line(content) {
            headers.push(HeaderMatch {
                start: offset,
                box_type,
            });
        }
        offset += line.len() + 1; // +1 for newline
    }

    headers
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── match_header_line ───────────────────────────────────────────

    #[test]
    fn emoji_marker_with_box_drawing_rule() {
        assert_eq!(
            match_header_line("⚖️ Choice ─────────────────────────"),
            Some("Choice".into())
        );
    }

    #[test]
    fn ascii_dashes_count() {
        assert_eq!(
            match_header_line("!! Warning ----------"),
            Some("Warning".into())
        );
    }

    #[test]
    fn multi_word_type_keeps_inner_spacing() {
        assert_eq!(
            match_header_line("📋 Follow Ups ────────────"),
            Some("Follow Ups".into())
        );
    }

    #[test]
    fn nine_dashes_is_not_a_header() {
        assert_eq!(match_header_line("⚠️ Warning ─────────"), None);
    }

    #[test]
    fn type_must_be_letters() {
        assert_eq!(match_header_line("⚠️ Warning2 ──────────"), None);
        assert_eq!(match_header_line("⚠️ 42 ──────────"), None);
    }

    #[test]
    fn marker_is_required() {
        assert_eq!(match_header_line("Warning ──────────"), None);
    }

    #[test]
    fn trailing_whitespace_allowed() {
        assert_eq!(
            match_header_line("🔄 Reflection ──────────   "),
            Some("Reflection".into())
        );
    }

    #[test]
    fn text_after_rule_is_not_a_header() {
        assert_eq!(match_header_line("⚠️ Warning ────────── more"), None);
    }

    #[test]
    fn case_preserved() {
        assert_eq!(
            match_header_line("↩️ pushBack ──────────"),
            Some("pushBack".into())
        );
    }

    // ── scan_headers ────────────────────────────────────────────────

    #[test]
    fn no_headers_in_plain_text() {
        assert!(scan_headers("just some prose\nwith two lines").is_empty());
        assert!(scan_headers("").is_empty());
    }

    #[test]
    fn offsets_point_at_line_starts() {
        let text = "intro\n⚖️ Choice ──────────\n**What**: x\n⚠️ Warning ──────────\n";
        let headers = scan_headers(text);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[0].start, "intro\n".len());
        assert!(text[headers[1].start..].starts_with("⚠️ Warning"));
        assert_eq!(headers[1].box_type, "Warning");
    }

    #[test]
    fn crlf_lines_match() {
        let text = "⚖️ Choice ──────────\r\n**What**: x\r\n";
        let headers = scan_headers(text);
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[0].start, 0);
        assert_eq!(headers[0].box_type, "Choice");
    }
}
