//! Box record identifiers.
//!
//! Ids look like `rb_<session prefix>_<base36 epoch millis>_<8 hex>`. Several
//! boxes from one message share the same millisecond, so the random suffix
//! carries the uniqueness.

/// Prefix on every generated id.
pub const ID_PREFIX: &str = "rb";

/// Number of session id characters embedded in a box id.
const SESSION_PREFIX_CHARS: usize = 8;

/// Generate a new box id for a session.
#[must_use]
pub fn generate_box_id(session_id: &str) -> String {
    let millis = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0);
    format_box_id(session_id, millis, rand::random::<u32>())
}

/// Assemble an id from its parts.
#[must_use]
pub fn format_box_id(session_id: &str, millis: u64, random: u32) -> String {
    let session: String = session_id.chars().take(SESSION_PREFIX_CHARS).collect();
    format!("{ID_PREFIX}_{session}_{}_{random:08x}", to_base36(millis))
}

/// Placeholder id for a record written without one.
#[must_use]
pub fn legacy_box_id(ts: &str) -> String {
    format!("{ID_PREFIX}_legacy_{ts}")
}

/// Lower-case base-36 rendering of an integer.
#[must_use]
pub fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".into();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}
