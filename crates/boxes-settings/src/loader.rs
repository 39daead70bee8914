//! Settings loading with deep merge and environment variable overrides.
//!
//! Loading flow:
//! 1. Start with compiled [`BoxesSettings::default()`]
//! 2. If `~/.response-boxes/settings.json` exists, deep-merge it over defaults
//! 3. Apply environment variable overrides (highest priority)
//!
//! Deep merge rules:
//! - Objects are merged recursively (source overrides target per-key)
//! - Arrays and primitives are replaced entirely by source
//! - Null values in source are skipped (preserving target)

use std::path::{Path, PathBuf};

use boxes_core::constants::{
    ANALYTICS_DIR_NAME, BOXES_FILE_NAME, DEFAULT_MAX_BOXES, DEFAULT_MAX_LEARNINGS, HOME_DIR_NAME,
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::types::BoxesSettings;

/// Disables capture and injection when truthy.
pub const ENV_DISABLED: &str = "RESPONSE_BOXES_DISABLED";
/// Overrides the event log path.
pub const ENV_BOXES_FILE: &str = "RESPONSE_BOXES_FILE";
/// Overrides the number of learnings in a projection.
pub const ENV_MAX_LEARNINGS: &str = "BOX_INJECT_LEARNINGS";
/// Overrides the number of boxes in a projection.
pub const ENV_MAX_BOXES: &str = "BOX_INJECT_BOXES";
/// Overrides the log filter.
pub const ENV_LOG_LEVEL: &str = "RESPONSE_BOXES_LOG";

/// The user's home directory (`$HOME`, falling back to `/tmp`).
pub fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string()))
}

/// `~/.response-boxes/settings.json`.
pub fn settings_path() -> PathBuf {
    home_dir().join(HOME_DIR_NAME).join("settings.json")
}

/// `~/.response-boxes/analytics/boxes.jsonl`.
pub fn default_boxes_file() -> PathBuf {
    home_dir()
        .join(HOME_DIR_NAME)
        .join(ANALYTICS_DIR_NAME)
        .join(BOXES_FILE_NAME)
}

/// Load settings from the default path with env var overrides.
pub fn load_settings() -> Result<BoxesSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific path with env var overrides.
pub fn load_settings_from_path(path: &Path) -> Result<BoxesSettings> {
    load_settings_with(path, |key| std::env::var(key).ok())
}

/// Load settings from `path`, reading overrides through `lookup`.
///
/// A missing file yields defaults. Invalid JSON is an error. Counts in the
/// file that are not positive integers fall back to the fixed defaults.
pub fn load_settings_with<F>(path: &Path, lookup: F) -> Result<BoxesSettings>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = serde_json::to_value(BoxesSettings::default())?;

    let merged = if path.exists() {
        debug!(?path, "loading settings from file");
        let content = std::fs::read_to_string(path)?;
        let user: Value = serde_json::from_str(&content)?;
        sanitize_counts(deep_merge(defaults, user))
    } else {
        debug!(?path, "settings file not found, using defaults");
        defaults
    };

    let settings: BoxesSettings = serde_json::from_value(merged)?;
    Ok(apply_overrides(settings.sanitized(), lookup))
}

/// Replace `maxLearnings`/`maxBoxes` values that are not positive integers
/// with the fixed defaults. Numeric strings such as `"4"` are accepted.
fn sanitize_counts(mut merged: Value) -> Value {
    if let Some(map) = merged.as_object_mut() {
        for (key, default) in [
            ("maxLearnings", DEFAULT_MAX_LEARNINGS),
            ("maxBoxes", DEFAULT_MAX_BOXES),
        ] {
            let Some(val) = map.get_mut(key) else {
                continue;
            };
            let count = match &*val {
                Value::Number(n) => n
                    .as_u64()
                    .and_then(|n| usize::try_from(n).ok())
                    .filter(|n| *n > 0),
                Value::String(s) => parse_positive_count(s),
                _ => None,
            };
            if count.is_none() {
                debug!(key, value = %val, default, "count setting is not a positive integer, using default");
            }
            *val = Value::from(count.unwrap_or(default));
        }
    }
    merged
}

/// Recursive deep merge of two JSON values.
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_val) in source_map {
                if source_val.is_null() {
                    continue;
                }
                let merged = if let Some(target_val) = target_map.remove(&key) {
                    deep_merge(target_val, source_val)
                } else {
                    source_val
                };
                let _ = target_map.insert(key, merged);
            }
            Value::Object(target_map)
        }
        (_, source) => source,
    }
}

/// Apply overrides from the process environment.
pub fn apply_env_overrides(settings: BoxesSettings) -> BoxesSettings {
    apply_overrides(settings, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`.
///
/// - Booleans that do not parse are ignored with a warning.
/// - Counts that are not positive integers fall back to the fixed defaults.
/// - Empty strings count as unset.
pub fn apply_overrides<F>(mut settings: BoxesSettings, lookup: F) -> BoxesSettings
where
    F: Fn(&str) -> Option<String>,
{
    let read = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(val) = read(ENV_DISABLED) {
        match parse_bool(&val) {
            Some(disabled) => settings.disabled = disabled,
            None => warn!(key = ENV_DISABLED, value = %val, "invalid boolean env var, ignoring"),
        }
    }
    if let Some(val) = read(ENV_BOXES_FILE) {
        settings.boxes_file = Some(PathBuf::from(val));
    }
    if let Some(val) = read(ENV_MAX_LEARNINGS) {
        settings.max_learnings = parse_count_or(ENV_MAX_LEARNINGS, &val, DEFAULT_MAX_LEARNINGS);
    }
    if let Some(val) = read(ENV_MAX_BOXES) {
        settings.max_boxes = parse_count_or(ENV_MAX_BOXES, &val, DEFAULT_MAX_BOXES);
    }
    if let Some(val) = read(ENV_LOG_LEVEL) {
        settings.log_level = val;
    }

    settings
}

// ── Pure parsing functions ──────────────────────────────────────────────────

/// Parse a string as a boolean.
///
/// Accepts (case-insensitive): `true`/`1`/`yes`/`on` or `false`/`0`/`no`/`off`.
pub fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a positive integer count.
pub fn parse_positive_count(val: &str) -> Option<usize> {
    val.trim().parse::<usize>().ok().filter(|n| *n > 0)
}

fn parse_count_or(key: &str, val: &str, default: usize) -> usize {
    parse_positive_count(val).unwrap_or_else(|| {
        debug!(key, value = %val, default, "count env var is not a positive integer, using default");
        default
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
