//! # boxes-settings
//!
//! Configuration for response-boxes capture and injection.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults**: [`BoxesSettings::default()`]
//! 2. **User file**: `~/.response-boxes/settings.json` (deep-merged over defaults)
//! 3. **Environment variables**: `RESPONSE_BOXES_*` / `BOX_INJECT_*` overrides
//!
//! Unparsable truncation counts fall back to the fixed defaults silently;
//! nothing in this crate fails because of a bad environment value.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{
    apply_env_overrides, apply_overrides, deep_merge, default_boxes_file, load_settings,
    load_settings_from_path, load_settings_with, settings_path,
};
pub use types::BoxesSettings;

/// Load settings, falling back to defaults plus environment overrides when
/// the settings file cannot be read or parsed.
pub fn load_settings_or_default() -> BoxesSettings {
    match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, path = %settings_path().display(), "settings file unusable, using defaults");
            apply_env_overrides(BoxesSettings::default())
        }
    }
}
