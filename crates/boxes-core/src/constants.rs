//! Constants shared across crates.

/// Schema version stamped on every `BoxCreated` record written by this crate set.
pub const SCHEMA_VERSION: i64 = 1;

/// Schema version assumed for records that carry none.
pub const LEGACY_SCHEMA_VERSION: i64 = 0;

/// Initial score assumed for records that carry none.
pub const LEGACY_INITIAL_SCORE: i64 = 50;

/// Box type assumed when a record names none.
pub const UNKNOWN_BOX_TYPE: &str = "Unknown";

/// Discriminator field name on persisted records.
pub const EVENT_FIELD: &str = "event";

/// Legacy alternate field name for the box type.
pub const LEGACY_TYPE_FIELD: &str = "type";

/// `context.source` value for records written by the plugin.
pub const PLUGIN_SOURCE: &str = "response_boxes_plugin";

/// Directory under `$HOME` holding all response-boxes state.
pub const HOME_DIR_NAME: &str = ".response-boxes";

/// Subdirectory (under [`HOME_DIR_NAME`]) holding the event log.
pub const ANALYTICS_DIR_NAME: &str = "analytics";

/// Event log file name.
pub const BOXES_FILE_NAME: &str = "boxes.jsonl";

/// Default number of learnings kept in a projection.
pub const DEFAULT_MAX_LEARNINGS: usize = 3;

/// Default number of boxes kept in a projection.
pub const DEFAULT_MAX_BOXES: usize = 5;
