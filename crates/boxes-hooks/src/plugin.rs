//! The response-boxes plugin: capture on message updates, inject on prompt
//! construction.
//!
//! Capture: assistant text → segments → `BoxCreated` records → one append.
//! Injection: whole log → projection → appended to the system prompt, at most
//! once per session per [`InjectionCache`].
//!
//! Both paths are full no-ops while the settings say `disabled`.

use std::collections::{BTreeMap, HashMap};

use boxes_core::constants::SCHEMA_VERSION;
use boxes_core::time::now_iso;
use boxes_events::{CaptureContext, EventLog, build_box_events};
use boxes_extract::extract_segments;
use boxes_projection::{ProjectionLimits, project};
use boxes_settings::BoxesSettings;
use tracing::{debug, info, warn};

use crate::cache::InjectionCache;
use crate::errors::Result;
use crate::types::{CaptureOutcome, HostEvent, SystemTransformInput, SystemTransformOutput};

/// Agent name recorded when the host does not give one.
pub const DEFAULT_AGENT: &str = "OpenCode";

/// Header carrying the session id.
pub const SESSION_HEADER: &str = "X-Response-Boxes-Session";

/// Header carrying the record schema version.
pub const VERSION_HEADER: &str = "X-Response-Boxes-Version";

/// Host facts fixed for the plugin's lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PluginContext {
    /// Host working directory.
    pub directory: Option<String>,
    /// Host worktree root.
    pub worktree: Option<String>,
    /// Host agent name.
    pub agent: String,
}

impl Default for PluginContext {
    fn default() -> Self {
        Self {
            directory: None,
            worktree: None,
            agent: DEFAULT_AGENT.to_string(),
        }
    }
}

/// Plugin state: settings, log handle, per-session message counters.
#[derive(Debug)]
pub struct ResponseBoxesPlugin {
    settings: BoxesSettings,
    context: PluginContext,
    log: EventLog,
    message_counts: HashMap<String, u64>,
}

impl ResponseBoxesPlugin {
    /// Build a plugin writing to the log named by `settings`.
    pub fn new(settings: BoxesSettings, context: PluginContext) -> Self {
        let settings = settings.sanitized();
        let log = EventLog::new(settings.boxes_file_path());
        Self {
            settings,
            context,
            log,
            message_counts: HashMap::new(),
        }
    }

    /// Effective settings.
    pub fn settings(&self) -> &BoxesSettings {
        &self.settings
    }

    /// The event log this plugin appends to and projects from.
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Truncation limits for projections.
    pub fn limits(&self) -> ProjectionLimits {
        ProjectionLimits::new(self.settings.max_learnings, self.settings.max_boxes)
    }

    /// Handle a host message event.
    pub async fn on_event(&mut self, event: &HostEvent) -> Result<CaptureOutcome> {
        if self.settings.disabled {
            return Ok(CaptureOutcome::Disabled);
        }
        let Some(text) = event.assistant_text() else {
            return Ok(CaptureOutcome::Ignored);
        };
        let session_id = event.resolved_session_id().to_string();
        self.capture_text(&session_id, &text).await
    }

    /// Decode a raw JSON host event and handle it.
    pub async fn on_event_json(&mut self, raw: &str) -> Result<CaptureOutcome> {
        if self.settings.disabled {
            return Ok(CaptureOutcome::Disabled);
        }
        let event: HostEvent = serde_json::from_str(raw)?;
        self.on_event(&event).await
    }

    /// Capture boxes from assistant text in `session_id`.
    ///
    /// Only messages with at least one box advance the session's message
    /// index. Append failures are logged and returned to the host.
    pub async fn capture_text(&mut self, session_id: &str, text: &str) -> Result<CaptureOutcome> {
        if self.settings.disabled {
            return Ok(CaptureOutcome::Disabled);
        }

        let segments = extract_segments(text);
        if segments.is_empty() {
            debug!(session_id, "no boxes in assistant message");
            return Ok(CaptureOutcome::NoBoxes);
        }

        let message_index = self.next_message_index(session_id);
        let ctx = CaptureContext {
            session_id: session_id.to_string(),
            message_index,
            agent: self.context.agent.clone(),
            directory: self.context.directory.clone(),
            worktree: self.context.worktree.clone(),
        };
        let records = build_box_events(&segments, &ctx, &now_iso());

        let count = match self.log.append(&records).await {
            Ok(count) => count,
            Err(e) => {
                warn!(session_id, path = %self.log.path().display(), error = %e, "failed to record boxes");
                return Err(e.into());
            }
        };

        info!(session_id, message_index, count, "captured response boxes");
        Ok(CaptureOutcome::Captured {
            session_id: session_id.to_string(),
            message_index,
            count,
        })
    }

    /// Render the current log, or `None` when it holds nothing.
    pub async fn projection(&self) -> Result<Option<String>> {
        let log = self.log.read().await?;
        Ok(project(&log, self.limits()))
    }

    /// Append the projection to the system prompt once per session.
    ///
    /// The session is marked only when text was actually appended, so an
    /// empty log leaves its single injection for later. Returns whether the
    /// output was changed.
    pub async fn transform_system(
        &self,
        cache: &mut InjectionCache,
        input: &SystemTransformInput,
        output: &mut SystemTransformOutput,
    ) -> Result<bool> {
        if self.settings.disabled || cache.contains(&input.session_id) {
            return Ok(false);
        }

        let Some(text) = self.projection().await? else {
            debug!(session_id = %input.session_id, "nothing to inject");
            return Ok(false);
        };

        let _ = cache.mark(&input.session_id);
        output.system.push(text);
        debug!(session_id = %input.session_id, "injected prior learnings");
        Ok(true)
    }

    fn next_message_index(&mut self, session_id: &str) -> u64 {
        let count = self.message_counts.entry(session_id.to_string()).or_insert(0);
        let index = *count;
        *count += 1;
        index
    }
}

/// Correlation headers for outbound model requests.
pub fn session_headers(session_id: &str) -> BTreeMap<&'static str, String> {
    BTreeMap::from([
        (SESSION_HEADER, session_id.to_string()),
        (VERSION_HEADER, SCHEMA_VERSION.to_string()),
    ])
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
