//! Wire types exchanged with the host.
//!
//! Field names follow the host's JSON (`sessionID`, `type`). Every field is
//! optional on input and a field of the wrong type decodes as its default, so
//! a partially-populated event still decodes; the capture path decides what
//! is usable. Parts that are not objects are dropped.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Event type that carries assistant message updates.
pub const MESSAGE_UPDATED: &str = "message.updated";

/// Role whose messages are captured.
pub const ASSISTANT_ROLE: &str = "assistant";

/// Part type holding message text.
pub const TEXT_PART: &str = "text";

/// Session id used when the host supplies none.
pub const UNKNOWN_SESSION: &str = "unknown";

/// Decode `T`, or its default when the value has another shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Decode each part on its own; anything but an array yields no parts.
fn lenient_parts<'de, D>(deserializer: D) -> Result<Vec<MessagePart>, D::Error>
where
    D: Deserializer<'de>,
{
    let parts = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    };
    Ok(parts)
}

/// A message-lifecycle notification from the host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostEvent {
    /// Event type, e.g. `message.updated`.
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub event_type: String,
    /// Session id at event level.
    #[serde(
        rename = "sessionID",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient"
    )]
    pub session_id: Option<String>,
    /// Event payload.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub properties: Option<EventProperties>,
}

/// Payload of a [`HostEvent`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventProperties {
    /// The message the event refers to.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub info: Option<MessageInfo>,
}

/// A message as reported by the host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageInfo {
    /// Author role (`assistant`, `user`, ...).
    #[serde(deserialize_with = "lenient")]
    pub role: String,
    /// Session id at message level.
    #[serde(
        rename = "sessionID",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient"
    )]
    pub session_id: Option<String>,
    /// Content parts in order.
    #[serde(deserialize_with = "lenient_parts")]
    pub parts: Vec<MessagePart>,
}

/// One content part of a message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagePart {
    /// Part type; only `text` parts are read.
    #[serde(rename = "type", deserialize_with = "lenient")]
    pub part_type: String,
    /// Text content, when present.
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient")]
    pub text: Option<String>,
}

impl MessagePart {
    /// A text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            part_type: TEXT_PART.into(),
            text: Some(text.into()),
        }
    }
}

impl HostEvent {
    /// A `message.updated` event for a finished assistant message.
    pub fn assistant_message(session_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            event_type: MESSAGE_UPDATED.into(),
            session_id: Some(session_id.into()),
            properties: Some(EventProperties {
                info: Some(MessageInfo {
                    role: ASSISTANT_ROLE.into(),
                    session_id: None,
                    parts: vec![MessagePart::text(text)],
                }),
            }),
        }
    }

    /// The message carried by the event, if any.
    pub fn info(&self) -> Option<&MessageInfo> {
        self.properties.as_ref()?.info.as_ref()
    }

    /// Session id: event level, then message level, then `unknown`.
    pub fn resolved_session_id(&self) -> &str {
        self.session_id
            .as_deref()
            .or_else(|| self.info().and_then(|info| info.session_id.as_deref()))
            .unwrap_or(UNKNOWN_SESSION)
    }

    /// Combined text of a completed assistant message.
    ///
    /// `None` unless this is a `message.updated` event for the assistant role
    /// with at least one text part and non-blank combined text. Text parts are
    /// joined by a blank line.
    pub fn assistant_text(&self) -> Option<String> {
        if self.event_type != MESSAGE_UPDATED {
            return None;
        }
        let info = self.info().filter(|info| info.role == ASSISTANT_ROLE)?;
        let texts: Vec<&str> = info
            .parts
            .iter()
            .filter(|part| part.part_type == TEXT_PART)
            .filter_map(|part| part.text.as_deref())
            .collect();
        if texts.is_empty() {
            return None;
        }
        let combined = texts.join("\n\n");
        if combined.trim().is_empty() {
            return None;
        }
        Some(combined)
    }
}

/// Input of the system-prompt transform.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemTransformInput {
    /// Session the prompt is being built for.
    #[serde(rename = "sessionID")]
    pub session_id: String,
}

/// Mutable output of the system-prompt transform.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemTransformOutput {
    /// System-prompt strings; the transform may append one.
    pub system: Vec<String>,
}

/// What a capture call did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// Capture is turned off.
    Disabled,
    /// The event carries no assistant text.
    Ignored,
    /// Assistant text without any box.
    NoBoxes,
    /// Records were appended.
    Captured {
        /// Resolved session id.
        session_id: String,
        /// Position of the message among captured messages in its session.
        message_index: u64,
        /// Records written.
        count: usize,
    },
}
