//! # boxes-hooks
//!
//! Host-facing surface of response boxes.
//!
//! The host delivers two kinds of call:
//!
//! - **Message updates** ([`HostEvent`]): completed assistant messages are
//!   scanned for boxes and the boxes appended to the event log.
//! - **System-prompt construction** ([`SystemTransformInput`] /
//!   [`SystemTransformOutput`]): a projection of the log is appended to the
//!   system prompt, at most once per session.
//!
//! Which sessions were already injected lives in an [`InjectionCache`] the
//! caller owns and passes in.

#![deny(unsafe_code)]

pub mod cache;
pub mod errors;
pub mod plugin;
pub mod types;

pub use cache::InjectionCache;
pub use errors::{HookError, Result};
pub use plugin::{PluginContext, ResponseBoxesPlugin, session_headers};
pub use types::{
    CaptureOutcome, EventProperties, HostEvent, MessageInfo, MessagePart, SystemTransformInput,
    SystemTransformOutput,
};
