//! Build `BoxCreated` records from extracted segments.

use boxes_core::constants::{PLUGIN_SOURCE, SCHEMA_VERSION};
use boxes_core::ids::generate_box_id;
use boxes_core::scoring::initial_score;
use boxes_core::{BoxCreated, Segment};
use serde_json::{Map, Value};

/// Where a batch of boxes came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureContext {
    /// Host session id.
    pub session_id: String,
    /// 0-based count of earlier captured messages in the session.
    pub message_index: u64,
    /// Name of the host agent.
    pub agent: String,
    /// Working directory, if the host reported one.
    pub directory: Option<String>,
    /// Worktree root, if the host reported one.
    pub worktree: Option<String>,
}

impl CaptureContext {
    /// Render the context object stored on each record.
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::new();
        let _ = map.insert("source".into(), PLUGIN_SOURCE.into());
        let _ = map.insert("session_id".into(), self.session_id.clone().into());
        let _ = map.insert("message_index".into(), self.message_index.into());
        let _ = map.insert("agent".into(), self.agent.clone().into());
        if let Some(directory) = &self.directory {
            let _ = map.insert("directory".into(), directory.clone().into());
        }
        if let Some(worktree) = &self.worktree {
            let _ = map.insert("worktree".into(), worktree.clone().into());
        }
        map
    }
}

/// One record per segment, all stamped with `ts` and a fresh id.
#[must_use]
pub fn build_box_events(segments: &[Segment], ctx: &CaptureContext, ts: &str) -> Vec<BoxCreated> {
    let context = ctx.to_map();
    segments
        .iter()
        .map(|segment| BoxCreated {
            id: generate_box_id(&ctx.session_id),
            ts: ts.to_string(),
            box_type: segment.box_type.clone(),
            fields: segment.fields.clone(),
            context: context.clone(),
            initial_score: initial_score(&segment.box_type),
            schema_version: SCHEMA_VERSION,
        })
        .collect()
}
