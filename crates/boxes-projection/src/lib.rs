//! # boxes-projection
//!
//! Turns a normalized event log into a bounded summary for prompt injection.
//!
//! Learnings are ordered by confidence (newest first on ties) and boxes by
//! recency, each list is truncated to its limit, and the survivors are
//! rendered as a fixed-layout plain-text report.

#![deny(unsafe_code)]

pub mod projector;
pub mod rank;
pub mod render;

pub use projector::{ProjectionLimits, project, project_file};
pub use rank::{rank_boxes, rank_learnings};
pub use render::render_report;
