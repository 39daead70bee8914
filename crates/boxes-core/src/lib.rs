//! # boxes-core
//!
//! Foundation types shared by every response-boxes crate.
//!
//! - **Segments**: [`Segment`], one parsed box before persistence
//! - **Records**: [`BoxCreated`], [`LearningCreated`] and the persisted
//!   [`EventRecord`] union (one JSON object per log line)
//! - **Ids**: collision-resistant box ids ([`ids::generate_box_id`])
//! - **Scoring**: initial score classification by box type
//! - **Time**: ISO-8601 helpers and tolerant timestamp ordering
//! - **Logging**: `tracing` subscriber setup and log capture for tests

#![deny(unsafe_code)]

pub mod constants;
pub mod events;
pub mod ids;
pub mod logging;
pub mod scoring;
pub mod segment;
pub mod time;

pub use events::{BoxCreated, EventKind, EventRecord, FieldMap, LearningCreated};
pub use segment::Segment;
