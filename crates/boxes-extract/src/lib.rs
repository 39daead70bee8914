//! # boxes-extract
//!
//! Finds response boxes in free-form assistant text.
//!
//! A box starts at a header line: a marker (usually an emoji), the box type,
//! then a rule of at least ten dash-like characters:
//!
//! ```text
//! ⚖️ Choice ────────────────────────────
//! **What**: SQLite over Postgres
//! **Why**: single-file deployment
//! ```
//!
//! Extraction runs in two phases so each can be tested alone:
//!
//! 1. [`header::scan_headers`] walks the text line by line and records where
//!    each header starts.
//! 2. [`fields::parse_fields`] reads `**Name**: value` lines from each body.
//!
//! [`extract_segments`] glues them together. Text without headers yields an
//! empty vector, never an error.

#![deny(unsafe_code)]

pub mod extractor;
pub mod fields;
pub mod header;

pub use extractor::extract_segments;
pub use fields::{normalize_field_name, parse_fields};
pub use header::{HeaderMatch, scan_headers};
