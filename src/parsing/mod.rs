//! Transcript parsing stages.
//!
//! - [`tokenizer`] - finds message headers and cuts the text into segments
//! - [`normalizer`] - parses timestamps and splits author from content
//! - [`enricher`] - derives calendar fields from each timestamp
//!
//! The stages are plain functions; [`crate::parser::parse_transcript`]
//! composes them.

pub mod enricher;
pub mod normalizer;
pub mod tokenizer;

pub use enricher::{calendar_fields, enrich, hour_bucket};
pub use normalizer::{normalize, parse_timestamp, split_author};
pub use tokenizer::{RawSegment, TIMESTAMP_PATTERN, count_headers, tokenize};
