//! Analysis layer for chatlens.
//!
//! This module contains:
//! - [`filter`] - Record selection by date range and author
//! - [`stats`] - Aggregate statistics over a selection
//! - [`report`] - All aggregates bundled into one [`Report`]
//! - [`models`] - Output configuration
//! - [`output`] - Record writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::core::{FilterConfig, Report, apply_filters, stats};
//! use chatlens::config::StatsConfig;
//! use chatlens::parser::TranscriptParser;
//!
//! let store = TranscriptParser::new().parse_str("1/1/24, 10:00 AM - Alice: Hi\n");
//! let selected = apply_filters(store.records(), &FilterConfig::new());
//! let summary = stats::summary(selected.iter().copied(), &StatsConfig::default());
//! assert_eq!(summary.messages, 1);
//! ```

pub mod filter;
pub mod models;
pub mod output;
pub mod report;
pub mod stats;

pub use filter::{FilterConfig, OVERALL, UserSelection, apply_filters};
pub use models::OutputConfig;
pub use report::Report;

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
