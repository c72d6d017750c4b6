//! # Chatlens
//!
//! A Rust library for turning WhatsApp chat exports into an ordered set of
//! enriched message records and deriving activity statistics from them.
//!
//! ## Overview
//!
//! A transcript goes through three stages:
//! - **Tokenizer** ([`parsing::tokenize`]) splits raw text at every
//!   `D/M/YY, H:MM AM - ` header into timestamped segments
//! - **Normalizer** ([`parsing::normalize`]) parses the timestamp and
//!   separates the author from the message text
//! - **Enricher** ([`parsing::enrich`]) derives calendar fields (weekday,
//!   month name, hour bucket, ...) from the timestamp
//!
//! The resulting [`RecordStore`] feeds the analysis layer in [`core`]:
//! filtering by date range and author, and aggregate statistics such as
//! timelines, activity heatmaps, busiest users, common words and emojis.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let transcript = "\
//! 1/1/24, 10:00 AM - Alice: Hi
//! 1/1/24, 10:05 AM - Bob: Hello
//! 1/1/24, 10:06 AM - Alice added Carol
//! ";
//!
//! let store = TranscriptParser::new().parse_str(transcript);
//! assert_eq!(store.len(), 3);
//! assert_eq!(store.users(), vec!["Alice", "Bob"]);
//!
//! let filter = FilterConfig::new().with_user("Alice");
//! let report = Report::build(store.records(), &filter, &StatsConfig::default());
//! assert_eq!(report.summary.messages, 1);
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TranscriptParser`](parser::TranscriptParser) and [`parse_transcript`](parser::parse_transcript)
//! - [`parsing`] - Tokenizer, normalizer and enricher stages
//! - [`record`] - [`MessageRecord`] and its [`CalendarFields`](record::CalendarFields)
//! - [`store`] - [`RecordStore`], the ordered record collection
//! - [`config`] - [`ParseConfig`](config::ParseConfig), [`StatsConfig`](config::StatsConfig), [`CalendarLocale`](config::CalendarLocale)
//! - [`core`] - Filtering, statistics, reports and record writers
//! - [`format`] - Export format selection
//! - [`error`] - Unified error types ([`ChatlensError`], [`Result`])
//! - [`cli`] - CLI argument types (feature `cli`)
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod parser;
pub mod parsing;
pub mod record;
pub mod store;

// Re-export the main types at the crate root for convenience
pub use error::{ChatlensError, Result};
pub use record::MessageRecord;
pub use store::RecordStore;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{MessageRecord, RecordStore};

    pub use crate::error::{ChatlensError, Result};

    pub use crate::parser::{TranscriptParser, parse_transcript};

    pub use crate::config::{CalendarLocale, ParseConfig, StatsConfig};

    pub use crate::core::filter::{FilterConfig, UserSelection, apply_filters};
    pub use crate::core::models::OutputConfig;
    pub use crate::core::report::Report;
    pub use crate::core::stats;

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::OutputFormat;
}
