//! Record writers.
//!
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line - requires `json-output` feature
//!
//! All writers take any iterator of `&MessageRecord`, so they accept a
//! whole [`RecordStore`](crate::RecordStore) as well as a filtered selection.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::core::output::{write_csv, write_jsonl, to_json};
//! use chatlens::core::models::OutputConfig;
//! use chatlens::parser::TranscriptParser;
//!
//! let store = TranscriptParser::new().parse_str("1/1/24, 10:00 AM - Alice: Hi\n");
//! let config = OutputConfig::new().with_timestamps().with_calendar();
//!
//! write_csv(&store, "records.csv", &config)?;
//! write_jsonl(&store, "records.jsonl", &config)?;
//! let json = to_json(&store, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

#[cfg(feature = "json-output")]
use serde::Serialize;

#[cfg(feature = "json-output")]
use crate::core::models::OutputConfig;
#[cfg(feature = "json-output")]
use crate::record::{CalendarFields, MessageRecord};

#[cfg(any(feature = "csv-output", feature = "json-output"))]
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Record shape shared by the JSON writers.
/// Only includes fields enabled in `OutputConfig`.
#[cfg(feature = "json-output")]
#[derive(Serialize)]
struct JsonRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp: Option<String>,
    author: &'a str,
    content: &'a str,
    #[serde(flatten)]
    calendar: Option<&'a CalendarFields>,
}

#[cfg(feature = "json-output")]
impl<'a> JsonRecord<'a> {
    fn from_record(record: &'a MessageRecord, config: &OutputConfig) -> Self {
        Self {
            timestamp: if config.include_timestamps {
                record
                    .timestamp
                    .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
            } else {
                None
            },
            author: &record.author,
            content: &record.content,
            calendar: if config.include_calendar {
                record.calendar.as_ref()
            } else {
                None
            },
        }
    }
}
