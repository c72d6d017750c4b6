//! Enriched message record, the unit of the record store.
//!
//! Every timestamped entry of a transcript becomes one [`MessageRecord`]:
//! who wrote it, what they wrote, when, and a set of [`CalendarFields`]
//! derived from that instant for the aggregation layer.
//!
//! # Examples
//!
//! ```
//! use chatlens::MessageRecord;
//!
//! let record = MessageRecord::new("Alice", "Hello!");
//! assert_eq!(record.author(), "Alice");
//! assert!(!record.is_notification());
//! assert!(record.calendar().is_none());
//! ```
//!
//! ## Serialization
//!
//! Calendar fields are flattened into the record and omitted when the
//! timestamp could not be parsed.
//!
//! ```
//! use chatlens::MessageRecord;
//!
//! let record = MessageRecord::notification("Alice added Bob");
//! let json = serde_json::to_string(&record)?;
//! assert!(json.contains("group_notification"));
//! assert!(!json.contains("hour_bucket"));
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Author value given to entries that carry no `Author: ` prefix
/// (joins, leaves, subject changes, encryption notices).
pub const NOTIFICATION_SENDER: &str = "group_notification";

/// Calendar fields derived from a record's timestamp.
///
/// All fields are functions of the timestamp alone; see
/// [`enrich`](crate::parsing::enrich) for how they are computed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarFields {
    /// Calendar date of the message.
    pub date: NaiveDate,
    pub year: i32,
    /// Month number, 1 through 12.
    pub month_number: u32,
    /// Full month name in the configured locale.
    pub month_name: String,
    pub day_of_month: u32,
    /// Full weekday name in the configured locale.
    pub weekday_name: String,
    /// Hour on a 24-hour clock.
    pub hour: u32,
    pub minute: u32,
    /// One-hour heatmap bucket label, e.g. `"5-6"`, `"00-1"`, `"23-00"`.
    pub hour_bucket: String,
}

/// A parsed, enriched transcript entry.
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | `timestamp` | `Option<NaiveDateTime>` | `None` when the source timestamp failed to parse |
/// | `author` | `String` | Author name, or [`NOTIFICATION_SENDER`] |
/// | `content` | `String` | Message text without the author prefix |
/// | `calendar` | `Option<CalendarFields>` | Present iff `timestamp` is present |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// When the message was sent, as written in the transcript.
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,

    /// Author name, or [`NOTIFICATION_SENDER`] for system entries.
    pub author: String,

    /// Message text. May contain newlines for multi-line messages.
    pub content: String,

    /// Derived calendar fields.
    #[serde(flatten)]
    pub calendar: Option<CalendarFields>,
}

impl MessageRecord {
    /// Creates a record with no timestamp and no calendar fields.
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            timestamp: None,
            author: author.into(),
            content: content.into(),
            calendar: None,
        }
    }

    /// Creates a group notification record.
    pub fn notification(content: impl Into<String>) -> Self {
        Self::new(NOTIFICATION_SENDER, content)
    }

    /// Sets the timestamp. Calendar fields are left untouched.
    #[must_use]
    pub fn with_timestamp(mut self, ts: NaiveDateTime) -> Self {
        self.timestamp = Some(ts);
        self
    }

    /// Sets the calendar fields.
    #[must_use]
    pub fn with_calendar(mut self, calendar: CalendarFields) -> Self {
        self.calendar = Some(calendar);
        self
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        self.timestamp
    }

    pub fn calendar(&self) -> Option<&CalendarFields> {
        self.calendar.as_ref()
    }

    /// Returns the calendar date, if the timestamp parsed.
    pub fn date(&self) -> Option<NaiveDate> {
        self.timestamp.map(|ts| ts.date())
    }

    /// Returns `true` if this entry has no human author.
    pub fn is_notification(&self) -> bool {
        self.author == NOTIFICATION_SENDER
    }

    /// Returns `true` if the source timestamp parsed.
    pub fn has_timestamp(&self) -> bool {
        self.timestamp.is_some()
    }
}
