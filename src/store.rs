//! Ordered collection of enriched records.
//!
//! [`RecordStore`] is what the parser hands to everything downstream. It
//! keeps records in transcript order and never filters, sorts or
//! deduplicates them; the query helpers here only read.

use std::collections::BTreeSet;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::filter::OVERALL;
use crate::error::{ChatlensError, Result};
use crate::record::MessageRecord;

/// Records of one transcript, in transcript order.
///
/// # Example
///
/// ```
/// use chatlens::parser::parse_transcript;
/// use chatlens::config::ParseConfig;
///
/// let store = parse_transcript(
///     "1/1/24, 10:00 AM - Bob: Hi\n1/1/24, 10:01 AM - Alice: Hey\n1/1/24, 10:02 AM - Bob left\n",
///     &ParseConfig::default(),
/// );
///
/// assert_eq!(store.len(), 3);
/// assert_eq!(store.users(), vec!["Alice", "Bob"]);
/// assert_eq!(store.user_options(), vec!["Overall", "Alice", "Bob"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordStore {
    records: Vec<MessageRecord>,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<MessageRecord> {
        self.records
    }

    /// Fails with [`ChatlensError::NoMessages`] when the store is empty.
    ///
    /// An empty store means the transcript had no recognizable message
    /// header, which callers usually report as "no usable data".
    pub fn require_records(&self, path: Option<PathBuf>) -> Result<&Self> {
        if self.is_empty() {
            return Err(ChatlensError::no_messages(path));
        }
        Ok(self)
    }

    /// Distinct authors, sorted, without the notification sender.
    pub fn users(&self) -> Vec<&str> {
        self.records
            .iter()
            .filter(|r| !r.is_notification())
            .map(|r| r.author.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// [`users`](Self::users) with the "Overall" marker prepended.
    pub fn user_options(&self) -> Vec<&str> {
        let users = self.users();
        let mut options = Vec::with_capacity(users.len() + 1);
        options.push(OVERALL);
        options.extend(users);
        options
    }

    /// Earliest and latest date among records with a timestamp.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.records.iter().filter_map(MessageRecord::date);
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }

    /// Number of records whose timestamp failed to parse.
    pub fn unparsed_count(&self) -> usize {
        self.records.iter().filter(|r| !r.has_timestamp()).count()
    }
}

impl From<Vec<MessageRecord>> for RecordStore {
    fn from(records: Vec<MessageRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<MessageRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = MessageRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RecordStore {
    type Item = MessageRecord;
    type IntoIter = std::vec::IntoIter<MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalendarLocale;
    use crate::parsing::calendar_fields;

    fn dated(author: &str, y: i32, m: u32, d: u32) -> MessageRecord {
        let ts = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        MessageRecord::new(author, "x")
            .with_timestamp(ts)
            .with_calendar(calendar_fields(ts, CalendarLocale::English))
    }

    #[test]
    fn test_users_sorted_without_notifications() {
        let store: RecordStore = vec![
            MessageRecord::new("Zoe", "hi"),
            MessageRecord::notification("Zoe added Adam"),
            MessageRecord::new("Adam", "hey"),
            MessageRecord::new("Zoe", "welcome"),
        ]
        .into();

        assert_eq!(store.users(), vec!["Adam", "Zoe"]);
        assert_eq!(store.user_options(), vec!["Overall", "Adam", "Zoe"]);
    }

    #[test]
    fn test_empty_store() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert!(store.users().is_empty());
        assert_eq!(store.user_options(), vec!["Overall"]);
        assert!(store.date_span().is_none());
        assert!(store.require_records(None).unwrap_err().is_no_messages());
    }

    #[test]
    fn test_date_span_ignores_undated() {
        let store: RecordStore = vec![
            dated("A", 2024, 3, 1),
            MessageRecord::new("B", "no date"),
            dated("A", 2023, 12, 25),
            dated("B", 2024, 1, 10),
        ]
        .into();

        let (first, last) = store.date_span().unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2023, 12, 25).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(store.unparsed_count(), 1);
    }

    #[test]
    fn test_order_preserved() {
        let store: RecordStore = vec![dated("B", 2024, 3, 1), dated("A", 2023, 1, 1)]
            .into_iter()
            .collect();
        let authors: Vec<_> = store.iter().map(|r| r.author()).collect();
        assert_eq!(authors, vec!["B", "A"]);
    }
}
