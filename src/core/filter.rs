//! Filter records by date range and author.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for selecting records from a store.
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Records on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Records on or before date |
//! | Author | [`with_user`](FilterConfig::with_user) | Records by one author |
//!
//! # Examples
//!
//! ```
//! use chatlens::core::filter::{FilterConfig, apply_filters};
//! use chatlens::parser::TranscriptParser;
//!
//! # fn main() -> chatlens::Result<()> {
//! let store = TranscriptParser::new().parse_str(
//!     "1/1/24, 10:00 AM - Alice: Old\n15/6/24, 9:00 PM - Alice: New\n15/6/24, 9:01 PM - Bob: Hi\n",
//! );
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?
//!     .with_user("Alice");
//!
//! let selected = apply_filters(store.records(), &config);
//! assert_eq!(selected.len(), 1);
//! assert_eq!(selected[0].content, "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Date bounds are inclusive and compare calendar dates only
//! - Records without a timestamp are **excluded** when a date bound is active
//! - A start date after the end date selects nothing; it is not an error
//! - Author matching is exact

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ChatlensError;
use crate::record::MessageRecord;

/// Marker that selects every author.
pub const OVERALL: &str = "Overall";

/// Which authors a selection covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserSelection {
    /// All records, notifications included.
    #[default]
    Overall,
    /// Records whose author equals this value exactly.
    Author(String),
}

impl UserSelection {
    /// Parses a user option as listed by
    /// [`RecordStore::user_options`](crate::store::RecordStore::user_options).
    ///
    /// ```
    /// use chatlens::core::filter::UserSelection;
    ///
    /// assert_eq!(UserSelection::from_option("Overall"), UserSelection::Overall);
    /// assert_eq!(
    ///     UserSelection::from_option("Alice"),
    ///     UserSelection::Author("Alice".into())
    /// );
    /// ```
    pub fn from_option(option: &str) -> Self {
        if option == OVERALL {
            UserSelection::Overall
        } else {
            UserSelection::Author(option.to_string())
        }
    }

    /// Returns `true` if `record` belongs to this selection.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        match self {
            UserSelection::Overall => true,
            UserSelection::Author(name) => record.author == *name,
        }
    }

    pub fn is_overall(&self) -> bool {
        matches!(self, UserSelection::Overall)
    }
}

impl std::fmt::Display for UserSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserSelection::Overall => f.write_str(OVERALL),
            UserSelection::Author(name) => f.write_str(name),
        }
    }
}

/// Configuration for filtering records by date and author.
///
/// Filters are combined with AND logic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only records on or after this date.
    pub after: Option<NaiveDate>,

    /// Include only records on or before this date.
    pub before: Option<NaiveDate>,

    /// Author selection.
    pub user: UserSelection,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all records pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date (inclusive). Format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        self.after = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date (inclusive). Format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        self.before = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets both date bounds from already parsed dates.
    #[must_use]
    pub fn with_dates(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.after = Some(start);
        self.before = Some(end);
        self
    }

    /// Restricts the selection to one author, or to everyone when `user`
    /// is the [`OVERALL`] marker.
    #[must_use]
    pub fn with_user(mut self, user: &str) -> Self {
        self.user = UserSelection::from_option(user);
        self
    }

    /// Sets the author selection directly.
    #[must_use]
    pub fn with_selection(mut self, user: UserSelection) -> Self {
        self.user = user;
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.has_user_filter()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if a specific author is selected.
    pub fn has_user_filter(&self) -> bool {
        !self.user.is_overall()
    }

    /// Returns `true` if `record` passes every active filter.
    pub fn matches(&self, record: &MessageRecord) -> bool {
        if !self.user.matches(record) {
            return false;
        }

        if self.has_date_filter() {
            let Some(date) = record.date() else {
                return false;
            };
            if self.after.is_some_and(|after| date < after) {
                return false;
            }
            if self.before.is_some_and(|before| date > before) {
                return false;
            }
        }

        true
    }

    /// Describes the active filters for empty-state messages.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        match (self.after, self.before) {
            (Some(a), Some(b)) => parts.push(format!("dates {a} to {b}")),
            (Some(a), None) => parts.push(format!("dates from {a}")),
            (None, Some(b)) => parts.push(format!("dates up to {b}")),
            (None, None) => {}
        }
        if let UserSelection::Author(name) = &self.user {
            parts.push(format!("user '{name}'"));
        }
        if parts.is_empty() {
            "the selected data".to_string()
        } else {
            parts.join(" and ")
        }
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate, ChatlensError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Selects the records matching `config`, preserving order.
///
/// # Examples
///
/// ```
/// use chatlens::core::filter::{FilterConfig, apply_filters};
/// use chatlens::MessageRecord;
///
/// let records = vec![
///     MessageRecord::new("Alice", "Hello"),
///     MessageRecord::new("Bob", "Hi"),
///     MessageRecord::new("Alice", "Goodbye"),
/// ];
///
/// let selected = apply_filters(&records, &FilterConfig::new().with_user("Alice"));
/// assert_eq!(selected.len(), 2);
/// ```
pub fn apply_filters<'a>(
    records: &'a [MessageRecord],
    config: &FilterConfig,
) -> Vec<&'a MessageRecord> {
    records.iter().filter(|r| config.matches(r)).collect()
}
