//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParseConfig`] - how the transcript is turned into records
//! - [`CalendarLocale`] - language of month and weekday names
//! - [`StatsConfig`] - knobs for the aggregation layer
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{CalendarLocale, ParseConfig, StatsConfig};
//!
//! let parse = ParseConfig::new().with_locale(CalendarLocale::English);
//!
//! let stats = StatsConfig::new()
//!     .with_top_words(10)
//!     .with_stop_words_from_str("the a an\nis");
//! assert!(stats.is_stop_word("the"));
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{ChatlensError, Result};

/// Placeholder WhatsApp writes instead of an attachment when media is
/// excluded from the export.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

const ENGLISH_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const ENGLISH_WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const RUSSIAN_MONTHS: [&str; 12] = [
    "Январь",
    "Февраль",
    "Март",
    "Апрель",
    "Май",
    "Июнь",
    "Июль",
    "Август",
    "Сентябрь",
    "Октябрь",
    "Ноябрь",
    "Декабрь",
];

const RUSSIAN_WEEKDAYS: [&str; 7] = [
    "Понедельник",
    "Вторник",
    "Среда",
    "Четверг",
    "Пятница",
    "Суббота",
    "Воскресенье",
];

/// Language used for `month_name` and `weekday_name` on enriched records.
///
/// Passed explicitly through [`ParseConfig`]; nothing reads the process
/// locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarLocale {
    /// Full English names ("January", "Monday")
    #[default]
    English,
    /// Full Russian names, nominative case ("Январь", "Понедельник")
    #[serde(alias = "ru")]
    Russian,
}

impl CalendarLocale {
    /// Returns the full name of a month numbered 1 through 12.
    ///
    /// Out-of-range numbers yield an empty string.
    pub fn month_name(self, month: u32) -> &'static str {
        let table = match self {
            CalendarLocale::English => &ENGLISH_MONTHS,
            CalendarLocale::Russian => &RUSSIAN_MONTHS,
        };
        month
            .checked_sub(1)
            .and_then(|i| table.get(i as usize))
            .copied()
            .unwrap_or("")
    }

    /// Returns the full name of a weekday.
    pub fn weekday_name(self, weekday: Weekday) -> &'static str {
        let table = match self {
            CalendarLocale::English => &ENGLISH_WEEKDAYS,
            CalendarLocale::Russian => &RUSSIAN_WEEKDAYS,
        };
        table[weekday.num_days_from_monday() as usize]
    }

    /// Returns all supported locale names.
    pub fn all_names() -> &'static [&'static str] {
        &["english", "en", "russian", "ru"]
    }
}

impl std::fmt::Display for CalendarLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalendarLocale::English => write!(f, "English"),
            CalendarLocale::Russian => write!(f, "Russian"),
        }
    }
}

impl std::str::FromStr for CalendarLocale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(CalendarLocale::English),
            "russian" | "ru" => Ok(CalendarLocale::Russian),
            _ => Err(format!(
                "Unknown locale: '{}'. Expected one of: {}",
                s,
                CalendarLocale::all_names().join(", ")
            )),
        }
    }
}

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::{CalendarLocale, ParseConfig};
///
/// let config = ParseConfig::new().with_locale(CalendarLocale::Russian);
/// assert_eq!(config.locale, CalendarLocale::Russian);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseConfig {
    /// Language of derived month/weekday names (default: English)
    #[serde(default)]
    pub locale: CalendarLocale,
}

impl ParseConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the locale for derived calendar names.
    #[must_use]
    pub fn with_locale(mut self, locale: CalendarLocale) -> Self {
        self.locale = locale;
        self
    }
}

/// Configuration for the aggregation layer.
///
/// # Example
///
/// ```rust
/// use chatlens::config::StatsConfig;
///
/// let config = StatsConfig::new()
///     .with_top_users(3)
///     .with_stop_words(["hai", "hi"]);
///
/// assert_eq!(config.top_users, 3);
/// assert!(config.is_stop_word("HI"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Content that marks a media message (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Lower-cased words excluded from the word-frequency table
    pub stop_words: BTreeSet<String>,

    /// Size of the word-frequency table (default: 20)
    pub top_words: usize,

    /// Number of authors in the busiest-users ranking (default: 5)
    pub top_users: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            media_placeholder: MEDIA_OMITTED.to_string(),
            stop_words: BTreeSet::new(),
            top_words: 20,
            top_users: 5,
        }
    }
}

impl StatsConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the media placeholder string.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Adds stop words. Words are lower-cased.
    #[must_use]
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Adds stop words from a whitespace-separated list.
    #[must_use]
    pub fn with_stop_words_from_str(self, list: &str) -> Self {
        self.with_stop_words(list.split_whitespace())
    }

    /// Adds stop words read from a file (whitespace or newline separated).
    pub fn load_stop_words(self, path: &Path) -> Result<Self> {
        let bytes = fs::read(path)?;
        let list = String::from_utf8(bytes)
            .map_err(|e| ChatlensError::utf8(format!("stop word list {}", path.display()), e))?;
        Ok(self.with_stop_words_from_str(&list))
    }

    /// Sets the size of the word-frequency table.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the number of authors in the busiest-users ranking.
    #[must_use]
    pub fn with_top_users(mut self, n: usize) -> Self {
        self.top_users = n;
        self
    }

    /// Returns `true` if `word` is a stop word (case-insensitive).
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults.
    #[cfg(feature = "json-output")]
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let mut config: Self = serde_json::from_str(&raw)?;
        config.stop_words = config.stop_words.iter().map(|w| w.to_lowercase()).collect();
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(CalendarLocale::English.month_name(1), "January");
        assert_eq!(CalendarLocale::English.month_name(12), "December");
        assert_eq!(CalendarLocale::Russian.month_name(3), "Март");
        assert_eq!(CalendarLocale::English.month_name(0), "");
        assert_eq!(CalendarLocale::English.month_name(13), "");
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(CalendarLocale::English.weekday_name(Weekday::Mon), "Monday");
        assert_eq!(CalendarLocale::English.weekday_name(Weekday::Sun), "Sunday");
        assert_eq!(
            CalendarLocale::Russian.weekday_name(Weekday::Fri),
            "Пятница"
        );
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!(
            "english".parse::<CalendarLocale>().unwrap(),
            CalendarLocale::English
        );
        assert_eq!(
            "RU".parse::<CalendarLocale>().unwrap(),
            CalendarLocale::Russian
        );
        assert!("klingon".parse::<CalendarLocale>().is_err());
    }

    #[test]
    fn test_stats_defaults() {
        let config = StatsConfig::default();
        assert_eq!(config.media_placeholder, "<Media omitted>");
        assert_eq!(config.top_words, 20);
        assert_eq!(config.top_users, 5);
        assert!(config.stop_words.is_empty());
    }

    #[test]
    fn test_stop_words_lowercased() {
        let config = StatsConfig::new().with_stop_words_from_str("The\nAND  hai");
        assert_eq!(config.stop_words.len(), 3);
        assert!(config.is_stop_word("the"));
        assert!(config.is_stop_word("And"));
        assert!(!config.is_stop_word("hello"));
    }

    #[test]
    fn test_load_stop_words() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "hai\nhe\nto\n").unwrap();

        let config = StatsConfig::new().load_stop_words(file.path()).unwrap();
        assert!(config.is_stop_word("he"));
        assert_eq!(config.stop_words.len(), 3);
    }

    #[test]
    fn test_load_stop_words_missing_file() {
        let result = StatsConfig::new().load_stop_words(Path::new("/nonexistent/stop.txt"));
        assert!(result.unwrap_err().is_io());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_file_partial() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), r#"{"top_words": 5, "stop_words": ["The"]}"#).unwrap();

        let config = StatsConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.top_words, 5);
        assert_eq!(config.top_users, 5);
        assert!(config.is_stop_word("the"));
        assert_eq!(config.media_placeholder, MEDIA_OMITTED);
    }

    #[test]
    fn test_parse_config_serde() {
        let json = serde_json::to_string(&ParseConfig::new()).unwrap();
        assert_eq!(json, r#"{"locale":"english"}"#);

        let parsed: ParseConfig = serde_json::from_str(r#"{"locale":"ru"}"#).unwrap();
        assert_eq!(parsed.locale, CalendarLocale::Russian);
    }
}
