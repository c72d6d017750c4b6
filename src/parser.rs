//! Transcript parser: raw text in, [`RecordStore`] out.
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::new();
//! let store = parser.parse_str(
//!     "1/1/24, 10:00 AM - Alice: Hi\n\
//!      1/1/24, 10:05 AM - Bob: Hello\n\
//!      1/1/24, 10:06 AM - Alice added Carol\n",
//! );
//!
//! assert_eq!(store.len(), 3);
//! assert!(store.records()[2].is_notification());
//! ```
//!
//! Reading from disk:
//!
//! ```rust,no_run
//! use chatlens::parser::TranscriptParser;
//! use std::path::Path;
//!
//! let store = TranscriptParser::new().parse(Path::new("WhatsApp Chat with Bob.txt"))?;
//! # Ok::<(), chatlens::ChatlensError>(())
//! ```

use std::fs;
use std::path::Path;

use crate::config::ParseConfig;
use crate::error::{ChatlensError, Result};
use crate::parsing::{enrich, normalize, tokenize};
use crate::store::RecordStore;

/// Runs tokenize → normalize → enrich over a whole transcript.
///
/// Never fails: malformed rows become records with `timestamp: None`, and a
/// transcript without any message header yields an empty store. Output
/// depends only on `text` and `config`.
pub fn parse_transcript(text: &str, config: &ParseConfig) -> RecordStore {
    let segments = tokenize(text);
    tracing::debug!(segments = segments.len(), "tokenized transcript");

    let store: RecordStore = segments
        .into_iter()
        .map(normalize)
        .map(|record| enrich(record, config.locale))
        .collect();

    tracing::debug!(
        records = store.len(),
        unparsed = store.unparsed_count(),
        "parsed transcript"
    );
    store
}

/// Parser for WhatsApp TXT exports.
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: ParseConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParseConfig {
        &self.config
    }

    /// Returns the parser name.
    pub fn name(&self) -> &'static str {
        "WhatsApp"
    }

    /// Parses transcript text that is already in memory.
    pub fn parse_str(&self, content: &str) -> RecordStore {
        parse_transcript(content, &self.config)
    }

    /// Reads and parses a transcript file.
    ///
    /// Fails only if the file cannot be read or is not UTF-8.
    pub fn parse(&self, path: &Path) -> Result<RecordStore> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes)
            .map_err(|e| ChatlensError::utf8(format!("transcript {}", path.display()), e))?;
        Ok(self.parse_str(&content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalendarLocale;
    use crate::record::NOTIFICATION_SENDER;
    use chrono::NaiveDate;

    const SCENARIO: &str = "1/1/24, 10:00 AM - Alice: Hi\n1/1/24, 10:05 AM - Bob: Hello\n1/1/24, 10:06 AM - Alice added Carol\n";

    #[test]
    fn test_three_message_scenario() {
        let store = parse_transcript(SCENARIO, &ParseConfig::default());
        let pairs: Vec<_> = store
            .iter()
            .map(|r| (r.author.as_str(), r.content.as_str()))
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("Alice", "Hi"),
                ("Bob", "Hello"),
                (NOTIFICATION_SENDER, "Alice added Carol"),
            ]
        );

        let jan1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(store.iter().all(|r| r.date() == Some(jan1)));
    }

    #[test]
    fn test_no_headers_is_empty_store() {
        let store = parse_transcript("hello\nworld\n", &ParseConfig::default());
        assert!(store.is_empty());
    }

    #[test]
    fn test_deterministic() {
        let parser = TranscriptParser::new();
        assert_eq!(parser.parse_str(SCENARIO), parser.parse_str(SCENARIO));
    }

    #[test]
    fn test_bad_timestamp_kept_without_calendar() {
        let text = "31/2/24, 10:00 AM - Alice: ghost\n1/3/24, 9:00 AM - Bob: real\n";
        let store = parse_transcript(text, &ParseConfig::default());

        assert_eq!(store.len(), 2);
        assert!(store.records()[0].timestamp.is_none());
        assert!(store.records()[0].calendar.is_none());
        assert_eq!(store.records()[0].author, "Alice");
        assert!(store.records()[1].calendar.is_some());
    }

    #[test]
    fn test_locale_passed_through() {
        let parser = TranscriptParser::with_config(
            ParseConfig::new().with_locale(CalendarLocale::Russian),
        );
        let store = parser.parse_str(SCENARIO);
        let fields = store.records()[0].calendar().unwrap();
        assert_eq!(fields.month_name, "Январь");
        assert_eq!(fields.weekday_name, "Понедельник");
    }

    #[test]
    fn test_parse_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), SCENARIO).unwrap();

        let store = TranscriptParser::new().parse(file.path()).unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_parse_file_invalid_utf8() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), [0xff, 0xfe, 0x00]).unwrap();

        let err = TranscriptParser::new().parse(file.path()).unwrap_err();
        assert!(matches!(err, ChatlensError::Utf8 { .. }));
    }

    #[test]
    fn test_parse_missing_file() {
        let err = TranscriptParser::new()
            .parse(Path::new("/nonexistent/chat.txt"))
            .unwrap_err();
        assert!(err.is_io());
    }
}
