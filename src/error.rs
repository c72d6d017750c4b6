//! Unified error types for chatlens.
//!
//! This module provides a single [`ChatlensError`] enum that covers every
//! failure the library can report.
//!
//! # What is *not* an error
//!
//! A malformed row never aborts a parse. A timestamp that fails to parse
//! yields a record whose `timestamp` is `None`, and a body without an
//! `Author: ` prefix becomes a group notification. Errors are reserved for
//! conditions the caller has to act on:
//!
//! - the transcript could not be read ([`Io`](ChatlensError::Io), [`Utf8`](ChatlensError::Utf8))
//! - the transcript yielded no records at all ([`NoMessages`](ChatlensError::NoMessages))
//! - a filter matched nothing ([`EmptySelection`](ChatlensError::EmptySelection))
//! - user-supplied configuration was invalid ([`InvalidDate`](ChatlensError::InvalidDate),
//!   [`InvalidFormat`](ChatlensError::InvalidFormat))

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
///
/// # Example
///
/// ```rust
/// use chatlens::error::Result;
/// use chatlens::MessageRecord;
///
/// fn my_function() -> Result<Vec<MessageRecord>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The input is not valid UTF-8.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// The transcript contained no recognizable timestamped message.
    ///
    /// Distinct from a parse failure: the text was read fine, it just holds
    /// no usable data.
    #[error("No messages found{}", .path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default())]
    NoMessages {
        /// The file path, if available
        path: Option<PathBuf>,
    },

    /// The requested date range or user matched no records.
    #[error("No data available for {selection}")]
    EmptySelection {
        /// Human-readable description of the selection
        selection: String,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A value did not match the expected structure.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<std::string::FromUtf8Error> for ChatlensError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatlensError {
    /// Creates a UTF-8 error with context.
    pub fn utf8(context: impl Into<String>, source: std::string::FromUtf8Error) -> Self {
        ChatlensError::Utf8 {
            context: context.into(),
            source,
        }
    }

    /// Creates a "no messages" error.
    pub fn no_messages(path: Option<PathBuf>) -> Self {
        ChatlensError::NoMessages { path }
    }

    /// Creates an empty selection error.
    pub fn empty_selection(selection: impl Into<String>) -> Self {
        ChatlensError::EmptySelection {
            selection: selection.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatlensError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatlensError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if the transcript held no usable data.
    pub fn is_no_messages(&self) -> bool {
        matches!(self, ChatlensError::NoMessages { .. })
    }

    /// Returns `true` if a filter selection came back empty.
    pub fn is_empty_selection(&self) -> bool {
        matches!(self, ChatlensError::EmptySelection { .. })
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, ChatlensError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatlensError::InvalidDate { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = ChatlensError::from(io_err);
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("file not found"));
    }

    #[test]
    fn test_no_messages_display() {
        let err = ChatlensError::no_messages(None);
        assert_eq!(err.to_string(), "No messages found");

        let err = ChatlensError::no_messages(Some(PathBuf::from("/tmp/chat.txt")));
        assert!(err.to_string().contains("/tmp/chat.txt"));
    }

    #[test]
    fn test_empty_selection_display() {
        let err = ChatlensError::empty_selection("the selected date range");
        assert_eq!(
            err.to_string(),
            "No data available for the selected date range"
        );
    }

    #[test]
    fn test_invalid_date_display() {
        let err = ChatlensError::invalid_date("not-a-date");
        let display = err.to_string();
        assert!(display.contains("not-a-date"));
        assert!(display.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = ChatlensError::invalid_format("output", "unknown extension");
        let display = err.to_string();
        assert!(display.contains("output"));
        assert!(display.contains("unknown extension"));
    }

    #[test]
    fn test_utf8_error_display() {
        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let err = ChatlensError::utf8("reading transcript", utf8_err);
        let display = err.to_string();
        assert!(display.contains("UTF-8"));
        assert!(display.contains("reading transcript"));
    }

    #[test]
    fn test_from_utf8_error() {
        let utf8_err = String::from_utf8(vec![0xff]).unwrap_err();
        let err: ChatlensError = utf8_err.into();
        assert!(err.to_string().contains("output conversion"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = ChatlensError::from(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_is_methods() {
        let io_err = ChatlensError::Io(io::Error::new(io::ErrorKind::NotFound, ""));
        assert!(io_err.is_io());
        assert!(!io_err.is_no_messages());
        assert!(!io_err.is_invalid_date());

        let empty = ChatlensError::no_messages(None);
        assert!(empty.is_no_messages());
        assert!(!empty.is_empty_selection());

        let selection = ChatlensError::empty_selection("Alice");
        assert!(selection.is_empty_selection());
        assert!(!selection.is_invalid_format());

        let date_err = ChatlensError::invalid_date("bad");
        assert!(date_err.is_invalid_date());
        assert!(!date_err.is_io());
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: ChatlensError = json_err.into();
        assert!(err.to_string().contains("JSON error"));
    }

    #[cfg(feature = "csv-output")]
    #[test]
    fn test_from_csv_error() {
        let csv_err = csv::Error::from(io::Error::other("test"));
        let err: ChatlensError = csv_err.into();
        assert!(err.to_string().contains("CSV error"));
    }
}
