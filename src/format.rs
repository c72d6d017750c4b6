//! Export format selection.
//!
//! [`OutputFormat`] names the three record export formats and dispatches to
//! the matching writer in [`core::output`](crate::core::output). It carries no
//! CLI dependencies, so library users can pick a format from a file name.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn example() -> chatlens::Result<()> {
//! use chatlens::format::{OutputFormat, write_to_format};
//! use chatlens::core::models::OutputConfig;
//! use chatlens::parser::TranscriptParser;
//!
//! let store = TranscriptParser::new().parse_str("1/1/24, 10:00 AM - Alice: Hi\n");
//!
//! let format = OutputFormat::from_path("records.jsonl")?;
//! write_to_format(&store, "records.jsonl", format, &OutputConfig::new())?;
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::core::models::OutputConfig;
use crate::error::{ChatlensError, Result};
use crate::record::MessageRecord;

/// Record export format.
///
/// - [`Csv`](OutputFormat::Csv) - Semicolon-separated table, opens in spreadsheets
/// - [`Json`](OutputFormat::Json) - Pretty-printed array
/// - [`Jsonl`](OutputFormat::Jsonl) - One JSON object per line
///
/// # Example
///
/// ```rust
/// use chatlens::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("ndjson").unwrap();
/// assert_eq!(format, OutputFormat::Jsonl);
/// assert_eq!(format.extension(), "jsonl");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines, also known as NDJSON
    Jsonl,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
            OutputFormat::Jsonl => "jsonl",
        }
    }

    /// Returns all accepted format names, aliases included.
    pub fn all_names() -> &'static [&'static str] {
        &["csv", "json", "jsonl", "ndjson"]
    }

    /// Detects format from a file path based on its extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatlens::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out.CSV").unwrap(), OutputFormat::Csv);
    /// assert!(OutputFormat::from_path("out.txt").is_err());
    /// ```
    pub fn from_path(path: &str) -> Result<Self> {
        let ext = path.rsplit('.').next().unwrap_or("").to_lowercase();

        match ext.as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(ChatlensError::invalid_format(
                "output",
                format!("Unknown file extension: '.{ext}'. Expected one of: csv, json, jsonl"),
            )),
        }
    }

    fn required_feature(self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv-output",
            OutputFormat::Json | OutputFormat::Jsonl => "json-output",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Jsonl => write!(f, "JSONL"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            "jsonl" | "ndjson" => Ok(OutputFormat::Jsonl),
            _ => Err(format!(
                "Unknown format: '{}'. Expected one of: {}",
                s,
                OutputFormat::all_names().join(", ")
            )),
        }
    }
}

/// Writes records to a file in the given format.
///
/// # Errors
///
/// Returns an error if the format's feature is disabled or the file
/// cannot be written.
#[allow(unused_variables)]
pub fn write_to_format<'a, I>(
    records: I,
    path: &str,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<()>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::write_csv(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(records, path, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::write_jsonl(records, path, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

/// Converts records to a string in the given format.
///
/// ```rust
/// # #[cfg(feature = "csv-output")]
/// # fn example() -> chatlens::Result<()> {
/// use chatlens::format::{OutputFormat, to_format_string};
/// use chatlens::core::models::OutputConfig;
/// use chatlens::MessageRecord;
///
/// let records = vec![MessageRecord::new("Alice", "Hello!")];
/// let csv = to_format_string(&records, OutputFormat::Csv, &OutputConfig::new())?;
/// assert_eq!(csv, "Author;Content\nAlice;Hello!\n");
/// # Ok(())
/// # }
/// ```
#[allow(unused_variables)]
pub fn to_format_string<'a, I>(records: I, format: OutputFormat, config: &OutputConfig) -> Result<String>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    match format {
        #[cfg(feature = "csv-output")]
        OutputFormat::Csv => crate::core::output::to_csv(records, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(records, config),
        #[cfg(feature = "json-output")]
        OutputFormat::Jsonl => crate::core::output::to_jsonl(records, config),
        #[allow(unreachable_patterns)]
        _ => Err(feature_disabled(format)),
    }
}

#[allow(dead_code)]
fn feature_disabled(format: OutputFormat) -> ChatlensError {
    ChatlensError::invalid_format(
        "output",
        format!(
            "Output format {format:?} requires the '{}' feature to be enabled",
            format.required_feature()
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("csv").unwrap(), OutputFormat::Csv);
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("ndjson").unwrap(), OutputFormat::Jsonl);
        assert!(OutputFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path("a/b.json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path("b.ndjson").unwrap(), OutputFormat::Jsonl);

        let err = OutputFormat::from_path("records.txt").unwrap_err();
        assert!(err.is_invalid_format());
        assert!(err.to_string().contains(".txt"));
    }

    #[test]
    fn test_format_metadata() {
        assert_eq!(OutputFormat::default(), OutputFormat::Csv);
        assert_eq!(OutputFormat::Jsonl.to_string(), "JSONL");
        assert_eq!(OutputFormat::Jsonl.extension(), "jsonl");
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&OutputFormat::Jsonl).unwrap();
        assert_eq!(json, "\"jsonl\"");

        let parsed: OutputFormat = serde_json::from_str("\"csv\"").unwrap();
        assert_eq!(parsed, OutputFormat::Csv);
    }

    #[cfg(all(feature = "csv-output", feature = "json-output"))]
    #[test]
    fn test_to_format_string_dispatch() {
        let records = vec![MessageRecord::new("Alice", "Hi")];
        let config = OutputConfig::new();

        let csv = to_format_string(&records, OutputFormat::Csv, &config).unwrap();
        assert!(csv.starts_with("Author;Content"));

        let jsonl = to_format_string(&records, OutputFormat::Jsonl, &config).unwrap();
        assert_eq!(jsonl.trim(), r#"{"author":"Alice","content":"Hi"}"#);

        let json = to_format_string(&records, OutputFormat::Json, &config).unwrap();
        assert!(json.starts_with('['));
    }

    #[cfg(feature = "csv-output")]
    #[test]
    fn test_write_to_format_file() {
        let records = vec![MessageRecord::new("Alice", "Hi")];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        write_to_format(&records, path.to_str().unwrap(), OutputFormat::Csv, &OutputConfig::new())
            .unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("Alice;Hi"));
    }
}
