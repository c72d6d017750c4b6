//! JSON output writer.

use std::fs::File;
use std::io::Write;

use super::JsonRecord;
use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::record::MessageRecord;

/// Writes records to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"author": "Alice", "content": "Hello"},
///   {"author": "Bob", "content": "Hi"}
/// ]
/// ```
pub fn write_json<'a, I>(records: I, output_path: &str, config: &OutputConfig) -> Result<()>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let json = to_json(records, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array.
///
/// Same format as `write_json`, but returns a String instead of writing to file.
pub fn to_json<'a, I>(records: I, config: &OutputConfig) -> Result<String>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let rows: Vec<JsonRecord<'_>> = records
        .into_iter()
        .map(|record| JsonRecord::from_record(record, config))
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TranscriptParser;

    #[test]
    fn test_to_json_basic() {
        let store = TranscriptParser::new().parse_str("1/1/24, 10:00 AM - Alice: Hello\n");
        let json = to_json(&store, &OutputConfig::new()).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["author"], "Alice");
        assert_eq!(value[0]["content"], "Hello");
        assert!(value[0].get("timestamp").is_none());
        assert!(value[0].get("weekday_name").is_none());
    }

    #[test]
    fn test_to_json_with_calendar() {
        let store = TranscriptParser::new().parse_str("1/1/24, 10:00 AM - Alice: Hello\n");
        let config = OutputConfig::new().with_timestamps().with_calendar();
        let json = to_json(&store, &config).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["timestamp"], "2024-01-01 10:00");
        assert_eq!(value[0]["weekday_name"], "Monday");
        assert_eq!(value[0]["hour_bucket"], "10-11");
    }

    #[test]
    fn test_to_json_empty() {
        let json = to_json(&Vec::<MessageRecord>::new(), &OutputConfig::new()).unwrap();
        assert_eq!(json, "[]");
    }

    #[test]
    fn test_write_json_file() {
        let store = TranscriptParser::new().parse_str("1/1/24, 10:00 AM - Alice: Hello\n");
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();

        write_json(&store, path, &OutputConfig::new()).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("\"author\": \"Alice\""));
    }
}
