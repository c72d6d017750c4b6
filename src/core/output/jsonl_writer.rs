//! JSON Lines (JSONL) output writer.
//!
//! One record per line, suitable for line-oriented tools and for
//! loading into dataframe libraries without holding the whole array.

use std::fs::File;
use std::io::{BufWriter, Write};

use super::JsonRecord;
use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::record::MessageRecord;

/// Writes records to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"author":"Alice","content":"Hello"}
/// {"author":"Bob","content":"Hi"}
/// ```
pub fn write_jsonl<'a, I>(records: I, output_path: &str, config: &OutputConfig) -> Result<()>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(records, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
///
/// Same format as `write_jsonl`, but returns a String instead of writing to file.
pub fn to_jsonl<'a, I>(records: I, config: &OutputConfig) -> Result<String>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut buffer = Vec::new();
    write_lines(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<'a, I, W>(records: I, writer: &mut W, config: &OutputConfig) -> Result<()>
where
    I: IntoIterator<Item = &'a MessageRecord>,
    W: Write,
{
    for record in records {
        let line = serde_json::to_string(&JsonRecord::from_record(record, config))?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}
