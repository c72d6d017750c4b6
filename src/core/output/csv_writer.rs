//! CSV output writer.

use std::fs::File;
use std::io::Write;

use super::TIMESTAMP_FORMAT;
use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::record::MessageRecord;

const CALENDAR_COLUMNS: [&str; 9] = [
    "Date", "Year", "Month", "MonthName", "Day", "Weekday", "Hour", "Minute", "Period",
];

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: Depends on OutputConfig
///   - Basic: `Author`, `Content`
///   - With timestamps: `Timestamp`, `Author`, `Content`
///   - With calendar: ..., `Date`, `Year`, `Month`, `MonthName`, `Day`,
///     `Weekday`, `Hour`, `Minute`, `Period`
/// - Records without a timestamp leave those columns empty
pub fn write_csv<'a, I>(records: I, output_path: &str, config: &OutputConfig) -> Result<()>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let file = File::create(output_path)?;
    write_to(records, file, config)
}

/// Converts records to a CSV string.
///
/// Same format as `write_csv`, but returns a String instead of writing to file.
pub fn to_csv<'a, I>(records: I, config: &OutputConfig) -> Result<String>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut buffer = Vec::new();
    write_to(records, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_to<'a, I, W>(records: I, sink: W, config: &OutputConfig) -> Result<()>
where
    I: IntoIterator<Item = &'a MessageRecord>,
    W: Write,
{
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_writer(sink);

    writer.write_record(build_header(config))?;
    for record in records {
        writer.write_record(build_record(record, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::new();

    if config.include_timestamps {
        header.push("Timestamp");
    }

    header.push("Author");
    header.push("Content");

    if config.include_calendar {
        header.extend(CALENDAR_COLUMNS);
    }

    header
}

/// Build CSV row for a single record.
fn build_record(record: &MessageRecord, config: &OutputConfig) -> Vec<String> {
    let mut row = Vec::new();

    if config.include_timestamps {
        row.push(
            record
                .timestamp
                .map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_default(),
        );
    }

    row.push(record.author.clone());
    row.push(record.content.clone());

    if config.include_calendar {
        match &record.calendar {
            Some(cal) => row.extend([
                cal.date.to_string(),
                cal.year.to_string(),
                cal.month_number.to_string(),
                cal.month_name.clone(),
                cal.day_of_month.to_string(),
                cal.weekday_name.clone(),
                cal.hour.to_string(),
                cal.minute.to_string(),
                cal.hour_bucket.clone(),
            ]),
            None => row.extend(std::iter::repeat_n(String::new(), CALENDAR_COLUMNS.len())),
        }
    }

    row
}
