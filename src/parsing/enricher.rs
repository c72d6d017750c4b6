//! Derives calendar fields from a record's timestamp.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::config::CalendarLocale;
use crate::record::{CalendarFields, MessageRecord};

/// Returns the heatmap bucket label for an hour of the day.
///
/// The label is the literal `"{hour}-{hour + 1}"` without zero padding,
/// except at the two ends of the day: hour 0 is `"00-1"` and hour 23 wraps
/// to `"23-00"`.
///
/// ```
/// use chatlens::parsing::hour_bucket;
///
/// assert_eq!(hour_bucket(0), "00-1");
/// assert_eq!(hour_bucket(5), "5-6");
/// assert_eq!(hour_bucket(23), "23-00");
/// ```
pub fn hour_bucket(hour: u32) -> String {
    match hour {
        23 => "23-00".to_string(),
        0 => "00-1".to_string(),
        h => format!("{}-{}", h, h + 1),
    }
}

/// Computes every calendar field of `ts`.
pub fn calendar_fields(ts: NaiveDateTime, locale: CalendarLocale) -> CalendarFields {
    let date = ts.date();
    CalendarFields {
        date,
        year: date.year(),
        month_number: date.month(),
        month_name: locale.month_name(date.month()).to_string(),
        day_of_month: date.day(),
        weekday_name: locale.weekday_name(date.weekday()).to_string(),
        hour: ts.hour(),
        minute: ts.minute(),
        hour_bucket: hour_bucket(ts.hour()),
    }
}

/// Attaches calendar fields to a record.
///
/// A record without a timestamp comes back with `calendar` set to `None`.
pub fn enrich(mut record: MessageRecord, locale: CalendarLocale) -> MessageRecord {
    record.calendar = record.timestamp.map(|ts| calendar_fields(ts, locale));
    record
}
