//! Turns raw segments into message records.
//!
//! Two independent steps: the header is parsed into a [`NaiveDateTime`],
//! and the body is split into author and content.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use super::tokenizer::RawSegment;
use crate::record::{MessageRecord, NOTIFICATION_SENDER};

/// Header components: day, month, year, hour, minute, meridiem.
static HEADER_PARTS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2,4}),\s(\d{1,2}):(\d{2})\s([APap][mM])\s-\s$")
        .expect("header parts pattern is valid")
});

/// `Author: ` prefix. Shortest run of any characters (newlines included)
/// followed by a colon and one whitespace character.
static AUTHOR_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(.+?):\s").expect("author prefix pattern is valid"));

/// Parses a message header such as `"1/1/24, 10:00 AM - "`.
///
/// Dates are day-first. A two-digit year follows chrono's `%y` rule
/// (00-69 is 20xx, 70-99 is 19xx); a three-digit year is rejected. Returns
/// `None` for anything that is not a real calendar instant on a 12-hour
/// clock, e.g. `"31/2/24, 10:00 AM - "` or `"1/1/24, 13:00 PM - "`.
///
/// # Example
///
/// ```
/// use chatlens::parsing::parse_timestamp;
/// use chrono::NaiveDate;
///
/// let ts = parse_timestamp("1/2/24, 12:30 AM - ").unwrap();
/// assert_eq!(ts, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(0, 30, 0).unwrap());
/// ```
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let caps = HEADER_PARTS_RE.captures(raw)?;
    let (day, month, year) = (&caps[1], &caps[2], &caps[3]);
    let (hour, minute, meridiem) = (&caps[4], &caps[5], &caps[6]);

    let parse_format = match year.len() {
        2 => "%d/%m/%y, %I:%M %p",
        4 => "%d/%m/%Y, %I:%M %p",
        _ => return None,
    };

    // Rebuild with plain spaces; exports may use U+202F before the meridiem.
    let canonical = format!("{day}/{month}/{year}, {hour}:{minute} {meridiem}");
    NaiveDateTime::parse_from_str(&canonical, parse_format).ok()
}

/// Splits a message body into `(author, content)`.
///
/// The author is everything before the first colon followed by whitespace,
/// trimmed; the content is everything after that colon and the single
/// whitespace character. Returns `None` when the body has no such prefix
/// or the name before the colon is blank, which is how group notifications
/// look.
///
/// A notification that itself contains `": "` (e.g. a subject change to
/// `"Trip: day 1"`) is split as if it were authored. Callers must not rely
/// on this function to tell the two apart perfectly.
///
/// # Example
///
/// ```
/// use chatlens::parsing::split_author;
///
/// assert_eq!(split_author("Alice: hello there"), Some(("Alice", "hello there")));
/// assert_eq!(split_author("Alice added Bob"), None);
/// ```
pub fn split_author(body: &str) -> Option<(&str, &str)> {
    let caps = AUTHOR_PREFIX_RE.captures(body)?;
    let prefix = caps.get(0)?;
    let author = caps.get(1)?.as_str().trim();
    if author.is_empty() {
        return None;
    }
    Some((author, &body[prefix.end()..]))
}

/// Builds a record from a segment. Calendar fields are left empty.
pub fn normalize(segment: RawSegment<'_>) -> MessageRecord {
    let timestamp = parse_timestamp(segment.timestamp);
    if timestamp.is_none() {
        tracing::debug!(header = segment.timestamp, "unparseable message timestamp");
    }

    let (author, content) =
        split_author(segment.body).unwrap_or((NOTIFICATION_SENDER, segment.body));

    MessageRecord {
        timestamp,
        author: author.to_string(),
        content: content.to_string(),
        calendar: None,
    }
}
