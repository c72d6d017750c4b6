//! Splits a transcript into timestamp-delimited segments.
//!
//! A WhatsApp (Android, 12-hour clock) export looks like:
//!
//! ```text
//! 1/1/24, 10:00 AM - Alice: Hi
//! 1/1/24, 10:05 AM - Bob: Hello
//! there
//! 1/1/24, 10:06 AM - Alice added Carol
//! ```
//!
//! Every `D/M/YY, H:MM AM - ` header starts a new segment; everything up to
//! the next header (continuation lines included) is that segment's body.

use std::sync::LazyLock;

use regex::Regex;

/// Message header: `D/M/YY, H:MM AM - `.
///
/// Day and month take 1-2 digits, the year 2-4, the minute exactly 2. `\s`
/// is Unicode-aware, so the narrow no-break space newer exports put before
/// the meridiem matches too.
pub const TIMESTAMP_PATTERN: &str =
    r"\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s[APap][mM]\s-\s";

static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is valid"));

/// One timestamp-delimited chunk of a transcript, before author splitting.
///
/// Both fields borrow from the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSegment<'a> {
    /// The matched header, separator included (`"1/1/24, 10:00 AM - "`).
    pub timestamp: &'a str,
    /// Text between this header and the next one.
    pub body: &'a str,
}

/// Splits `text` into segments, in transcript order.
///
/// Text before the first header is discarded. A transcript without any
/// header yields no segments.
///
/// # Example
///
/// ```
/// use chatlens::parsing::tokenize;
///
/// let segments = tokenize("1/1/24, 10:00 AM - Alice: Hi\n1/1/24, 10:05 AM - Bob: Hey\n");
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].timestamp, "1/1/24, 10:00 AM - ");
/// assert_eq!(segments[1].body, "Bob: Hey");
/// ```
pub fn tokenize(text: &str) -> Vec<RawSegment<'_>> {
    let headers: Vec<_> = TIMESTAMP_RE.find_iter(text).collect();

    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let end = headers.get(i + 1).map_or(text.len(), |next| next.start());
            RawSegment {
                timestamp: header.as_str(),
                body: strip_line_terminator(&text[header.end()..end]),
            }
        })
        .collect()
}

/// Counts message headers without building segments.
pub fn count_headers(text: &str) -> usize {
    TIMESTAMP_RE.find_iter(text).count()
}

/// Removes the one line break that separates a body from the next header.
fn strip_line_terminator(body: &str) -> &str {
    body.strip_suffix('\n')
        .map(|b| b.strip_suffix('\r').unwrap_or(b))
        .unwrap_or(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let text = "1/1/24, 10:00 AM - Alice: Hi\n1/1/24, 10:05 AM - Bob: Hello\n";
        let segments = tokenize(text);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].timestamp, "1/1/24, 10:00 AM - ");
        assert_eq!(segments[0].body, "Alice: Hi");
        assert_eq!(segments[1].timestamp, "1/1/24, 10:05 AM - ");
        assert_eq!(segments[1].body, "Bob: Hello");
    }

    #[test]
    fn test_no_headers_yields_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("just some text\nwithout headers").is_empty());
        assert!(tokenize("[1/15/24, 10:30:45 AM] Alice: iOS format").is_empty());
    }

    #[test]
    fn test_preamble_discarded() {
        let text = "exported chat\n12/3/2023, 9:15 pm - Alice: late";
        let segments = tokenize(text);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].body, "Alice: late");
    }

    #[test]
    fn test_multiline_body_kept() {
        let text = "1/1/24, 10:00 AM - Alice: line one\nline two\n1/1/24, 10:01 AM - Bob: ok";
        let segments = tokenize(text);
        assert_eq!(segments[0].body, "Alice: line one\nline two");
        assert_eq!(segments[1].body, "Bob: ok");
    }

    #[test]
    fn test_crlf_stripped() {
        let text = "1/1/24, 10:00 AM - Alice: Hi\r\n1/1/24, 10:05 AM - Bob: Yo\r\n";
        let segments = tokenize(text);
        assert_eq!(segments[0].body, "Alice: Hi");
        assert_eq!(segments[1].body, "Bob: Yo");
    }

    #[test]
    fn test_narrow_no_break_space() {
        let text = "1/1/24, 10:00\u{202f}AM - Alice: Hi";
        let segments = tokenize(text);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].body, "Alice: Hi");
    }

    #[test]
    fn test_four_digit_year_and_lowercase_meridiem() {
        let text = "25/12/2023, 11:59 pm - Alice: Merry";
        let segments = tokenize(text);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].timestamp, "25/12/2023, 11:59 pm - ");
    }

    #[test]
    fn test_header_requires_separator() {
        // 24-hour exports have no meridiem and must not match
        assert_eq!(count_headers("15/01/2024, 10:30 - Alice: Hi"), 0);
        assert_eq!(count_headers("1/1/24, 10:00 AM Alice: Hi"), 0);
    }

    #[test]
    fn test_empty_body() {
        let text = "1/1/24, 10:00 AM - \n1/1/24, 10:01 AM - Bob: Hi";
        let segments = tokenize(text);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].body, "");
    }

    #[test]
    fn test_count_matches_segments() {
        let text = "1/1/24, 10:00 AM - a\n2/1/24, 11:00 AM - b\n3/1/24, 12:00 PM - c";
        assert_eq!(count_headers(text), tokenize(text).len());
    }
}
