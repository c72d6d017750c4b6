//! Aggregate statistics over a selection of records.
//!
//! Every function here is pure and accepts anything that iterates over
//! `&MessageRecord`: a [`RecordStore`](crate::RecordStore), a slice, or the
//! `Vec<&MessageRecord>` returned by
//! [`apply_filters`](crate::core::filter::apply_filters) (via `.iter().copied()`).
//!
//! Records without a timestamp count toward [`summary`], [`busiest_users`],
//! [`top_words`] and [`emoji_frequency`], but are skipped by the time-based
//! aggregates.
//!
//! # Example
//!
//! ```
//! use chatlens::config::StatsConfig;
//! use chatlens::core::stats;
//! use chatlens::parser::TranscriptParser;
//!
//! let store = TranscriptParser::new().parse_str(
//!     "1/1/24, 10:00 AM - Alice: see https://example.com\n\
//!      1/1/24, 10:05 AM - Bob: <Media omitted>\n",
//! );
//!
//! let summary = stats::summary(&store, &StatsConfig::default());
//! assert_eq!(summary.messages, 2);
//! assert_eq!(summary.media_messages, 1);
//! assert_eq!(summary.link_messages, 1);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::Serialize;

use crate::config::StatsConfig;
use crate::record::{CalendarFields, MessageRecord};

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s<>"'\)\]\}]+"#).expect("url pattern is valid")
});

// A flag is a pair of regional indicators. Any other emoji is a pictographic
// character with an optional skin tone or variation selector, possibly
// joined to more of the same by U+200D.
static EMOJI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\p{Regional_Indicator}{2}",
        r"|\p{Extended_Pictographic}(?:\p{Emoji_Modifier}|\x{FE0F})?",
        r"(?:\x{200D}\p{Extended_Pictographic}(?:\p{Emoji_Modifier}|\x{FE0F})?)*",
    ))
    .expect("emoji pattern is valid")
});

/// Headline numbers for a selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of records.
    pub messages: usize,
    /// Whitespace-separated tokens across all content.
    pub words: usize,
    /// Records whose content is exactly the media placeholder.
    pub media_messages: usize,
    /// Records whose content contains an http(s) URL.
    pub link_messages: usize,
}

/// A label with its number of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountEntry {
    pub label: String,
    pub count: usize,
}

impl CountEntry {
    fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Messages in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month_number: u32,
    pub month_name: String,
    /// `"{month_name}-{year}"`, e.g. `"January-2024"`.
    pub label: String,
    pub count: usize,
}

/// Messages on one calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// An author's message count and share of the selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub author: String,
    pub count: usize,
    /// Percentage of all records in the selection, rounded to 2 decimals.
    pub percent: f64,
}

/// Message counts per weekday and hour bucket.
///
/// Only weekdays and buckets that occur are present. Rows run Monday to
/// Sunday, columns from hour 0 to hour 23.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    /// Row labels (weekday names).
    pub weekdays: Vec<String>,
    /// Column labels (hour bucket labels).
    pub buckets: Vec<String>,
    /// `counts[row][column]`; absent combinations are zero.
    pub counts: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Count for one weekday/bucket cell, zero when either label is absent.
    pub fn get(&self, weekday: &str, bucket: &str) -> usize {
        let row = self.weekdays.iter().position(|w| w == weekday);
        let col = self.buckets.iter().position(|b| b == bucket);
        match (row, col) {
            (Some(r), Some(c)) => self.counts[r][c],
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.weekdays.is_empty()
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }
}

fn calendars<'a, I>(records: I) -> impl Iterator<Item = &'a CalendarFields>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    records.into_iter().filter_map(|r| r.calendar.as_ref())
}

/// Returns `true` if `content` contains an http(s) URL.
pub fn contains_url(content: &str) -> bool {
    URL_RE.is_match(content)
}

/// Extracts every emoji of `content`, in order.
///
/// Flags, skin-toned emojis and joined sequences such as 👨‍👩‍👧 come out
/// as a single item each.
pub fn extract_emojis(content: &str) -> impl Iterator<Item = &str> {
    EMOJI_RE.find_iter(content).map(|m| m.as_str())
}

/// Counts messages, words, media messages and link messages.
pub fn summary<'a, I>(records: I, config: &StatsConfig) -> Summary
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    records.into_iter().fold(Summary::default(), |mut acc, r| {
        acc.messages += 1;
        acc.words += r.content.split_whitespace().count();
        if r.content == config.media_placeholder {
            acc.media_messages += 1;
        }
        if contains_url(&r.content) {
            acc.link_messages += 1;
        }
        acc
    })
}

/// Message counts per month, chronological.
pub fn monthly_timeline<'a, I>(records: I) -> Vec<MonthlyCount>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut months: BTreeMap<(i32, u32), (&str, usize)> = BTreeMap::new();
    for cal in calendars(records) {
        months
            .entry((cal.year, cal.month_number))
            .or_insert((cal.month_name.as_str(), 0))
            .1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month_number), (name, count))| MonthlyCount {
            year,
            month_number,
            month_name: name.to_string(),
            label: format!("{name}-{year}"),
            count,
        })
        .collect()
}

/// Message counts per date, chronological.
pub fn daily_timeline<'a, I>(records: I) -> Vec<DailyCount>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut days: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for cal in calendars(records) {
        *days.entry(cal.date).or_default() += 1;
    }
    days.into_iter()
        .map(|(date, count)| DailyCount { date, count })
        .collect()
}

/// Total messages per weekday, busiest first (ties in Monday-first order).
pub fn weekday_activity<'a, I>(records: I) -> Vec<CountEntry>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    ranked_by_key(calendars(records).map(|cal| {
        (
            cal.date.weekday().num_days_from_monday(),
            cal.weekday_name.as_str(),
        )
    }))
}

/// Total messages per month name across years, busiest first (ties in
/// calendar order).
pub fn month_activity<'a, I>(records: I) -> Vec<CountEntry>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    ranked_by_key(calendars(records).map(|cal| (cal.month_number, cal.month_name.as_str())))
}

/// Counts `(order key, label)` pairs and sorts by count descending, then key.
fn ranked_by_key<'a>(items: impl Iterator<Item = (u32, &'a str)>) -> Vec<CountEntry> {
    let mut counts: BTreeMap<u32, (&str, usize)> = BTreeMap::new();
    for (key, label) in items {
        counts.entry(key).or_insert((label, 0)).1 += 1;
    }

    let mut ranked: Vec<CountEntry> = counts
        .into_values()
        .map(|(label, count)| CountEntry::new(label, count))
        .collect();
    // stable: equal counts keep key order
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Pivots messages into a weekday × hour-bucket grid.
pub fn activity_heatmap<'a, I>(records: I) -> Heatmap
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut cells: HashMap<(u32, u32), usize> = HashMap::new();
    let mut weekdays: BTreeMap<u32, &str> = BTreeMap::new();
    let mut hours: BTreeMap<u32, &str> = BTreeMap::new();

    for cal in calendars(records) {
        let day = cal.date.weekday().num_days_from_monday();
        weekdays.entry(day).or_insert(cal.weekday_name.as_str());
        hours.entry(cal.hour).or_insert(cal.hour_bucket.as_str());
        *cells.entry((day, cal.hour)).or_default() += 1;
    }

    let counts = weekdays
        .keys()
        .map(|day| {
            hours
                .keys()
                .map(|hour| cells.get(&(*day, *hour)).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    Heatmap {
        weekdays: weekdays.into_values().map(str::to_string).collect(),
        buckets: hours.into_values().map(str::to_string).collect(),
        counts,
    }
}

/// Top `top_n` authors by message count.
///
/// Notifications are not ranked, but they count toward the total that
/// percentages are computed from. Ties are broken alphabetically.
pub fn busiest_users<'a, I>(records: I, top_n: usize) -> Vec<UserShare>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut total = 0usize;
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for r in records {
        total += 1;
        if !r.is_notification() {
            *counts.entry(r.author.as_str()).or_default() += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(top_n);

    ranked
        .into_iter()
        .map(|(author, count)| UserShare {
            author: author.to_string(),
            count,
            percent: percent_of(count, total),
        })
        .collect()
}

fn percent_of(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (count as f64 * 10_000.0 / total as f64).round() / 100.0
}

/// Most frequent lower-cased words, excluding stop words.
///
/// Notification rows and media placeholder rows are skipped entirely. Ties
/// are broken alphabetically; at most `config.top_words` entries.
pub fn top_words<'a, I>(records: I, config: &StatsConfig) -> Vec<CountEntry>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for r in records {
        if r.is_notification() || r.content == config.media_placeholder {
            continue;
        }
        for word in r.content.to_lowercase().split_whitespace() {
            if !config.stop_words.contains(word) {
                *counts.entry(word.to_string()).or_default() += 1;
            }
        }
    }

    let mut ranked: Vec<CountEntry> = counts
        .into_iter()
        .map(|(word, count)| CountEntry::new(word, count))
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(config.top_words);
    ranked
}

/// Emoji counts over all content, most frequent first.
///
/// Ties keep the order in which emojis first appear.
pub fn emoji_frequency<'a, I>(records: I) -> Vec<CountEntry>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut ranked: Vec<CountEntry> = Vec::new();
    for r in records {
        for emoji in extract_emojis(&r.content) {
            match index.get(emoji) {
                Some(&i) => ranked[i].count += 1,
                None => {
                    index.insert(emoji, ranked.len());
                    ranked.push(CountEntry::new(emoji, 1));
                }
            }
        }
    }
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}
