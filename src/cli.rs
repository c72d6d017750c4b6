//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`Locale`] - Calendar name language
//! - [`OutputFormat`] - Record export format options
//! - [`ReportText`] - Plain-text rendering of a [`Report`]

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{CalendarLocale, ParseConfig, StatsConfig};
use crate::core::filter::{FilterConfig, OVERALL, UserSelection};
use crate::core::models::OutputConfig;
use crate::core::report::Report;
use crate::error::Result;

/// Analyze WhatsApp chat exports: message counts, timelines,
/// activity maps, busiest users, common words and emojis.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens chat.txt
    chatlens chat.txt --user Alice --after 2024-01-01
    chatlens chat.txt --json > report.json
    chatlens chat.txt --list-users
    chatlens chat.txt -o records.csv -t -c")]
pub struct Args {
    /// Path to the exported chat (.txt)
    pub input: String,

    /// Keep records on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep records on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Analyze a single author, or "Overall" for everyone
    #[arg(short, long, value_name = "USER", default_value = OVERALL)]
    pub user: String,

    /// Whitespace-separated stop word list excluded from the word table
    #[arg(long, value_name = "FILE")]
    pub stop_words: Option<PathBuf>,

    /// JSON file with analysis settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of entries in the common words table
    #[arg(long, value_name = "N")]
    pub top_words: Option<usize>,

    /// Number of entries in the busiest users table
    #[arg(long, value_name = "N")]
    pub top_users: Option<usize>,

    /// Language of month and weekday names
    #[arg(long, value_enum, default_value = "english")]
    pub locale: Locale,

    /// Print the selectable users and exit
    #[arg(long)]
    pub list_users: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Export the selected records to this file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Export format (detected from the output extension when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include timestamps in the export
    #[arg(short = 't', long)]
    pub timestamps: bool,

    /// Include calendar fields in the export
    #[arg(short = 'c', long)]
    pub calendar: bool,
}

impl Args {
    pub fn parse_config(&self) -> ParseConfig {
        ParseConfig::new().with_locale(self.locale.into())
    }

    /// Builds the filter from `--after`, `--before` and `--user`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDate`](crate::ChatlensError::InvalidDate) for a
    /// malformed date argument.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut filter = FilterConfig::new().with_selection(UserSelection::from_option(&self.user));
        if let Some(after) = &self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(before) = &self.before {
            filter = filter.with_date_to(before)?;
        }
        Ok(filter)
    }

    /// Loads `--config`, then applies `--stop-words` and the table sizes on top.
    pub fn stats_config(&self) -> Result<StatsConfig> {
        let mut config = match &self.config {
            Some(path) => StatsConfig::from_json_file(path)?,
            None => StatsConfig::default(),
        };
        if let Some(path) = &self.stop_words {
            config = config.load_stop_words(path)?;
        }
        if let Some(n) = self.top_words {
            config = config.with_top_words(n);
        }
        if let Some(n) = self.top_users {
            config = config.with_top_users(n);
        }
        Ok(config)
    }

    pub fn output_config(&self) -> OutputConfig {
        let mut config = OutputConfig::new();
        if self.timestamps {
            config = config.with_timestamps();
        }
        if self.calendar {
            config = config.with_calendar();
        }
        config
    }

    /// Resolves the export format: `--format` wins, then the output extension.
    ///
    /// Returns `None` when no `--output` was given.
    pub fn export_format(&self) -> Option<Result<crate::format::OutputFormat>> {
        let output = self.output.as_deref()?;
        Some(match self.format {
            Some(format) => Ok(format.into()),
            None => crate::format::OutputFormat::from_path(output),
        })
    }
}

/// Language for month and weekday names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    #[value(alias = "en")]
    English,

    #[value(alias = "ru")]
    Russian,
}

impl From<Locale> for CalendarLocale {
    fn from(locale: Locale) -> CalendarLocale {
        match locale {
            Locale::English => CalendarLocale::English,
            Locale::Russian => CalendarLocale::Russian,
        }
    }
}

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    Csv,

    /// JSON array of records
    Json,

    /// JSON Lines - one JSON object per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::format::OutputFormat::from(*self).fmt(f)
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

/// Renders a report as the plain-text tables the CLI prints.
pub struct ReportText<'a>(pub &'a Report);

impl fmt::Display for ReportText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let s = &report.summary;

        writeln!(f, "📊 Top Statistics ({})", report.user)?;
        writeln!(f, "   Messages:     {}", s.messages)?;
        writeln!(f, "   Words:        {}", s.words)?;
        writeln!(f, "   Media shared: {}", s.media_messages)?;
        writeln!(f, "   Links shared: {}", s.link_messages)?;

        writeln!(f, "\n📅 Monthly Timeline")?;
        for month in &report.monthly_timeline {
            writeln!(f, "   {:<20} {}", month.label, month.count)?;
        }

        writeln!(f, "\n🗓️  Daily Timeline")?;
        for day in &report.daily_timeline {
            writeln!(f, "   {:<20} {}", day.date.to_string(), day.count)?;
        }

        writeln!(f, "\n📆 Most Busy Day")?;
        for entry in &report.weekday_activity {
            writeln!(f, "   {:<20} {}", entry.label, entry.count)?;
        }

        writeln!(f, "\n📆 Most Busy Month")?;
        for entry in &report.month_activity {
            writeln!(f, "   {:<20} {}", entry.label, entry.count)?;
        }

        if !report.heatmap.is_empty() {
            writeln!(f, "\n🔥 Weekly Activity Map")?;
            write!(f, "   {:<12}", "")?;
            for bucket in &report.heatmap.buckets {
                write!(f, "{bucket:>7}")?;
            }
            writeln!(f)?;
            for (weekday, row) in report.heatmap.weekdays.iter().zip(&report.heatmap.counts) {
                write!(f, "   {weekday:<12}")?;
                for count in row {
                    write!(f, "{count:>7}")?;
                }
                writeln!(f)?;
            }
        }

        if let Some(users) = &report.busiest_users {
            writeln!(f, "\n👥 Most Busy Users")?;
            for user in users {
                writeln!(f, "   {:<20} {:>6} {:>7.2}%", user.author, user.count, user.percent)?;
            }
        }

        writeln!(f, "\n💬 Most Common Words")?;
        for entry in &report.top_words {
            writeln!(f, "   {:<20} {}", entry.label, entry.count)?;
        }

        writeln!(f, "\n😀 Emoji Analysis")?;
        for entry in &report.emojis {
            writeln!(f, "   {:<4} {}", entry.label, entry.count)?;
        }

        Ok(())
    }
}
