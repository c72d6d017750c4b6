//! All aggregates for one selection, bundled for display or JSON export.

use serde::Serialize;

use crate::config::StatsConfig;
use crate::core::filter::{FilterConfig, UserSelection, apply_filters};
use crate::core::stats::{
    self, CountEntry, DailyCount, Heatmap, MonthlyCount, Summary, UserShare,
};
use crate::record::MessageRecord;

/// Every statistic the analyzer shows for a selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Author selection the report covers.
    pub user: UserSelection,
    pub summary: Summary,
    pub monthly_timeline: Vec<MonthlyCount>,
    pub daily_timeline: Vec<DailyCount>,
    pub weekday_activity: Vec<CountEntry>,
    pub month_activity: Vec<CountEntry>,
    pub heatmap: Heatmap,
    /// Present only for the "Overall" selection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busiest_users: Option<Vec<UserShare>>,
    pub top_words: Vec<CountEntry>,
    pub emojis: Vec<CountEntry>,
}

impl Report {
    /// Filters `records` and computes every aggregate over the selection.
    ///
    /// An empty selection produces a report full of zeros and empty tables;
    /// check [`is_empty`](Self::is_empty) to show an empty state instead.
    ///
    /// # Example
    ///
    /// ```
    /// use chatlens::config::StatsConfig;
    /// use chatlens::core::filter::FilterConfig;
    /// use chatlens::core::report::Report;
    /// use chatlens::parser::TranscriptParser;
    ///
    /// let store = TranscriptParser::new().parse_str(
    ///     "1/1/24, 10:00 AM - Alice: Hi\n1/1/24, 10:05 AM - Bob: Hello\n",
    /// );
    ///
    /// let report = Report::build(store.records(), &FilterConfig::new(), &StatsConfig::default());
    /// assert_eq!(report.summary.messages, 2);
    /// assert_eq!(report.busiest_users.as_ref().unwrap().len(), 2);
    /// ```
    pub fn build(records: &[MessageRecord], filter: &FilterConfig, config: &StatsConfig) -> Self {
        let selection = apply_filters(records, filter);
        let selected = || selection.iter().copied();

        let busiest_users = filter
            .user
            .is_overall()
            .then(|| stats::busiest_users(selected(), config.top_users));

        Self {
            user: filter.user.clone(),
            summary: stats::summary(selected(), config),
            monthly_timeline: stats::monthly_timeline(selected()),
            daily_timeline: stats::daily_timeline(selected()),
            weekday_activity: stats::weekday_activity(selected()),
            month_activity: stats::month_activity(selected()),
            heatmap: stats::activity_heatmap(selected()),
            busiest_users,
            top_words: stats::top_words(selected(), config),
            emojis: stats::emoji_frequency(selected()),
        }
    }

    /// Returns `true` if the selection held no records.
    pub fn is_empty(&self) -> bool {
        self.summary.messages == 0
    }
}
