//! Output configuration for record export.

/// Controls which columns the record writers emit.
///
/// `author` and `content` are always written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Include the parsed timestamp
    pub include_timestamps: bool,
    /// Include the derived calendar fields (date, weekday, hour bucket, ...)
    pub include_calendar: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamps(mut self) -> Self {
        self.include_timestamps = true;
        self
    }

    #[must_use]
    pub fn with_calendar(mut self) -> Self {
        self.include_calendar = true;
        self
    }
}
