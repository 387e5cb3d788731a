//! Configuration options for the import pipeline.

use chrono::{NaiveDate, Utc};

/// Routine name used when the source text has no `Workout:` line.
pub const DEFAULT_ROUTINE_NAME: &str = "Imported Workout";

/// Options for the workout parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Substituted when no `Workout:` line is present.
    pub default_routine_name: String,
    /// Substituted when no `Date:` line is present. `None` means the current UTC date.
    pub today: Option<NaiveDate>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            default_routine_name: DEFAULT_ROUTINE_NAME.to_string(),
            today: None,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_default_routine_name(mut self, name: impl Into<String>) -> Self {
        self.default_routine_name = name.into();
        self
    }

    /// Pin the fallback date instead of reading the clock.
    #[must_use]
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Fallback date as `YYYY-MM-DD`.
    pub fn default_date(&self) -> String {
        self.today
            .unwrap_or_else(|| Utc::now().date_naive())
            .format("%Y-%m-%d")
            .to_string()
    }
}

/// What a calling validator does with exercises that failed to map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmappedPolicy {
    /// Pass them through with a null template id and let the service decide.
    #[default]
    Allow,
    /// Fail before the payload leaves the process.
    Reject,
}
