//! Grid configuration.

use chrono::{Locale, Weekday};
use chrono_tz::Tz;

/// Explicit configuration for grid building and day labeling.
///
/// Timezone and locale are passed in rather than read from ambient global
/// state: all day-of-month arithmetic happens in `tz`, and weekday/month
/// names come from `locale`.
#[derive(Debug, Clone, Copy)]
pub struct GridConfig {
    /// Timezone occurrences are bucketed in.
    pub tz: Tz,
    /// First day of the week for the month layout.
    pub week_start: Weekday,
    /// Locale for weekday and month names.
    pub locale: Locale,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            tz: chrono_tz::UTC,
            week_start: Weekday::Mon,
            locale: Locale::POSIX,
        }
    }
}

impl GridConfig {
    pub fn with_tz(mut self, tz: Tz) -> Self {
        self.tz = tz;
        self
    }

    pub fn with_week_start(mut self, week_start: Weekday) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
