//! Localized weekday labels for grid headers.

use std::collections::BTreeMap;

use chrono::{Datelike, Locale};

use crate::config::GridConfig;
use crate::error::{CalendarError, CalendarResult};
use crate::layout;
use crate::quarter::QuarterRef;

/// Abbreviated weekday name for every day of a month, keyed by day number.
pub fn day_names(year: i32, month: u32, config: &GridConfig) -> CalendarResult<BTreeMap<u32, String>> {
    let first = layout::first_of_month(year, month)?;
    let days = layout::days_in_month(year, month)?;

    let mut names = BTreeMap::new();
    for day in 1..=days {
        let date = first
            .with_day(day)
            .ok_or(CalendarError::InvalidDate { year, month, day })?;
        names.insert(day, date.format_localized("%a", config.locale).to_string());
    }
    Ok(names)
}

/// Day names for all three months of a quarter, keyed by month number.
pub fn day_names_for_quarter(
    year: i32,
    quarter: u32,
    config: &GridConfig,
) -> CalendarResult<BTreeMap<u32, BTreeMap<u32, String>>> {
    let quarter = QuarterRef::new(year, quarter)?;
    let mut by_month = BTreeMap::new();
    for month in quarter.months() {
        by_month.insert(month, day_names(year, month, config)?);
    }
    Ok(by_month)
}

/// Full localized month name (1 = January).
pub fn month_name(month: u32, locale: Locale) -> CalendarResult<String> {
    // Any non-leap year works for formatting a month name.
    let date = layout::first_of_month(2001, month)?;
    Ok(date.format_localized("%B", locale).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_names_march_2024() {
        let config = GridConfig::default();
        let names = day_names(2024, 3, &config).unwrap();

        // 2024-03-01 is a Friday.
        assert_eq!(names[&1], "Fri");
        assert_eq!(names[&4], "Mon");
        assert_eq!(names[&31], "Sun");
        assert_eq!(names.len(), 31);
    }

    #[test]
    fn test_day_names_localized() {
        let config = GridConfig::default().with_locale(Locale::de_DE);
        let names = day_names(2024, 3, &config).unwrap();
        assert_eq!(names[&1], "Fr");
        assert_eq!(names[&4], "Mo");
    }

    #[test]
    fn test_day_names_for_quarter_keys() {
        let config = GridConfig::default();
        let by_month = day_names_for_quarter(2024, 2, &config).unwrap();
        assert_eq!(by_month.keys().copied().collect::<Vec<_>>(), vec![4, 5, 6]);
        assert_eq!(by_month[&4].len(), 30);
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1, Locale::POSIX).unwrap(), "January");
        assert_eq!(month_name(12, Locale::POSIX).unwrap(), "December");
        assert!(month_name(13, Locale::POSIX).is_err());
    }
}
