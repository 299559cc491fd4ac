//! Padded week-row layout of a Gregorian month.
//!
//! The standard month-grid convention: weeks as rows of 7 day numbers,
//! with `0` padding for cells that belong to the neighboring months.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{CalendarError, CalendarResult};

/// First day of the given month, failing fast on out-of-range input.
pub fn first_of_month(year: i32, month: u32) -> CalendarResult<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::InvalidDate {
        year,
        month,
        day: 1,
    })
}

/// First day of the month after (year, month).
pub fn first_of_next_month(year: i32, month: u32) -> CalendarResult<NaiveDate> {
    if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    }
}

/// First day of the month before (year, month).
pub fn first_of_last_month(year: i32, month: u32) -> CalendarResult<NaiveDate> {
    if month == 1 {
        first_of_month(year - 1, 12)
    } else {
        first_of_month(year, month - 1)
    }
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> CalendarResult<u32> {
    let first = first_of_month(year, month)?;
    let next = first_of_next_month(year, month)?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}

/// Week rows of day numbers for a month, `0` marking padding cells.
///
/// `week_start` decides which weekday heads each row (typically Monday).
pub fn month_weeks(year: i32, month: u32, week_start: Weekday) -> CalendarResult<Vec<Vec<u32>>> {
    let first = first_of_month(year, month)?;
    let days = days_in_month(year, month)?;
    let offset = first.weekday().days_since(week_start);

    let mut weeks = Vec::new();
    let mut row: Vec<u32> = vec![0; offset as usize];
    for day in 1..=days {
        row.push(day);
        if row.len() == 7 {
            weeks.push(row);
            row = Vec::new();
        }
    }
    if !row.is_empty() {
        row.resize(7, 0);
        weeks.push(row);
    }
    Ok(weeks)
}

/// Quarter (1-4) the given month belongs to.
pub fn quarter_of_month(month: u32) -> CalendarResult<u32> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    Ok(month.div_ceil(3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_weeks_march_2024_monday_start() {
        // 2024-03-01 is a Friday
        let weeks = month_weeks(2024, 3, Weekday::Mon).unwrap();
        assert_eq!(weeks[0], vec![0, 0, 0, 0, 1, 2, 3]);
        assert_eq!(weeks.last().unwrap(), &vec![25, 26, 27, 28, 29, 30, 31]);
        for week in &weeks {
            assert_eq!(week.len(), 7);
        }
    }

    #[test]
    fn test_month_weeks_sunday_start() {
        let weeks = month_weeks(2024, 3, Weekday::Sun).unwrap();
        // Sunday-first row: Su Mo Tu We Th Fr Sa
        assert_eq!(weeks[0], vec![0, 0, 0, 0, 0, 1, 2]);
    }

    #[test]
    fn test_month_weeks_trailing_padding() {
        // 2024-04-30 is a Tuesday, so the last Monday-start row pads with 0s
        let weeks = month_weeks(2024, 4, Weekday::Mon).unwrap();
        assert_eq!(weeks.last().unwrap(), &vec![29, 30, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2023, 2).unwrap(), 28);
        assert_eq!(days_in_month(2024, 12).unwrap(), 31);
        assert_eq!(days_in_month(2024, 4).unwrap(), 30);
    }

    #[test]
    fn test_invalid_month_fails_fast() {
        assert!(matches!(
            month_weeks(2024, 13, Weekday::Mon),
            Err(CalendarError::InvalidMonth(13))
        ));
        assert!(matches!(
            month_weeks(2024, 0, Weekday::Mon),
            Err(CalendarError::InvalidMonth(0))
        ));
    }

    #[test]
    fn test_month_boundaries() {
        assert_eq!(
            first_of_next_month(2024, 12).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
        assert_eq!(
            first_of_last_month(2024, 1).unwrap(),
            NaiveDate::from_ymd_opt(2023, 12, 1).unwrap()
        );
    }

    #[test]
    fn test_quarter_of_month() {
        assert_eq!(quarter_of_month(1).unwrap(), 1);
        assert_eq!(quarter_of_month(3).unwrap(), 1);
        assert_eq!(quarter_of_month(4).unwrap(), 2);
        assert_eq!(quarter_of_month(12).unwrap(), 4);
        assert!(quarter_of_month(13).is_err());
    }
}
