//! Error types for the spacecal engine.

use thiserror::Error;

/// Errors that can occur while building calendar grids.
///
/// Date-range errors are caller-input errors and fail fast. Data-quality
/// problems in individual occurrences (end before start) are NOT errors;
/// the grid builder degrades gracefully so one bad record cannot take down
/// a whole month view.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Invalid month {0}, expected 1-12")]
    InvalidMonth(u32),

    #[error("Invalid quarter {0}, expected 1-4")]
    InvalidQuarter(u32),

    #[error("No valid date for year {year}, month {month}, day {day}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Occurrence source error: {0}")]
    Source(String),
}

/// Result type alias for spacecal operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
