//! Quarterly view: three month grids plus quarter navigation.

use serde::Serialize;
use tracing::debug;

use crate::config::GridConfig;
use crate::error::{CalendarError, CalendarResult};
use crate::grid::{MonthGrid, build_month_grid};
use crate::occurrence::CalendarId;
use crate::source::OccurrenceSource;

/// Reference to a quarter of a year, used for temporal navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuarterRef {
    pub year: i32,
    pub quarter: u32,
}

impl QuarterRef {
    pub fn new(year: i32, quarter: u32) -> CalendarResult<Self> {
        if !(1..=4).contains(&quarter) {
            return Err(CalendarError::InvalidQuarter(quarter));
        }
        Ok(QuarterRef { year, quarter })
    }

    /// The quarter after this one, wrapping Q4 into the next year.
    pub fn next(&self) -> QuarterRef {
        if self.quarter == 4 {
            QuarterRef {
                year: self.year + 1,
                quarter: 1,
            }
        } else {
            QuarterRef {
                year: self.year,
                quarter: self.quarter + 1,
            }
        }
    }

    /// The quarter before this one, wrapping Q1 into the previous year.
    pub fn last(&self) -> QuarterRef {
        if self.quarter == 1 {
            QuarterRef {
                year: self.year - 1,
                quarter: 4,
            }
        } else {
            QuarterRef {
                year: self.year,
                quarter: self.quarter - 1,
            }
        }
    }

    /// The three months of this quarter (Q1 = Jan-Mar, etc.).
    pub fn months(&self) -> [u32; 3] {
        let first = self.quarter * 3 - 2;
        [first, first + 1, first + 2]
    }
}

/// Three consecutive month grids with navigation metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuarterGrid {
    pub months: Vec<MonthGrid>,
    pub this_quarter: QuarterRef,
    pub next_quarter: QuarterRef,
    pub last_quarter: QuarterRef,
}

/// Build the quarterly view for one calendar.
///
/// Each month's occurrences are fetched independently and the three month
/// grids are pure functions of disjoint inputs. An occurrence that neither
/// starts nor ends in a month is absent from that month's grid; that
/// follows from the source's month filter (see `OccurrenceSource`).
pub fn build_quarter_grid<S: OccurrenceSource>(
    year: i32,
    quarter: u32,
    calendar: &CalendarId,
    source: &S,
    config: &GridConfig,
) -> CalendarResult<QuarterGrid> {
    let this_quarter = QuarterRef::new(year, quarter)?;
    debug!(%calendar, year, quarter, "building quarterly view");

    let mut months = Vec::with_capacity(3);
    for month in this_quarter.months() {
        let occurrences = source.fetch(calendar, year, month)?;
        months.push(build_month_grid(year, month, &occurrences, config)?);
    }

    Ok(QuarterGrid {
        months,
        this_quarter,
        next_quarter: this_quarter.next(),
        last_quarter: this_quarter.last(),
    })
}
