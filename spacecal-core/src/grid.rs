//! Bucketing occurrences into day cells for a single month view.
//!
//! The grid builder takes the flat occurrence list the platform queried for
//! one month (start OR end falling inside it) and groups it by day of
//! month, splitting each day into occurrences that start, end, or run
//! throughout that day. The result feeds the padded week-row grid the
//! month template renders.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use tracing::warn;

use crate::config::GridConfig;
use crate::error::CalendarResult;
use crate::layout;
use crate::occurrence::Occurrence;

/// Occurrences grouped for a single day of the month.
///
/// A single-day occurrence appears only in `starts`. A multi-day
/// occurrence appears in `starts` on its first day, in `ends` on its last
/// day, and in `throughout` on every day strictly between the two.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    pub day: u32,
    pub starts: Vec<Occurrence>,
    pub ends: Vec<Occurrence>,
    /// Set semantics: one entry per occurrence per day.
    pub throughout: Vec<Occurrence>,
}

impl DayBucket {
    pub fn empty(day: u32) -> Self {
        DayBucket {
            day,
            starts: Vec::new(),
            ends: Vec::new(),
            throughout: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.starts.is_empty() && self.ends.is_empty() && self.throughout.is_empty()
    }
}

/// One cell of the month grid. `day == 0` marks padding outside the month;
/// padding cells always carry an empty bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub bucket: DayBucket,
}

impl DayCell {
    pub fn is_padding(&self) -> bool {
        self.day == 0
    }
}

/// The padded week-row matrix for one month, plus navigation anchors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Vec<DayCell>>,
    /// First day of this month.
    pub this_month: NaiveDate,
    /// First day of the following month.
    pub next_month: NaiveDate,
    /// First day of the preceding month.
    pub last_month: NaiveDate,
}

/// Where one occurrence lands within the target month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Start(u32),
    End(u32),
    Throughout(u32),
}

/// Classify an occurrence against the target month, in the configured
/// timezone. Returns one placement per day the occurrence touches inside
/// the month; days outside the month are dropped (the neighboring month's
/// grid covers them).
fn placements(occ: &Occurrence, year: i32, month: u32, config: &GridConfig) -> Vec<Placement> {
    let start = occ.start_time.with_timezone(&config.tz);
    let end = occ.end_time.with_timezone(&config.tz);
    let mut out = Vec::new();

    if start.year() == year && start.month() == month {
        out.push(Placement::Start(start.day()));
    }

    // Single-day occurrences stay out of `ends` to avoid double-counting.
    // Full local dates are compared, not day numbers, so an occurrence
    // ending a whole month later on the same day number still counts.
    if end.year() == year && end.month() == month && start.date_naive() != end.date_naive() {
        out.push(Placement::End(end.day()));
    }

    let span_days = (end - start).num_days();
    if occ.end_time < occ.start_time {
        warn!(
            event_ref = %occ.event_ref,
            "occurrence ends before it starts, skipping throughout days"
        );
        return out;
    }
    for n in 1..=span_days {
        let current = start + Duration::days(n);
        if current.year() == year
            && current.month() == month
            && current.date_naive() != end.date_naive()
        {
            out.push(Placement::Throughout(current.day()));
        }
    }

    out
}

/// Group occurrences by day of the target month.
///
/// Days with no occurrences are absent from the mapping; callers
/// default-fill with empty buckets when assembling the grid.
pub fn occurrences_by_day(
    occurrences: &[Occurrence],
    year: i32,
    month: u32,
    config: &GridConfig,
) -> CalendarResult<BTreeMap<u32, DayBucket>> {
    layout::first_of_month(year, month)?;

    let mut by_day: BTreeMap<u32, DayBucket> = BTreeMap::new();
    for occ in occurrences {
        for placement in placements(occ, year, month, config) {
            match placement {
                Placement::Start(day) => {
                    let bucket = by_day.entry(day).or_insert_with(|| DayBucket::empty(day));
                    bucket.starts.push(occ.clone());
                }
                Placement::End(day) => {
                    let bucket = by_day.entry(day).or_insert_with(|| DayBucket::empty(day));
                    bucket.ends.push(occ.clone());
                }
                Placement::Throughout(day) => {
                    let bucket = by_day.entry(day).or_insert_with(|| DayBucket::empty(day));
                    if !bucket.throughout.contains(occ) {
                        bucket.throughout.push(occ.clone());
                    }
                }
            }
        }
    }
    Ok(by_day)
}

/// Build the full padded month grid for rendering.
pub fn build_month_grid(
    year: i32,
    month: u32,
    occurrences: &[Occurrence],
    config: &GridConfig,
) -> CalendarResult<MonthGrid> {
    let mut by_day = occurrences_by_day(occurrences, year, month, config)?;
    let weeks = layout::month_weeks(year, month, config.week_start)?
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|day| {
                    let bucket = if day == 0 {
                        DayBucket::empty(0)
                    } else {
                        by_day.remove(&day).unwrap_or_else(|| DayBucket::empty(day))
                    };
                    DayCell { day, bucket }
                })
                .collect()
        })
        .collect();

    Ok(MonthGrid {
        year,
        month,
        weeks,
        this_month: layout::first_of_month(year, month)?,
        next_month: layout::first_of_next_month(year, month)?,
        last_month: layout::first_of_last_month(year, month)?,
    })
}
