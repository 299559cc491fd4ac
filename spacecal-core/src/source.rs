//! Occurrence retrieval interface.
//!
//! The engine never talks to the persistence layer itself; it consumes an
//! `OccurrenceSource` the host platform implements on top of its query
//! machinery. The contract mirrors the platform's month filter: an
//! occurrence belongs to a month if its start OR its end falls inside it.

use chrono::Datelike;
use chrono_tz::Tz;

use crate::error::CalendarResult;
use crate::occurrence::{CalendarId, Occurrence};

/// Query interface for a calendar's occurrences, one month at a time.
///
/// Implementors must apply the start-or-end-in-month filter. An occurrence
/// that neither starts nor ends in the requested month is not returned,
/// even if it spans the whole month; such spans are out of scope for
/// calendar events on this platform.
pub trait OccurrenceSource {
    fn fetch(
        &self,
        calendar: &CalendarId,
        year: i32,
        month: u32,
    ) -> CalendarResult<Vec<Occurrence>>;
}

/// Vec-backed source scoped to one calendar.
///
/// Used by tests and by the CLI's JSON-file loader; the platform proper
/// implements `OccurrenceSource` over its database instead.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    calendar: CalendarId,
    occurrences: Vec<Occurrence>,
    tz: Tz,
}

impl InMemorySource {
    pub fn new(calendar: CalendarId, occurrences: Vec<Occurrence>) -> Self {
        InMemorySource {
            calendar,
            occurrences,
            tz: chrono_tz::UTC,
        }
    }

    /// Evaluate the month filter in this timezone (must match the
    /// `GridConfig` the grids are built with).
    pub fn with_tz(mut self, tz: Tz) -> Self {
        self.tz = tz;
        self
    }
}

impl OccurrenceSource for InMemorySource {
    fn fetch(
        &self,
        calendar: &CalendarId,
        year: i32,
        month: u32,
    ) -> CalendarResult<Vec<Occurrence>> {
        if calendar != &self.calendar {
            return Ok(Vec::new());
        }
        let matching = self
            .occurrences
            .iter()
            .filter(|occ| {
                let start = occ.start_time.with_timezone(&self.tz);
                let end = occ.end_time.with_timezone(&self.tz);
                (start.year() == year && start.month() == month)
                    || (end.year() == year && end.month() == month)
            })
            .cloned()
            .collect();
        Ok(matching)
    }
}
