//! Occurrence types.
//!
//! An `Occurrence` is a single concrete time-bounded instance of an event,
//! as handed to us by the platform's persistence layer. The engine treats
//! it as an immutable read-only view; it never writes occurrences back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to the event an occurrence belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventRef(pub String);

impl EventRef {
    pub fn new(id: impl Into<String>) -> Self {
        EventRef(id.into())
    }
}

impl fmt::Display for EventRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a per-space calendar.
///
/// The multi-tenant scoping key: every occurrence query is made against
/// exactly one calendar, and calendars never share occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarId(pub String);

impl CalendarId {
    pub fn new(id: impl Into<String>) -> Self {
        CalendarId(id.into())
    }
}

impl fmt::Display for CalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single time-ranged occurrence of a calendar event.
///
/// Well-formed occurrences satisfy `start_time <= end_time`. Records that
/// violate this are tolerated by the grid builder (they contribute no
/// throughout days) rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occurrence {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub event_ref: EventRef,
}

impl Occurrence {
    pub fn new(start_time: DateTime<Utc>, end_time: DateTime<Utc>, event_ref: EventRef) -> Self {
        Occurrence {
            start_time,
            end_time,
            event_ref,
        }
    }
}
