//! Core aggregation engine for the spaces calendar plugin.
//!
//! This crate turns a flat set of time-ranged occurrences into the
//! day-bucketed grids the platform renders as monthly and quarterly
//! calendar views:
//! - `occurrence` — the read-only `Occurrence` view over persisted events
//! - `grid` — bucketing occurrences into day cells for a single month
//! - `quarter` — three month grids plus quarter navigation
//! - `day_names` — localized weekday labels for grid headers
//! - `layout` — the padded week-row layout of a Gregorian month
//!
//! Everything here is a pure in-memory transformation; persistence,
//! permissions and rendering belong to the host platform.

pub mod config;
pub mod day_names;
pub mod error;
pub mod grid;
pub mod layout;
pub mod occurrence;
pub mod quarter;
pub mod source;

pub use config::GridConfig;
pub use error::{CalendarError, CalendarResult};
pub use grid::{DayBucket, DayCell, MonthGrid, build_month_grid, occurrences_by_day};
pub use occurrence::{CalendarId, EventRef, Occurrence};
pub use quarter::{QuarterGrid, QuarterRef, build_quarter_grid};
pub use source::{InMemorySource, OccurrenceSource};
