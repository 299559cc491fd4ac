use std::path::Path;

use anyhow::Result;
use spacecal_core::{CalendarId, OccurrenceSource, build_month_grid};

use crate::config::GlobalConfig;
use crate::render;
use crate::source;

pub fn run(
    year: i32,
    month: u32,
    occurrences_path: &Path,
    calendar: &str,
    timezone: Option<&str>,
) -> Result<()> {
    let config = GlobalConfig::load()?.grid_config(timezone)?;
    let calendar = CalendarId::new(calendar);

    let source = source::load_source(occurrences_path, calendar.clone(), config.tz)?;
    let occurrences = source.fetch(&calendar, year, month)?;
    let grid = build_month_grid(year, month, &occurrences, &config)?;

    println!("{}", render::render_month(&grid, &config)?);
    Ok(())
}
