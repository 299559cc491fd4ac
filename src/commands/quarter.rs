use std::path::Path;

use anyhow::Result;
use spacecal_core::{CalendarId, build_quarter_grid};

use crate::config::GlobalConfig;
use crate::render;
use crate::source;

pub fn run(
    year: i32,
    quarter: u32,
    occurrences_path: &Path,
    calendar: &str,
    timezone: Option<&str>,
) -> Result<()> {
    let config = GlobalConfig::load()?.grid_config(timezone)?;
    let calendar = CalendarId::new(calendar);

    let source = source::load_source(occurrences_path, calendar.clone(), config.tz)?;
    let grid = build_quarter_grid(year, quarter, &calendar, &source, &config)?;

    println!("{}", render::render_quarter(&grid, &config)?);
    Ok(())
}
