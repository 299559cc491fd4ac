//! Terminal rendering for month and quarter grids.
//!
//! The platform renders grids through its HTML templates; the CLI prints
//! the same structure as plain text, with one marker line per occurrence
//! under each month.

use anyhow::Result;
use chrono::{Duration, NaiveDate};
use owo_colors::OwoColorize;
use spacecal_core::day_names::month_name;
use spacecal_core::{DayCell, GridConfig, MonthGrid, QuarterGrid};

pub fn render_month(grid: &MonthGrid, config: &GridConfig) -> Result<String> {
    let mut lines = Vec::new();

    let title = format!("{} {}", month_name(grid.month, config.locale)?, grid.year);
    lines.push(format!("{:^34}", title).bold().to_string());
    lines.push(weekday_header(config));

    for week in &grid.weeks {
        let row: Vec<String> = week.iter().map(render_cell).collect();
        lines.push(row.join(" "));
    }

    let listing = day_listing(grid);
    if !listing.is_empty() {
        lines.push(String::new());
        lines.extend(listing);
    }

    Ok(lines.join("\n"))
}

pub fn render_quarter(grid: &QuarterGrid, config: &GridConfig) -> Result<String> {
    let mut sections = Vec::new();

    let title = format!("Q{} {}", grid.this_quarter.quarter, grid.this_quarter.year);
    sections.push(title.bold().to_string());

    for month in &grid.months {
        sections.push(render_month(month, config)?);
    }

    let nav = format!(
        "prev: Q{} {}   next: Q{} {}",
        grid.last_quarter.quarter,
        grid.last_quarter.year,
        grid.next_quarter.quarter,
        grid.next_quarter.year,
    );
    sections.push(nav.dimmed().to_string());

    Ok(sections.join("\n\n"))
}

/// Abbreviated weekday names in week-start order.
fn weekday_header(config: &GridConfig) -> String {
    // 2024-01-01 is a Monday; offset from it to hit each weekday.
    let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let mut names = Vec::with_capacity(7);
    let mut weekday = config.week_start;
    for _ in 0..7 {
        let date = monday + Duration::days(weekday.num_days_from_monday() as i64);
        let name = date.format_localized("%a", config.locale).to_string();
        names.push(format!("{:>4}", name));
        weekday = weekday.succ();
    }
    names.join(" ")
}

fn render_cell(cell: &DayCell) -> String {
    if cell.is_padding() {
        return "    ".to_string();
    }
    if cell.bucket.is_empty() {
        format!("{:>3} ", cell.day)
    } else {
        format!("{:>3}*", cell.day).green().to_string()
    }
}

/// One line per occurrence per day: `+` starting, `|` running throughout,
/// `-` ending.
fn day_listing(grid: &MonthGrid) -> Vec<String> {
    let mut lines = Vec::new();
    for cell in grid.weeks.iter().flatten() {
        for occ in &cell.bucket.starts {
            lines.push(format!("  {:>2} {} {}", cell.day, "+".green(), occ.event_ref));
        }
        for occ in &cell.bucket.throughout {
            lines.push(format!("  {:>2} {} {}", cell.day, "|".yellow(), occ.event_ref));
        }
        for occ in &cell.bucket.ends {
            lines.push(format!("  {:>2} {} {}", cell.day, "-".red(), occ.event_ref));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use spacecal_core::{CalendarId, EventRef, InMemorySource, Occurrence, build_month_grid, build_quarter_grid};

    fn workshop() -> Occurrence {
        Occurrence::new(
            Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 6, 17, 0, 0).unwrap(),
            EventRef::new("workshop"),
        )
    }

    #[test]
    fn test_render_month_smoke() {
        let config = GridConfig::default();
        let grid = build_month_grid(2024, 3, &[workshop()], &config).unwrap();
        let output = render_month(&grid, &config).unwrap();

        assert!(output.contains("March 2024"));
        assert!(output.contains("Mon"));
        assert!(output.contains("31"));
        assert!(output.contains("workshop"));
    }

    #[test]
    fn test_render_quarter_navigation_line() {
        let calendar = CalendarId::new("team");
        let source = InMemorySource::new(calendar.clone(), vec![workshop()]);
        let config = GridConfig::default();
        let grid = build_quarter_grid(2024, 1, &calendar, &source, &config).unwrap();
        let output = render_quarter(&grid, &config).unwrap();

        assert!(output.contains("Q1 2024"));
        assert!(output.contains("prev: Q4 2023"));
        assert!(output.contains("next: Q2 2024"));
        assert!(output.contains("January"));
        assert!(output.contains("March"));
    }
}
