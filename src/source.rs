//! Occurrence file loading.
//!
//! On the platform, occurrences come out of the database scoped to one
//! space's calendar. The CLI stands in with a JSON file holding a flat
//! occurrence list.

use std::path::Path;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use spacecal_core::{CalendarId, InMemorySource, Occurrence};
use tracing::debug;

/// Load a JSON occurrence file into a month-queryable source.
pub fn load_source(path: &Path, calendar: CalendarId, tz: Tz) -> Result<InMemorySource> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read occurrence file {}", path.display()))?;
    let occurrences: Vec<Occurrence> = serde_json::from_str(&content)
        .with_context(|| format!("Invalid occurrence file {}", path.display()))?;
    debug!(count = occurrences.len(), %calendar, "loaded occurrence file");

    Ok(InMemorySource::new(calendar, occurrences).with_tz(tz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacecal_core::{EventRef, OccurrenceSource};

    #[test]
    fn test_occurrence_wire_format() {
        let json = r#"[
            {
                "start_time": "2024-03-04T09:00:00Z",
                "end_time": "2024-03-06T17:00:00Z",
                "event_ref": "workshop"
            }
        ]"#;
        let occurrences: Vec<Occurrence> = serde_json::from_str(json).unwrap();
        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].event_ref, EventRef::new("workshop"));

        let source = InMemorySource::new(CalendarId::new("team"), occurrences);
        let fetched = source.fetch(&CalendarId::new("team"), 2024, 3).unwrap();
        assert_eq!(fetched.len(), 1);
    }
}
