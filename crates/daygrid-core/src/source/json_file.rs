//! JSON file calendar source.
//!
//! The file holds an array of entries with local wall-clock times:
//!
//! ```json
//! [
//!   { "id": "standup", "calendar_id": "work", "title": "Standup",
//!     "start": "2026-10-19T09:00:00", "end": "2026-10-19T09:15:00" }
//! ]
//! ```

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::CalendarSource;
use crate::error::SourceError;
use crate::event::Event;

/// One stored calendar entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub id: String,
    #[serde(default)]
    pub calendar_id: String,
    #[serde(default)]
    pub title: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default)]
    pub all_day: bool,
}

impl CalendarEntry {
    /// The part of this entry that falls on `date`, if any.
    ///
    /// All-day entries cover every date from `start` up to `end`; an `end`
    /// at midnight excludes that date.
    pub fn on_day(&self, date: NaiveDate) -> Option<Event> {
        let mut event = if self.all_day {
            let last = if self.end == midnight(self.end.date()) && self.end > self.start {
                self.end.date().pred_opt()?
            } else {
                self.end.date()
            };
            if date < self.start.date() || date > last {
                return None;
            }
            Event::all_day(self.id.clone())
        } else {
            Event::from_times(self.id.clone(), date, self.start, self.end)?
        };
        event.calendar_id = self.calendar_id.clone();
        event.title = self.title.clone();
        Some(event)
    }
}

/// Calendar entries loaded from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    entries: Vec<CalendarEntry>,
}

impl JsonFileSource {
    /// Read and parse `path`.
    ///
    /// # Errors
    /// Returns [`SourceError::Io`] if the file cannot be read and
    /// [`SourceError::Parse`] if it is not a JSON array of entries.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|source| SourceError::Io {
            path: path.clone(),
            source,
        })?;
        let entries = Self::parse(&path, &content)?;
        debug!(path = %path.display(), entries = entries.len(), "Loaded calendar file");
        Ok(Self { path, entries })
    }

    fn parse(path: &Path, content: &str) -> Result<Vec<CalendarEntry>, SourceError> {
        serde_json::from_str(content).map_err(|e| SourceError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn from_entries(entries: Vec<CalendarEntry>) -> Self {
        Self {
            path: PathBuf::new(),
            entries,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[CalendarEntry] {
        &self.entries
    }
}

impl CalendarSource for JsonFileSource {
    fn name(&self) -> &str {
        "json-file"
    }

    fn events_for_day(&self, date: NaiveDate) -> Result<Vec<Event>, SourceError> {
        let mut events: Vec<Event> = self
            .entries
            .iter()
            .filter_map(|entry| entry.on_day(date))
            .collect();
        events.sort_by(|a, b| a.start_fh.total_cmp(&b.start_fh));
        Ok(events)
    }
}

/// Midnight at the start of `date`.
fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        { "id": "standup", "calendar_id": "work", "title": "Standup",
          "start": "2026-10-19T09:00:00", "end": "2026-10-19T09:15:00" },
        { "id": "flight", "start": "2026-10-19T22:00:00", "end": "2026-10-20T03:30:00" },
        { "id": "offsite", "all_day": true,
          "start": "2026-10-20T00:00:00", "end": "2026-10-21T00:00:00" }
    ]"#;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn parses_and_slices_entries_per_day() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let source = JsonFileSource::open(file.path()).unwrap();
        assert_eq!(source.entries().len(), 3);
        assert_eq!(source.path(), file.path());

        let monday = source.events_for_day(day(19)).unwrap();
        assert_eq!(monday.len(), 2);
        assert_eq!(monday[0].id, "standup");
        assert_eq!(monday[0].end_fh, 9.25);
        assert_eq!(monday[0].calendar_id, "work");
        assert!(monday[1].multi_day);

        let tuesday = source.events_for_day(day(20)).unwrap();
        let ids: Vec<_> = tuesday.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["flight", "offsite"]);
        assert_eq!(tuesday[0].end_fh, 3.5);
        assert!(tuesday[1].all_day);

        // all-day end at midnight is exclusive
        let wednesday = source.events_for_day(day(21)).unwrap();
        assert!(wednesday.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = JsonFileSource::open("/nonexistent/daygrid/events.json").unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"not\": \"a list\"}").unwrap();
        let err = JsonFileSource::open(file.path()).unwrap_err();
        assert!(matches!(err, SourceError::Parse { .. }));
    }

    #[test]
    fn entry_ending_at_midnight_is_single_day() {
        let entry = CalendarEntry {
            id: "late".into(),
            calendar_id: String::new(),
            title: None,
            start: day(19).and_hms_opt(21, 0, 0).unwrap(),
            end: midnight(day(20)),
            all_day: false,
        };
        let event = entry.on_day(day(19)).unwrap();
        assert_eq!(event.end_fh, 24.0);
        assert!(!event.multi_day);
        assert!(entry.on_day(day(20)).is_none());

        let source = JsonFileSource::from_entries(vec![entry]);
        assert_eq!(source.events_for_day(day(19)).unwrap(), vec![event]);
    }
}
