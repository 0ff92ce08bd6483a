//! Calendar event model.
//!
//! Times are stored as *float hours*: the integer part is the hour of day and
//! the fraction is the elapsed share of that hour (9:15 is `9.25`). The day
//! runs from `0.0` to `24.0`; an event ending at midnight ends at `24.0`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Hours in one day, the upper bound of the float-hour range.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Convert a wall-clock time to float hours.
pub fn float_hour(time: NaiveTime) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0 + time.second() as f64 / 3600.0
}

/// A calendar event instance for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub start_fh: f64,
    pub end_fh: f64,
    #[serde(default)]
    pub multi_day: bool,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub calendar_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Event {
    /// Create a timed single-day event.
    pub fn timed(id: impl Into<String>, start_fh: f64, end_fh: f64) -> Self {
        Self {
            id: id.into(),
            start_fh,
            end_fh,
            multi_day: false,
            all_day: false,
            calendar_id: String::new(),
            title: None,
        }
    }

    /// Create an all-day event covering the whole of its day.
    pub fn all_day(id: impl Into<String>) -> Self {
        Self {
            all_day: true,
            ..Self::timed(id, 0.0, HOURS_PER_DAY)
        }
    }

    /// Build the slice of `[start, end)` that falls on `day`.
    ///
    /// Returns `None` when the range does not touch `day` at all. A range that
    /// starts before or ends after `day` is clipped and flagged `multi_day`,
    /// except for an end exactly at the following midnight, which is `24.0`.
    pub fn from_times(
        id: impl Into<String>,
        day: NaiveDate,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Option<Self> {
        let day_start = day.and_time(NaiveTime::MIN);
        let day_end = day.succ_opt()?.and_time(NaiveTime::MIN);
        if end <= day_start || start >= day_end {
            return None;
        }

        let start_fh = if start < day_start {
            0.0
        } else {
            float_hour(start.time())
        };
        let end_fh = if end >= day_end {
            HOURS_PER_DAY
        } else {
            float_hour(end.time())
        };

        let mut event = Self::timed(id, start_fh, end_fh);
        event.multi_day = start < day_start || end > day_end;
        Some(event)
    }

    pub fn with_calendar(mut self, calendar_id: impl Into<String>) -> Self {
        self.calendar_id = calendar_id.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Whether this event belongs to the multi-day/all-day lane.
    pub fn is_spanning(&self) -> bool {
        self.multi_day || self.all_day
    }

    /// Length in hours.
    pub fn duration_hours(&self) -> f64 {
        self.end_fh - self.start_fh
    }

    /// Half-open overlap check: events that only touch do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_fh < other.end_fh && other.start_fh < self.end_fh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: NaiveDate, h: u32, m: u32) -> NaiveDateTime {
        date.and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn float_hour_encodes_minutes_as_fraction() {
        assert_eq!(float_hour(NaiveTime::from_hms_opt(9, 15, 0).unwrap()), 9.25);
        assert_eq!(float_hour(NaiveTime::from_hms_opt(0, 0, 0).unwrap()), 0.0);
        assert_eq!(float_hour(NaiveTime::from_hms_opt(23, 30, 0).unwrap()), 23.5);
    }

    #[test]
    fn from_times_single_day() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let event = Event::from_times("a", day, at(day, 9, 15), at(day, 10, 45)).unwrap();
        assert_eq!(event.start_fh, 9.25);
        assert_eq!(event.end_fh, 10.75);
        assert!(!event.multi_day);
    }

    #[test]
    fn from_times_ending_at_midnight_stays_single_day() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let next = day.succ_opt().unwrap();
        let event = Event::from_times("late", day, at(day, 22, 0), at(next, 0, 0)).unwrap();
        assert_eq!(event.end_fh, 24.0);
        assert!(!event.multi_day);
    }

    #[test]
    fn from_times_crossing_midnight_is_multi_day() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let next = day.succ_opt().unwrap();

        let first = Event::from_times("trip", day, at(day, 22, 0), at(next, 2, 0)).unwrap();
        assert!(first.multi_day);
        assert_eq!((first.start_fh, first.end_fh), (22.0, 24.0));

        let second = Event::from_times("trip", next, at(day, 22, 0), at(next, 2, 0)).unwrap();
        assert!(second.multi_day);
        assert_eq!((second.start_fh, second.end_fh), (0.0, 2.0));
    }

    #[test]
    fn from_times_outside_day_is_none() {
        let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let other = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap();
        assert!(Event::from_times("x", day, at(other, 9, 0), at(other, 10, 0)).is_none());
    }

    #[test]
    fn touching_events_do_not_overlap() {
        let a = Event::timed("a", 9.0, 10.0);
        let b = Event::timed("b", 10.0, 11.0);
        let c = Event::timed("c", 9.5, 10.5);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn all_day_events_are_spanning() {
        assert!(Event::all_day("holiday").is_spanning());
        assert!(!Event::timed("a", 1.0, 2.0).is_spanning());
    }
}
