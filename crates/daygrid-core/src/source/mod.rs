//! Calendar sources.
//!
//! A source answers "which events fall on this date" with events already
//! resolved to one day in one timezone. Sources are handed to the engine
//! explicitly; there is no shared default instance.

mod json_file;

pub use json_file::{CalendarEntry, JsonFileSource};

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::SourceError;
use crate::event::Event;

/// Every calendar backend implements this trait.
pub trait CalendarSource: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    /// Events touching `date`, in source order.
    fn events_for_day(&self, date: NaiveDate) -> Result<Vec<Event>, SourceError>;
}

/// Events held in memory, keyed by date.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    days: HashMap<NaiveDate, Vec<Event>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event to `date`.
    pub fn insert(&mut self, date: NaiveDate, event: Event) {
        self.days.entry(date).or_default().push(event);
    }

    pub fn with_event(mut self, date: NaiveDate, event: Event) -> Self {
        self.insert(date, event);
        self
    }
}

impl CalendarSource for InMemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    fn events_for_day(&self, date: NaiveDate) -> Result<Vec<Event>, SourceError> {
        Ok(self.days.get(&date).cloned().unwrap_or_default())
    }
}
