//! Input filtering, validation and ordering.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;

use crate::error::ValidationError;
use crate::event::{Event, HOURS_PER_DAY};

/// An event excluded from the layout, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedEvent {
    pub event: Event,
    #[serde(serialize_with = "display_error")]
    pub error: ValidationError,
}

fn display_error<S: serde::Serializer>(err: &ValidationError, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(err)
}

/// Input split into the three lanes a layout pass cares about.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Normalized {
    /// Valid single-day events in layout order
    pub timed: Vec<Event>,
    /// Multi-day and all-day events, untouched
    pub forwarded: Vec<Event>,
    pub rejected: Vec<RejectedEvent>,
}

/// Check that an event fits the timed lane.
pub fn validate(event: &Event) -> Result<(), ValidationError> {
    for (field, value) in [("start_fh", event.start_fh), ("end_fh", event.end_fh)] {
        if !value.is_finite() {
            return Err(ValidationError::NotFinite {
                id: event.id.clone(),
                field,
            });
        }
        if !(0.0..=HOURS_PER_DAY).contains(&value) {
            return Err(ValidationError::OutOfRange {
                id: event.id.clone(),
                field,
                value,
            });
        }
    }
    if event.start_fh >= event.end_fh {
        return Err(ValidationError::InvalidTimeRange {
            id: event.id.clone(),
            start: event.start_fh,
            end: event.end_fh,
        });
    }
    Ok(())
}

/// Layout order: start ascending, then end ascending, then id.
pub fn layout_order(a: &Event, b: &Event) -> Ordering {
    a.start_fh
        .total_cmp(&b.start_fh)
        .then_with(|| a.end_fh.total_cmp(&b.end_fh))
        .then_with(|| a.id.cmp(&b.id))
}

/// Split, validate and sort one day's raw events.
///
/// Duplicate ids are resolved in input order: the first valid event keeps
/// the id, later ones are rejected.
pub fn normalize(events: &[Event]) -> Normalized {
    let mut out = Normalized::default();
    let mut seen: HashSet<&str> = HashSet::with_capacity(events.len());

    for event in events {
        if event.is_spanning() {
            out.forwarded.push(event.clone());
            continue;
        }
        let checked = validate(event).and_then(|()| {
            if seen.insert(event.id.as_str()) {
                Ok(())
            } else {
                Err(ValidationError::DuplicateId {
                    id: event.id.clone(),
                })
            }
        });
        match checked {
            Ok(()) => out.timed.push(event.clone()),
            Err(error) => out.rejected.push(RejectedEvent {
                event: event.clone(),
                error,
            }),
        }
    }

    out.timed.sort_by(layout_order);
    out
}
