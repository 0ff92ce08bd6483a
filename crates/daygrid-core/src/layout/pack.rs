//! Column packing within an overlap group.
//!
//! Greedy interval-graph coloring in layout order. Each event takes the
//! leftmost column that is free at its start, so the column count equals the
//! largest number of events live at one instant.

use serde::{Deserialize, Serialize};

use super::group::OverlapGroup;
use crate::event::{Event, HOURS_PER_DAY};

/// An event with its horizontal slot and normalized vertical extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedEvent {
    pub event: Event,
    pub column: usize,
    pub column_count: usize,
    /// `start_fh / 24`
    pub top_fraction: f64,
    /// `(end_fh - start_fh) / 24`
    pub height_fraction: f64,
}

impl PlacedEvent {
    /// Left edge as a share of the day width.
    pub fn left_fraction(&self) -> f64 {
        self.column as f64 / self.column_count as f64
    }

    /// Width as a share of the day width.
    pub fn width_fraction(&self) -> f64 {
        1.0 / self.column_count as f64
    }
}

/// Assign columns to every event of one group.
pub fn pack_group(group: OverlapGroup) -> Vec<PlacedEvent> {
    let events = group.into_events();
    let mut column_ends: Vec<f64> = Vec::new();
    let mut columns = Vec::with_capacity(events.len());

    for event in &events {
        let column = match column_ends.iter().position(|&end| end <= event.start_fh) {
            Some(free) => {
                column_ends[free] = event.end_fh;
                free
            }
            None => {
                column_ends.push(event.end_fh);
                column_ends.len() - 1
            }
        };
        columns.push(column);
    }

    let column_count = column_ends.len();
    events
        .into_iter()
        .zip(columns)
        .map(|(event, column)| place(event, column, column_count))
        .collect()
}

fn place(event: Event, column: usize, column_count: usize) -> PlacedEvent {
    PlacedEvent {
        top_fraction: event.start_fh / HOURS_PER_DAY,
        height_fraction: event.duration_hours() / HOURS_PER_DAY,
        event,
        column,
        column_count,
    }
}
