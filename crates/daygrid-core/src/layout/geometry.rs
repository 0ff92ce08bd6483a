//! Projection of placed events into pixel rectangles.

use serde::{Deserialize, Serialize};

use super::pack::PlacedEvent;
use crate::error::GeometryError;
use crate::event::HOURS_PER_DAY;

/// Axis-aligned rectangle in pixels, origin at the top-left of the day column.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Pixel size of one day column plus optional insets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayDimensions {
    height: f64,
    width: f64,
    column_gap: f64,
    min_event_height: f64,
}

impl DayDimensions {
    /// Validate a day size.
    ///
    /// # Errors
    /// Returns [`GeometryError::NonPositive`] when either side is zero,
    /// negative or NaN.
    pub fn new(height: f64, width: f64) -> Result<Self, GeometryError> {
        for (dimension, value) in [("height", height), ("width", width)] {
            if value <= 0.0 || !value.is_finite() {
                return Err(GeometryError::NonPositive { dimension, value });
            }
        }
        Ok(Self {
            height,
            width,
            column_gap: 0.0,
            min_event_height: 0.0,
        })
    }

    /// Pixels trimmed from the right side of every rect.
    pub fn with_column_gap(mut self, gap: f64) -> Result<Self, GeometryError> {
        self.column_gap = non_negative("column_gap_px", gap)?;
        Ok(self)
    }

    /// Smallest rendered height for short events.
    pub fn with_min_event_height(mut self, min: f64) -> Result<Self, GeometryError> {
        self.min_event_height = non_negative("min_event_height_px", min)?;
        Ok(self)
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn min_event_height(&self) -> f64 {
        self.min_event_height
    }

    /// Pixel rect for a placed event.
    pub fn project(&self, placed: &PlacedEvent) -> Rect {
        self.project_within(placed, HOURS_PER_DAY)
    }

    /// Pixel rect for a placed event whose minimum-height stretch must stop
    /// at `limit_fh`, the start of the next event drawn below it.
    pub fn project_within(&self, placed: &PlacedEvent, limit_fh: f64) -> Rect {
        let event = &placed.event;
        let columns = placed.column_count.max(1) as f64;

        let y = event.start_fh * self.height / HOURS_PER_DAY;
        let mut height = (event.end_fh - event.start_fh) * self.height / HOURS_PER_DAY;
        if height < self.min_event_height {
            let limit = limit_fh.min(HOURS_PER_DAY) * self.height / HOURS_PER_DAY;
            height = self.min_event_height.min(limit - y).max(height);
        }

        let slot = self.width / columns;
        Rect {
            x: placed.column as f64 * self.width / columns,
            y,
            width: (slot - self.column_gap).max(0.0),
            height,
        }
    }
}

fn non_negative(setting: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value >= 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::Negative { setting, value })
    }
}

/// One-shot projection with bare dimensions.
///
/// # Errors
/// Returns [`GeometryError`] for non-positive dimensions.
pub fn project(
    placed: &PlacedEvent,
    day_height_px: f64,
    day_width_px: f64,
) -> Result<Rect, GeometryError> {
    Ok(DayDimensions::new(day_height_px, day_width_px)?.project(placed))
}
