//! Day and week layout passes.
//!
//! A pass runs `normalize -> group -> pack -> project` over one day's events
//! and holds no state between calls. Days are independent, so a week is laid
//! out on scoped threads, one per day.

use chrono::{Days, NaiveDate};
use serde::Serialize;
use tracing::{debug, warn};

use super::geometry::{DayDimensions, Rect};
use super::group::group_overlaps;
use super::normalize::{normalize, RejectedEvent};
use super::pack::{pack_group, PlacedEvent};
use crate::error::{CoreError, GeometryError};
use crate::event::{Event, HOURS_PER_DAY};
use crate::source::CalendarSource;
use crate::storage::LayoutConfig;

/// A placed event together with its pixel rect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedEvent {
    #[serde(flatten)]
    pub placed: PlacedEvent,
    pub rect: Rect,
}

/// Result of laying out one day.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DayLayout {
    /// Timed events in layout order
    pub placed: Vec<PositionedEvent>,
    /// Multi-day and all-day events for the separate lane
    pub forwarded: Vec<Event>,
    /// Events excluded by validation
    pub rejected: Vec<RejectedEvent>,
    #[serde(skip)]
    group_count: usize,
}

impl DayLayout {
    /// Number of overlap groups the timed events formed.
    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Widest group's column count, 0 for an empty day.
    pub fn max_column_count(&self) -> usize {
        self.placed
            .iter()
            .map(|p| p.placed.column_count)
            .max()
            .unwrap_or(0)
    }

    pub fn find(&self, id: &str) -> Option<&PositionedEvent> {
        self.placed.iter().find(|p| p.placed.event.id == id)
    }
}

/// One day column of a week layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub layout: DayLayout,
}

/// Consecutive day columns, in date order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WeekLayout {
    pub days: Vec<DayColumn>,
}

/// Layout driver bound to a set of day dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    dims: DayDimensions,
}

impl LayoutEngine {
    pub fn new(dims: DayDimensions) -> Self {
        Self { dims }
    }

    /// Build an engine from the `[layout]` config section.
    ///
    /// # Errors
    /// Returns [`GeometryError`] when the configured sizes are invalid.
    pub fn from_config(config: &LayoutConfig) -> Result<Self, GeometryError> {
        Ok(Self::new(config.dimensions()?))
    }

    pub fn dimensions(&self) -> DayDimensions {
        self.dims
    }

    /// Lay out one day's events.
    pub fn layout_day(&self, events: &[Event]) -> DayLayout {
        let normalized = normalize(events);
        for rejected in &normalized.rejected {
            warn!(
                event_id = rejected.error.event_id(),
                "Excluding event from layout: {}", rejected.error
            );
        }

        let groups = group_overlaps(&normalized.timed);
        let group_count = groups.len();
        let packed: Vec<PlacedEvent> = groups.into_iter().flat_map(pack_group).collect();
        let stretch = self.dims.min_event_height() > 0.0;
        let placed: Vec<PositionedEvent> = packed
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let limit = if stretch {
                    next_start_below(p, &packed[i + 1..])
                } else {
                    HOURS_PER_DAY
                };
                PositionedEvent {
                    rect: self.dims.project_within(p, limit),
                    placed: p.clone(),
                }
            })
            .collect();

        debug!(
            placed = placed.len(),
            groups = group_count,
            forwarded = normalized.forwarded.len(),
            rejected = normalized.rejected.len(),
            "Laid out day"
        );

        DayLayout {
            placed,
            forwarded: normalized.forwarded,
            rejected: normalized.rejected,
            group_count,
        }
    }

    /// Lay out `days` consecutive dates starting at `first_day`.
    ///
    /// The source is queried once per date before any layout runs. Days are
    /// laid out in batches of at most `available_parallelism` scoped threads.
    ///
    /// # Errors
    /// Returns [`CoreError::DateOutOfRange`] when the range passes the last
    /// representable date, otherwise the first source error.
    pub fn layout_days(
        &self,
        source: &dyn CalendarSource,
        first_day: NaiveDate,
        days: u32,
    ) -> crate::Result<WeekLayout> {
        if days > 0
            && first_day
                .checked_add_days(Days::new(u64::from(days) - 1))
                .is_none()
        {
            return Err(CoreError::DateOutOfRange { first_day, days });
        }

        let mut inputs = Vec::with_capacity(days as usize);
        for offset in 0..days {
            let date = first_day
                .checked_add_days(Days::new(offset.into()))
                .ok_or_else(|| CoreError::DateOutOfRange { first_day, days })?;
            inputs.push((date, source.events_for_day(date)?));
        }

        let workers = std::thread::available_parallelism().map_or(1, usize::from);
        let mut columns = Vec::with_capacity(inputs.len());
        for batch in inputs.chunks(workers) {
            std::thread::scope(|scope| {
                let handles: Vec<_> = batch
                    .iter()
                    .map(|(date, events)| {
                        let date = *date;
                        scope.spawn(move || DayColumn {
                            date,
                            layout: self.layout_day(events),
                        })
                    })
                    .collect();
                for handle in handles {
                    let column = handle
                        .join()
                        .unwrap_or_else(|payload| std::panic::resume_unwind(payload));
                    columns.push(column);
                }
            });
        }

        debug!(source = source.name(), %first_day, days, "Laid out days");
        Ok(WeekLayout { days: columns })
    }

    /// Lay out the seven days starting at `first_day`.
    ///
    /// # Errors
    /// Same as [`layout_days`](Self::layout_days).
    pub fn layout_week(
        &self,
        source: &dyn CalendarSource,
        first_day: NaiveDate,
    ) -> crate::Result<WeekLayout> {
        self.layout_days(source, first_day, 7)
    }
}

/// Earliest start among later events that share part of `placed`'s
/// horizontal span, or the end of the day.
fn next_start_below(placed: &PlacedEvent, later: &[PlacedEvent]) -> f64 {
    later
        .iter()
        .filter(|q| q.event.start_fh >= placed.event.end_fh && spans_intersect(placed, q))
        .map(|q| q.event.start_fh)
        .fold(HOURS_PER_DAY, f64::min)
}

/// `[a.column, a.column + 1) / a.count` meets `[b.column, b.column + 1) / b.count`,
/// compared without division.
fn spans_intersect(a: &PlacedEvent, b: &PlacedEvent) -> bool {
    a.column * b.column_count < (b.column + 1) * a.column_count
        && b.column * a.column_count < (a.column + 1) * b.column_count
}

/// Lay out one day with bare pixel dimensions.
///
/// # Errors
/// Returns [`GeometryError`] when either dimension is not positive. Invalid
/// events never fail the call; they are listed in [`DayLayout::rejected`].
pub fn layout_day(
    events: &[Event],
    day_height_px: f64,
    day_width_px: f64,
) -> Result<DayLayout, GeometryError> {
    let dims = DayDimensions::new(day_height_px, day_width_px)?;
    Ok(LayoutEngine::new(dims).layout_day(events))
}

/// Lay out the seven days starting at `first_day`, pulling events from `source`.
///
/// # Errors
/// Fails with [`CoreError::Geometry`](crate::CoreError::Geometry) before
/// touching the source, or as [`LayoutEngine::layout_days`] does.
pub fn layout_week(
    source: &dyn CalendarSource,
    first_day: NaiveDate,
    day_height_px: f64,
    day_width_px: f64,
) -> crate::Result<WeekLayout> {
    let dims = DayDimensions::new(day_height_px, day_width_px)?;
    LayoutEngine::new(dims).layout_week(source, first_day)
}
