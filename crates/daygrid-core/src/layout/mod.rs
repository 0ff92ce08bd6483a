//! Event layout engine.
//!
//! This module provides:
//! - Validation and ordering of one day's events
//! - Overlap grouping (connected components over the running maximum end)
//! - Greedy column packing with a uniform column count per group
//! - Projection of placed events into pixel rectangles

mod engine;
mod geometry;
mod group;
mod normalize;
mod pack;

pub use engine::{
    layout_day, layout_week, DayColumn, DayLayout, LayoutEngine, PositionedEvent, WeekLayout,
};
pub use geometry::{project, DayDimensions, Rect};
pub use group::{group_overlaps, OverlapGroup};
pub use normalize::{layout_order, normalize, validate, Normalized, RejectedEvent};
pub use pack::{pack_group, PlacedEvent};
