//! # daygrid Core Library
//!
//! Lays out one day's calendar events as non-overlapping rectangles on a
//! 24-hour vertical timeline, placing overlapping events side by side.
//!
//! ## Pipeline
//!
//! `events -> normalize -> sort -> group -> pack -> project`
//!
//! - **Normalize**: multi-day and all-day events are forwarded untouched,
//!   malformed events are rejected individually
//! - **Group**: connected components of the overlap graph, found with a
//!   single sweep over the running maximum end time
//! - **Pack**: greedy leftmost-free column assignment; every event in a group
//!   shares the group's column count
//! - **Project**: float hours and columns to pixel rectangles
//!
//! ## Key Components
//!
//! - [`layout_day`]: one-shot day layout
//! - [`LayoutEngine`]: day/week layout bound to configured dimensions
//! - [`CalendarSource`]: injected event provider
//! - [`Canvas`]: rendering seam fed with computed layouts
//! - [`Config`]: TOML configuration

pub mod error;
pub mod event;
pub mod layout;
pub mod render;
pub mod source;
pub mod storage;

pub use error::{ConfigError, CoreError, GeometryError, Result, SourceError, ValidationError};
pub use event::{float_hour, Event, HOURS_PER_DAY};
pub use layout::{
    layout_day, layout_week, DayColumn, DayDimensions, DayLayout, LayoutEngine, OverlapGroup,
    PlacedEvent, PositionedEvent, Rect, RejectedEvent, WeekLayout,
};
pub use render::{Canvas, RecordingCanvas, TextCanvas};
pub use source::{CalendarEntry, CalendarSource, InMemorySource, JsonFileSource};
pub use storage::{Config, LayoutConfig};
