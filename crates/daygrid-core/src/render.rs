//! Rendering seam.
//!
//! Layout produces rectangles; a [`Canvas`] turns them into output. The
//! engine never calls a canvas itself.

use chrono::NaiveDate;

use crate::event::HOURS_PER_DAY;
use crate::layout::{DayLayout, Rect, WeekLayout};

/// Anything that can draw a laid-out day.
pub trait Canvas {
    fn draw_day(&mut self, date: NaiveDate, layout: &DayLayout);

    fn draw_week(&mut self, week: &WeekLayout) {
        for day in &week.days {
            self.draw_day(day.date, &day.layout);
        }
    }
}

/// Keeps every drawn rect list, in draw order.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    frames: Vec<(NaiveDate, Vec<(String, Rect)>)>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[(NaiveDate, Vec<(String, Rect)>)] {
        &self.frames
    }

    /// Rects drawn for `date` by the most recent frame.
    pub fn rects_for(&self, date: NaiveDate) -> Option<&[(String, Rect)]> {
        self.frames
            .iter()
            .rev()
            .find(|(d, _)| *d == date)
            .map(|(_, rects)| rects.as_slice())
    }
}

impl Canvas for RecordingCanvas {
    fn draw_day(&mut self, date: NaiveDate, layout: &DayLayout) {
        let rects = layout
            .placed
            .iter()
            .map(|p| (p.placed.event.id.clone(), p.rect))
            .collect();
        self.frames.push((date, rects));
    }
}

/// Draws days as fixed-width text, one row per hour.
#[derive(Debug, Clone)]
pub struct TextCanvas {
    line_width: usize,
    output: String,
}

impl TextCanvas {
    pub fn new(line_width: usize) -> Self {
        Self {
            line_width: line_width.max(8),
            output: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_string(self) -> String {
        self.output
    }

    fn hour_row(&self, hour: f64, layout: &DayLayout) -> Option<String> {
        let mut cells = vec!['.'; self.line_width];
        let mut claimed = vec![false; self.line_width];
        let mut touched = false;
        let mut hidden = 0usize;
        let width = self.line_width as f64;

        for p in &layout.placed {
            let event = &p.placed.event;
            if event.end_fh <= hour || event.start_fh >= hour + 1.0 {
                continue;
            }
            touched = true;
            let left = p.placed.left_fraction();
            let from = ((left * width).round() as usize).min(self.line_width - 1);
            let to = ((left + p.placed.width_fraction()) * width).round() as usize;
            // narrow columns still get one cell
            let to = to.clamp(from + 1, self.line_width);
            if claimed[from..to].iter().all(|&c| c) {
                hidden += 1;
                continue;
            }

            let label = event.id.chars().chain(std::iter::repeat('#'));
            for (cell, ch) in cells[from..to].iter_mut().zip(label) {
                *cell = ch;
            }
            if to - from > 1 {
                cells[to - 1] = '|';
            }
            claimed[from..to].fill(true);
        }

        if !touched {
            return None;
        }
        let mut row: String = cells.into_iter().collect();
        if hidden > 0 {
            row.push_str(&format!(" +{hidden}"));
        }
        Some(row)
    }
}

impl Default for TextCanvas {
    fn default() -> Self {
        Self::new(48)
    }
}

impl Canvas for TextCanvas {
    fn draw_day(&mut self, date: NaiveDate, layout: &DayLayout) {
        self.output.push_str(&format!("{date}\n"));

        let mut hour = 0.0;
        while hour < HOURS_PER_DAY {
            if let Some(row) = self.hour_row(hour, layout) {
                self.output.push_str(&format!("{:02}:00 {row}\n", hour as u32));
            }
            hour += 1.0;
        }

        if !layout.forwarded.is_empty() {
            let ids: Vec<_> = layout.forwarded.iter().map(|e| e.id.as_str()).collect();
            self.output
                .push_str(&format!("all-day/multi-day: {}\n", ids.join(", ")));
        }
        for rejected in &layout.rejected {
            self.output.push_str(&format!("rejected: {}\n", rejected.error));
        }
    }
}
