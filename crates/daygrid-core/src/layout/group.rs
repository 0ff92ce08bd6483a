//! Overlap grouping.
//!
//! Partitions sorted events into connected components of the overlap graph.
//! The sweep keeps the running maximum end time of the open group, so a chain
//! A-B-C where only neighbours overlap still lands in one group.

use crate::event::Event;

/// A maximal run of time-connected events, in layout order.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapGroup {
    events: Vec<Event>,
    end_fh: f64,
}

impl OverlapGroup {
    fn open(first: Event) -> Self {
        Self {
            end_fh: first.end_fh,
            events: vec![first],
        }
    }

    fn push(&mut self, event: Event) {
        self.end_fh = self.end_fh.max(event.end_fh);
        self.events.push(event);
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Earliest start in the group.
    pub fn start_fh(&self) -> f64 {
        self.events.first().map_or(0.0, |e| e.start_fh)
    }

    /// Latest end in the group.
    pub fn end_fh(&self) -> f64 {
        self.end_fh
    }

    pub fn into_events(self) -> Vec<Event> {
        self.events
    }
}

/// Split events (already in layout order) into overlap groups.
pub fn group_overlaps(sorted: &[Event]) -> Vec<OverlapGroup> {
    debug_assert!(
        sorted.windows(2).all(|w| w[0].start_fh <= w[1].start_fh),
        "group_overlaps expects events sorted by start"
    );

    let mut groups = Vec::new();
    let mut current: Option<OverlapGroup> = None;

    for event in sorted {
        if let Some(group) = current.as_mut() {
            if event.start_fh < group.end_fh {
                group.push(event.clone());
                continue;
            }
        }
        if let Some(done) = current.replace(OverlapGroup::open(event.clone())) {
            groups.push(done);
        }
    }
    groups.extend(current);
    groups
}
