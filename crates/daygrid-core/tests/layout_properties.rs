//! Property tests for the layout invariants.

use std::collections::HashMap;

use daygrid_core::{layout_day, DayLayout, Event, LayoutConfig, LayoutEngine};
use proptest::prelude::*;

/// Events on a quarter-hour grid, so overlaps and touches are common.
fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((0u32..95, 1u32..16), 0..40).prop_map(|slots| {
        slots
            .into_iter()
            .enumerate()
            .map(|(i, (start, len))| {
                let start_fh = start as f64 / 4.0;
                let end_fh = ((start + len).min(96)) as f64 / 4.0;
                Event::timed(format!("e{i}"), start_fh, end_fh)
            })
            .collect()
    })
}

fn max_simultaneous(events: &[&Event]) -> usize {
    events
        .iter()
        .map(|probe| {
            events
                .iter()
                .filter(|e| e.start_fh <= probe.start_fh && probe.start_fh < e.end_fh)
                .count()
        })
        .max()
        .unwrap_or(0)
}

fn run(events: &[Event]) -> DayLayout {
    layout_day(events, 2400.0, 700.0).unwrap()
}

proptest! {
    #[test]
    fn same_column_events_never_overlap(events in arb_events()) {
        let layout = run(&events);
        for (i, a) in layout.placed.iter().enumerate() {
            for b in &layout.placed[i + 1..] {
                if a.placed.event.overlaps(&b.placed.event) {
                    prop_assert_eq!(a.placed.column_count, b.placed.column_count);
                    prop_assert_ne!(a.placed.column, b.placed.column);
                }
            }
        }
    }

    #[test]
    fn every_event_is_placed_exactly_once(events in arb_events()) {
        let layout = run(&events);
        prop_assert_eq!(layout.placed.len(), events.len());
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for p in &layout.placed {
            *counts.entry(p.placed.event.id.as_str()).or_default() += 1;
        }
        prop_assert!(events.iter().all(|e| counts.get(e.id.as_str()) == Some(&1)));
    }

    #[test]
    fn layout_is_deterministic(events in arb_events()) {
        prop_assert_eq!(run(&events), run(&events));
    }

    #[test]
    fn column_count_matches_peak_overlap(events in arb_events()) {
        let layout = run(&events);
        // rebuild groups from the sweep order: a group ends where the running
        // maximum end is reached by the next start
        let mut group: Vec<&Event> = Vec::new();
        let mut group_end = f64::NEG_INFINITY;
        let mut counts: Vec<usize> = Vec::new();
        let mut groups: Vec<Vec<&Event>> = Vec::new();
        for p in &layout.placed {
            let e = &p.placed.event;
            if !group.is_empty() && e.start_fh >= group_end {
                groups.push(std::mem::take(&mut group));
                group_end = f64::NEG_INFINITY;
            }
            group_end = group_end.max(e.end_fh);
            group.push(e);
            counts.push(p.placed.column_count);
        }
        if !group.is_empty() {
            groups.push(group);
        }

        let mut offset = 0;
        for members in &groups {
            let expected = max_simultaneous(members);
            for count in &counts[offset..offset + members.len()] {
                prop_assert_eq!(*count, expected);
            }
            offset += members.len();
        }
        prop_assert_eq!(groups.len(), layout.group_count());
    }

    #[test]
    fn rects_stay_inside_the_day(events in arb_events()) {
        let layout = run(&events);
        for p in &layout.placed {
            prop_assert!(p.rect.x >= 0.0 && p.rect.right() <= 700.0 + 1e-9);
            prop_assert!(p.rect.y >= 0.0 && p.rect.bottom() <= 2400.0 + 1e-9);
            prop_assert!(p.placed.column < p.placed.column_count);
        }
    }

    #[test]
    fn stretched_rects_never_intersect(events in arb_events(), min_height in 1.0f64..200.0) {
        let config = LayoutConfig {
            min_event_height_px: min_height,
            ..LayoutConfig::default()
        };
        let layout = LayoutEngine::from_config(&config).unwrap().layout_day(&events);
        const EPS: f64 = 1e-6;
        for (i, a) in layout.placed.iter().enumerate() {
            prop_assert!(a.rect.bottom() <= 2400.0 + EPS);
            for b in &layout.placed[i + 1..] {
                let (ra, rb) = (a.rect, b.rect);
                let horizontal = ra.x < rb.right() - EPS && rb.x < ra.right() - EPS;
                let vertical = ra.y < rb.bottom() - EPS && rb.y < ra.bottom() - EPS;
                prop_assert!(
                    !(horizontal && vertical),
                    "{} {:?} intersects {} {:?}",
                    a.placed.event.id,
                    ra,
                    b.placed.event.id,
                    rb
                );
            }
        }
    }
}
