//! Overlap detection between events.
//!
//! Everything reduces to one interval test: two events collide when their
//! `[start, end)` datetime ranges intersect. Events with malformed dates or
//! times get an invalid range, and an invalid range never overlaps
//! anything — bad input yields no matches instead of an error.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::date_range::DateRange;
use crate::event::Event;
use crate::recurrence::expand_event;

/// Combine a `YYYY-MM-DD` date and `HH:MM` time into a datetime.
///
/// `None` is the explicit invalid value; every comparison downstream treats
/// it as "never overlaps".
pub fn parse_date_time(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H:%M").ok()?;
    Some(date.and_time(time))
}

/// The datetime interval an event occupies, or `Invalid` when any of its
/// date/time fields failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventRange {
    Valid {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
    Invalid,
}

impl EventRange {
    /// Half-open intersection test. Ranges that merely touch at an endpoint
    /// do not overlap, and `Invalid` overlaps nothing.
    pub fn overlaps(&self, other: &EventRange) -> bool {
        match (self, other) {
            (
                EventRange::Valid {
                    start: a_start,
                    end: a_end,
                },
                EventRange::Valid {
                    start: b_start,
                    end: b_end,
                },
            ) => a_start < b_end && b_start < a_end,
            _ => false,
        }
    }
}

/// The interval `event` occupies on its own date.
pub fn event_range(event: &Event) -> EventRange {
    match (
        parse_date_time(&event.date, &event.start_time),
        parse_date_time(&event.date, &event.end_time),
    ) {
        (Some(start), Some(end)) => EventRange::Valid { start, end },
        _ => EventRange::Invalid,
    }
}

/// Whether two events collide in time.
pub fn is_overlapping(a: &Event, b: &Event) -> bool {
    event_range(a).overlaps(&event_range(b))
}

/// Existing events that collide with any occurrence of `candidate`.
///
/// The candidate is expanded first, so a repeating event checks every one
/// of its occurrences. An existing event sharing the candidate's id is
/// skipped (updating an event must not flag the event itself), and each
/// existing event is reported at most once, in first-match order.
pub fn find_overlapping_events(candidate: &Event, existing: &[Event]) -> Vec<Event> {
    collect_overlapping(candidate, existing, |_| true)
}

/// Like [`find_overlapping_events`], but an occurrence is only considered
/// when its own interval touches `window` (inclusive on both ends).
pub fn find_overlapping_events_in_date_range(
    candidate: &Event,
    existing: &[Event],
    window: &DateRange,
) -> Vec<Event> {
    collect_overlapping(candidate, existing, |occurrence| {
        match event_range(occurrence) {
            EventRange::Valid { start, end } => window.intersects(start, end),
            EventRange::Invalid => false,
        }
    })
}

/// One occurrence of a repeating candidate together with every existing
/// event it collides with.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapDetail {
    pub occurrence: Event,
    pub overlapping: Vec<Event>,
}

/// Per-occurrence collision report for `candidate`.
///
/// Occurrences with no collisions are omitted. Unlike
/// [`find_overlapping_events`] nothing is deduplicated: an existing event
/// colliding with three occurrences shows up under all three.
pub fn find_detailed_overlapping_events(
    candidate: &Event,
    existing: &[Event],
) -> Vec<OverlapDetail> {
    let mut details = Vec::new();

    for occurrence in expand_event(candidate) {
        let overlapping: Vec<Event> = existing
            .iter()
            .filter(|event| !excluded_as_self(candidate, event))
            .filter(|event| is_overlapping(event, &occurrence))
            .cloned()
            .collect();

        if !overlapping.is_empty() {
            details.push(OverlapDetail {
                occurrence,
                overlapping,
            });
        }
    }

    details
}

fn collect_overlapping(
    candidate: &Event,
    existing: &[Event],
    occurrence_qualifies: impl Fn(&Event) -> bool,
) -> Vec<Event> {
    // Dedup by position in `existing`: the same event matched by several
    // occurrences is reported once, when first hit.
    let mut seen = vec![false; existing.len()];
    let mut found = Vec::new();

    for occurrence in expand_event(candidate) {
        if !occurrence_qualifies(&occurrence) {
            continue;
        }
        for (index, event) in existing.iter().enumerate() {
            if seen[index] || excluded_as_self(candidate, event) {
                continue;
            }
            if is_overlapping(event, &occurrence) {
                seen[index] = true;
                found.push(event.clone());
            }
        }
    }

    found
}

fn excluded_as_self(candidate: &Event, event: &Event) -> bool {
    candidate.id.is_some() && event.id == candidate.id
}
