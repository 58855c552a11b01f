//! Notification scheduling.
//!
//! Decides which events are due for a reminder at a given instant. Actual
//! delivery (timers, toasts) lives in the UI layer; this module only
//! answers the pure "is it time yet" question.

use chrono::{Duration, NaiveDateTime};

use crate::event::Event;
use crate::overlap::parse_date_time;

/// Events whose notification window contains `now`.
///
/// An event is due when its start lies ahead of `now` by no more than
/// `notification_time` minutes and its id is not in `notified_ids`. Events
/// that already started, and events with malformed date/times, are never
/// due.
pub fn upcoming_events(
    events: &[Event],
    now: NaiveDateTime,
    notified_ids: &[String],
) -> Vec<Event> {
    events
        .iter()
        .filter(|event| is_due(event, now))
        .filter(|event| match &event.id {
            Some(id) => !notified_ids.contains(id),
            None => true,
        })
        .cloned()
        .collect()
}

fn is_due(event: &Event, now: NaiveDateTime) -> bool {
    let Some(start) = parse_date_time(&event.date, &event.start_time) else {
        return false;
    };
    let until_start = start - now;
    until_start > Duration::zero() && until_start <= Duration::minutes(event.notification_time)
}

/// The message the UI shows when an event comes due.
pub fn notification_message(event: &Event) -> String {
    format!(
        "'{}' starts in {} minutes",
        event.title, event.notification_time
    )
}
