//! Search and view-window filtering for the calendar pages.

use chrono::{NaiveDate, NaiveTime};

use crate::date_range::DateRange;
use crate::event::Event;

/// Which layout the calendar is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarView {
    Week,
    Month,
}

/// Events matching `search_term` that fall inside the week or month around
/// `current_date`.
///
/// The term matches case-insensitively against title, description and
/// location; an empty term matches everything. An event sits inside the
/// view when its date does — times are not consulted here, and an event
/// with an unparseable date is never shown.
pub fn filtered_events(
    events: &[Event],
    search_term: &str,
    current_date: NaiveDate,
    view: CalendarView,
) -> Vec<Event> {
    let window = match view {
        CalendarView::Week => DateRange::week_of(current_date),
        CalendarView::Month => DateRange::month_of(current_date),
    };

    events
        .iter()
        .filter(|event| matches_term(event, search_term))
        .filter(|event| in_window(event, &window))
        .cloned()
        .collect()
}

fn matches_term(event: &Event, term: &str) -> bool {
    contains_term(&event.title, term)
        || contains_term(&event.description, term)
        || contains_term(&event.location, term)
}

fn contains_term(target: &str, term: &str) -> bool {
    target.to_lowercase().contains(&term.to_lowercase())
}

fn in_window(event: &Event, window: &DateRange) -> bool {
    NaiveDate::parse_from_str(&event.date, "%Y-%m-%d")
        .map(|date| window.contains(date.and_time(NaiveTime::MIN)))
        .unwrap_or(false)
}
