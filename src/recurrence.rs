//! Recurrence expansion for repeating events.
//!
//! Expands one event definition into the full list of dated occurrences it
//! stands for: the anchor date first, then every repeat that lands on a real
//! calendar day, bounded by the rule's end date or the fixed horizon.

use chrono::{Datelike, Duration, NaiveDate};

use crate::constants::RECURRENCE_HORIZON;
use crate::event::{Event, RepeatType};

/// Expand `event` into its concrete occurrences, ordered by date.
///
/// The event's own date is always the first entry. Daily and weekly rules
/// step by `interval` days / weeks. Monthly and yearly rules keep the
/// anchor's day-of-month (and month), skipping any step where that day does
/// not exist — a 31st never lands in a 30-day month, and Feb 29 only recurs
/// in leap years. A skipped step still advances the cursor.
///
/// `interval` 0 counts as 1. An end date before the event's own date, or an
/// unparseable anchor date, leaves just the anchor occurrence.
pub fn expand_event(event: &Event) -> Vec<Event> {
    let mut occurrences = vec![event.clone()];

    if event.repeat.repeat_type == RepeatType::None {
        return occurrences;
    }

    let Some(anchor) = parse_date(&event.date) else {
        // Nothing to advance from; the invalid date string is the overlap
        // layer's problem.
        return occurrences;
    };

    // An absent or unparseable end date falls back to the horizon.
    let end = event
        .repeat
        .end_date
        .as_deref()
        .and_then(parse_date)
        .unwrap_or_else(|| parse_date(RECURRENCE_HORIZON).unwrap());

    let interval = u64::from(event.repeat.interval.max(1));

    match event.repeat.repeat_type {
        RepeatType::None => {}
        RepeatType::Daily => expand_by_days(event, anchor, end, interval, &mut occurrences),
        RepeatType::Weekly => expand_by_days(event, anchor, end, interval * 7, &mut occurrences),
        RepeatType::Monthly => expand_by_months(event, anchor, end, interval, &mut occurrences),
        RepeatType::Yearly => expand_by_months(event, anchor, end, interval * 12, &mut occurrences),
    }

    occurrences
}

fn expand_by_days(
    event: &Event,
    anchor: NaiveDate,
    end: NaiveDate,
    step_days: u64,
    out: &mut Vec<Event>,
) {
    let step = Duration::days(step_days as i64);
    let mut cursor = anchor;

    loop {
        cursor = match cursor.checked_add_signed(step) {
            Some(next) => next,
            None => break,
        };
        if cursor > end {
            break;
        }
        out.push(event.on_date(format_date(cursor)));
    }
}

/// Monthly stepping on the anchor's calendar fields. Yearly rules reuse
/// this with a step of `interval * 12` months: same month, same day, years
/// apart.
fn expand_by_months(
    event: &Event,
    anchor: NaiveDate,
    end: NaiveDate,
    step_months: u64,
    out: &mut Vec<Event>,
) {
    let mut shifted = step_months;

    loop {
        let months = u64::from(anchor.month0()) + shifted;
        let Ok(year) = i32::try_from(i64::from(anchor.year()) + (months / 12) as i64) else {
            break;
        };
        let month = (months % 12) as u32 + 1;

        match NaiveDate::from_ymd_opt(year, month, anchor.day()) {
            Some(date) if date > end => break,
            Some(date) => out.push(event.on_date(format_date(date))),
            None => {
                // The anchor's day is missing from this month: the step is
                // consumed without an occurrence. Stop once the month itself
                // is past the end date.
                match NaiveDate::from_ymd_opt(year, month, 1) {
                    Some(first) if first > end => break,
                    Some(_) => {}
                    None => break,
                }
            }
        }

        shifted += step_months;
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
