//! Inclusive datetime windows for filtering events.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{AgendaError, AgendaResult};

/// An inclusive `[start, end]` window in local calendar time.
#[derive(Debug, Clone, PartialEq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Parse a pair of `YYYY-MM-DD` strings into a range spanning whole
    /// days: start of the first day through end of the last.
    pub fn from_args(from: &str, to: &str) -> AgendaResult<Self> {
        Ok(DateRange {
            start: parse_date_start(from)?,
            end: parse_date_end(to)?,
        })
    }

    /// The Sunday-through-Saturday week containing `date`.
    pub fn week_of(date: NaiveDate) -> Self {
        let sunday = date - Duration::days(i64::from(date.weekday().num_days_from_sunday()));
        DateRange {
            start: start_of_day(sunday),
            end: end_of_day(sunday + Duration::days(6)),
        }
    }

    /// The first through last day of the month containing `date`.
    pub fn month_of(date: NaiveDate) -> Self {
        let first = date.with_day(1).unwrap();
        let last = match first.checked_add_months(Months::new(1)) {
            Some(next_month) => next_month - Duration::days(1),
            None => first,
        };
        DateRange {
            start: start_of_day(first),
            end: end_of_day(last),
        }
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at <= self.end
    }

    /// Whether `[start, end]` intersects this range, inclusive on both
    /// sides.
    pub fn intersects(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start <= self.end && end >= self.start
    }
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_milli_opt(23, 59, 59, 999).unwrap()
}

/// Parse YYYY-MM-DD as the start of that day
fn parse_date_start(s: &str) -> AgendaResult<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AgendaError::InvalidDate(s.to_string()))?;
    Ok(start_of_day(date))
}

/// Parse YYYY-MM-DD as the end of that day
fn parse_date_end(s: &str) -> AgendaResult<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| AgendaError::InvalidDate(s.to_string()))?;
    Ok(end_of_day(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_of_runs_sunday_through_saturday() {
        // 2025-07-01 is a Tuesday.
        let range = DateRange::week_of(date(2025, 7, 1));
        assert_eq!(range.start, start_of_day(date(2025, 6, 29)));
        assert_eq!(range.end, end_of_day(date(2025, 7, 5)));
    }

    #[test]
    fn test_week_of_a_sunday_starts_on_that_day() {
        let range = DateRange::week_of(date(2025, 6, 29));
        assert_eq!(range.start, start_of_day(date(2025, 6, 29)));
    }

    #[test]
    fn test_month_of_spans_the_full_month() {
        let range = DateRange::month_of(date(2025, 7, 15));
        assert_eq!(range.start, start_of_day(date(2025, 7, 1)));
        assert_eq!(range.end, end_of_day(date(2025, 7, 31)));
    }

    #[test]
    fn test_month_of_december_ends_inside_the_year() {
        let range = DateRange::month_of(date(2025, 12, 3));
        assert_eq!(range.end, end_of_day(date(2025, 12, 31)));
    }

    #[test]
    fn test_month_of_february_leap_year() {
        let range = DateRange::month_of(date(2024, 2, 10));
        assert_eq!(range.end, end_of_day(date(2024, 2, 29)));
    }

    #[test]
    fn test_from_args_spans_whole_days() {
        let range = DateRange::from_args("2025-07-01", "2025-07-10").unwrap();
        assert_eq!(range.start, start_of_day(date(2025, 7, 1)));
        assert_eq!(range.end, end_of_day(date(2025, 7, 10)));
    }

    #[test]
    fn test_from_args_rejects_malformed_dates() {
        let result = DateRange::from_args("2025/07/01", "2025-07-10");
        assert!(matches!(result, Err(AgendaError::InvalidDate(_))));
    }

    #[test]
    fn test_contains_is_inclusive_at_both_ends() {
        let range = DateRange::from_args("2025-07-01", "2025-07-10").unwrap();
        assert!(range.contains(range.start));
        assert!(range.contains(range.end));
        assert!(!range.contains(range.start - Duration::seconds(1)));
        assert!(!range.contains(range.end + Duration::seconds(1)));
    }

    #[test]
    fn test_intersects_counts_touching_bounds() {
        let range = DateRange::from_args("2025-07-05", "2025-07-10").unwrap();
        // Ends exactly where the range starts: still counts.
        assert!(range.intersects(start_of_day(date(2025, 7, 1)), range.start));
        assert!(!range.intersects(
            start_of_day(date(2025, 7, 1)),
            range.start - Duration::seconds(1)
        ));
    }
}
