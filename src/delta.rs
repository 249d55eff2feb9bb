//! delta.rs
//!
//! Calendar-aware difference in the format:
//!     "X years, Y months, Z days"
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so we implement the calendar-aware borrowing rules manually.
//!
//! This logic correctly handles:
//!   • month underflow (borrowing from years)
//!   • day underflow (borrowing from previous month)
//!   • leap years
//!   • varying month lengths

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::calendar::days_in_month;
use crate::format::plural;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DateDelta {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

impl DateDelta {
    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Rolls `start` forward by this delta: years and months first, then the
    /// day of month plus `days`, letting any day overflow carry into the
    /// following month. `date_delta(a, b).apply_to(a) == Some(b)` for `a <= b`.
    pub fn apply_to(&self, start: NaiveDate) -> Option<NaiveDate> {
        let month_index =
            (start.year() + self.years) * 12 + start.month0() as i32 + self.months;
        let year = month_index.div_euclid(12);
        let month = month_index.rem_euclid(12) as u32 + 1;

        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let offset = i64::from(start.day()) - 1 + i64::from(self.days);
        first.checked_add_signed(Duration::days(offset))
    }
}

impl fmt::Display for DateDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years.into()),
            self.months,
            plural(self.months.into()),
            self.days,
            plural(self.days.into())
        )
    }
}

/// Calendar-aware difference from `start` forward to `end`.
///
/// The caller must ensure `start <= end`. Reversed input is not detected
/// and yields a delta with no useful meaning; use [`ordered_delta`] when
/// the order is unknown.
pub fn date_delta(start: NaiveDate, end: NaiveDate) -> DateDelta {
    let mut years = end.year() - start.year();
    let mut months = end.month() as i32 - start.month() as i32;
    let mut days = end.day() as i32 - start.day() as i32;

    // Fix day underflow. Borrowing once is enough unless the month before
    // `end` is shorter than the gap (Jan 31 -> Mar 1), then borrow again.
    let (mut prev_year, mut prev_month) = (end.year(), end.month());
    while days < 0 {
        months -= 1;

        (prev_year, prev_month) = if prev_month == 1 {
            (prev_year - 1, 12)
        } else {
            (prev_year, prev_month - 1)
        };

        // Add days from the previous month (28–31 depending on month & leap year)
        days += days_in_month(prev_year, prev_month) as i32;
    }

    // Fix month underflow
    while months < 0 {
        years -= 1;
        months += 12;
    }

    DateDelta {
        years,
        months,
        days,
    }
}

/// Delta between two dates in either order, plus whether they were swapped.
pub fn ordered_delta(a: NaiveDate, b: NaiveDate) -> (DateDelta, bool) {
    if b < a {
        (date_delta(b, a), true)
    } else {
        (date_delta(a, b), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn delta(years: i32, months: i32, days: i32) -> DateDelta {
        DateDelta {
            years,
            months,
            days,
        }
    }

    #[test]
    fn same_date_is_zero() {
        let d = ymd(2024, 2, 29);
        assert!(date_delta(d, d).is_zero());
    }

    #[test]
    fn borrows_from_february_of_leap_year() {
        // Feb 2024 has 29 days: 15 Feb -> 10 Mar is 24 days.
        assert_eq!(date_delta(ymd(2023, 1, 15), ymd(2024, 3, 10)), delta(1, 1, 24));
    }

    #[test]
    fn leap_day_to_next_february() {
        assert_eq!(date_delta(ymd(2024, 2, 29), ymd(2025, 2, 28)), delta(0, 11, 30));
    }

    #[test]
    fn january_end_borrows_from_december() {
        assert_eq!(date_delta(ymd(2023, 12, 20), ymd(2024, 1, 5)), delta(0, 0, 16));
    }

    #[test]
    fn double_borrow_keeps_days_non_negative() {
        let d = date_delta(ymd(2023, 1, 31), ymd(2023, 3, 1));
        assert_eq!(d, delta(0, 0, 29));
    }

    #[test]
    fn whole_years() {
        assert_eq!(date_delta(ymd(1992, 6, 14), ymd(2025, 6, 14)), delta(33, 0, 0));
    }

    #[test]
    fn ordered_delta_swaps() {
        let (d, swapped) = ordered_delta(ymd(2024, 3, 10), ymd(2023, 1, 15));
        assert!(swapped);
        assert_eq!(d, delta(1, 1, 24));

        let (_, swapped) = ordered_delta(ymd(2023, 1, 15), ymd(2024, 3, 10));
        assert!(!swapped);
    }

    #[test]
    fn apply_reproduces_end_date() {
        let pairs = [
            (ymd(2023, 1, 15), ymd(2024, 3, 10)),
            (ymd(2024, 2, 29), ymd(2025, 2, 28)),
            (ymd(2023, 1, 31), ymd(2023, 3, 1)),
            (ymd(2023, 5, 31), ymd(2023, 7, 1)),
            (ymd(1999, 12, 31), ymd(2000, 1, 1)),
        ];
        for (a, b) in pairs {
            assert_eq!(date_delta(a, b).apply_to(a), Some(b), "{a} -> {b}");
        }
    }

    #[test]
    fn display_pluralises() {
        assert_eq!(delta(1, 2, 0).to_string(), "1 year, 2 months, 0 days");
        assert_eq!(delta(0, 1, 1).to_string(), "0 years, 1 month, 1 day");
    }
}
