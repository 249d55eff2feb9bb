//! Difference between two calendar dates given in any order.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{total_days, total_months};
use crate::delta::{DateDelta, ordered_delta};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffReport {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub difference: DateDelta,
    pub total_days: i64,
    pub total_weeks: i64,
    pub total_months: i32,
    pub same_date: bool,
}

pub fn diff_report(a: NaiveDate, b: NaiveDate) -> DiffReport {
    let (start, end) = if b < a { (b, a) } else { (a, b) };
    let (difference, _) = ordered_delta(start, end);
    let total_days = total_days(start, end);

    DiffReport {
        start,
        end,
        difference,
        total_days,
        total_weeks: total_days / 7,
        total_months: total_months(start, end),
        same_date: total_days == 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn swaps_reversed_dates() {
        let forward = diff_report(ymd(2023, 11, 1), ymd(2024, 2, 1));
        let backward = diff_report(ymd(2024, 2, 1), ymd(2023, 11, 1));
        assert_eq!(forward, backward);
        assert_eq!(forward.start, ymd(2023, 11, 1));
        assert_eq!(forward.total_months, 3);
        assert_eq!(forward.total_days, 92);
        assert_eq!(forward.total_weeks, 13);
        assert!(!forward.same_date);
    }

    #[test]
    fn same_date() {
        let report = diff_report(ymd(2024, 5, 5), ymd(2024, 5, 5));
        assert!(report.same_date);
        assert!(report.difference.is_zero());
    }
}
