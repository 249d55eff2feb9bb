//! How far a date lies in the past or future relative to today.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{total_days, total_months};
use crate::delta::{DateDelta, ordered_delta};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoricalReport {
    pub date: NaiveDate,
    pub is_past: bool,
    pub difference: DateDelta,
    pub total_days: i64,
    pub total_weeks: i64,
    pub total_months: i32,
    pub decades: i32,
    pub centuries: i32,
}

/// A date equal to `today` counts as not past.
pub fn historical_report(date: NaiveDate, today: NaiveDate) -> HistoricalReport {
    let is_past = date < today;
    let (difference, _) = ordered_delta(date, today);
    let total_days = total_days(date, today);
    let total_months = if is_past {
        total_months(date, today)
    } else {
        total_months(today, date)
    };

    HistoricalReport {
        date,
        is_past,
        difference,
        total_days,
        total_weeks: total_days / 7,
        total_months,
        decades: difference.years / 10,
        centuries: difference.years / 100,
    }
}
