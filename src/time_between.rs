//! Elapsed time between two instants, broken into days/hours/minutes/seconds.

use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSpan {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total_hours: i64,
    pub total_minutes: i64,
    pub total_seconds: i64,
}

/// Instants may be given in either order. Sub-second precision is dropped.
pub fn time_between(a: NaiveDateTime, b: NaiveDateTime) -> TimeSpan {
    let (start, end) = if b < a { (b, a) } else { (a, b) };

    let total_seconds = (end - start).num_seconds();
    let total_minutes = total_seconds / 60;
    let total_hours = total_minutes / 60;

    TimeSpan {
        start,
        end,
        days: total_hours / 24,
        hours: total_hours % 24,
        minutes: total_minutes % 60,
        seconds: total_seconds % 60,
        total_hours,
        total_minutes,
        total_seconds,
    }
}
