//! Age comparison between two people.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::total_days;
use crate::delta::{DateDelta, date_delta, ordered_delta};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Elder {
    First,
    Second,
    /// Both share a birth date.
    Neither,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeComparison {
    pub first_age: DateDelta,
    pub second_age: DateDelta,
    pub gap: DateDelta,
    pub gap_days: i64,
    pub elder: Elder,
}

/// Both birth dates must be on or before `today`.
pub fn compare_ages(first: NaiveDate, second: NaiveDate, today: NaiveDate) -> AgeComparison {
    let (gap, _) = ordered_delta(first, second);
    let elder = match first.cmp(&second) {
        std::cmp::Ordering::Less => Elder::First,
        std::cmp::Ordering::Greater => Elder::Second,
        std::cmp::Ordering::Equal => Elder::Neither,
    };

    AgeComparison {
        first_age: date_delta(first, today),
        second_age: date_delta(second, today),
        gap,
        gap_days: total_days(first, second),
        elder,
    }
}
