//! Countdown to a target date.

use chrono::NaiveDate;
use serde::Serialize;

use crate::calendar::{total_days, weekday_name};
use crate::delta::{DateDelta, date_delta};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Countdown {
    Today,
    Passed {
        days_ago: i64,
    },
    Upcoming {
        remaining: DateDelta,
        total_days: i64,
        total_weeks: i64,
        day_of_week: String,
    },
}

/// Dates are compared whole, so any time of day on `today` is irrelevant and
/// the target matching `today` is [`Countdown::Today`].
pub fn countdown(target: NaiveDate, today: NaiveDate) -> Countdown {
    if target == today {
        return Countdown::Today;
    }
    if target < today {
        return Countdown::Passed {
            days_ago: total_days(target, today),
        };
    }

    let total_days = total_days(today, target);
    Countdown::Upcoming {
        remaining: date_delta(today, target),
        total_days,
        total_weeks: total_days / 7,
        day_of_week: weekday_name(target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn today() {
        assert_eq!(countdown(ymd(2025, 5, 5), ymd(2025, 5, 5)), Countdown::Today);
    }

    #[test]
    fn passed() {
        assert_eq!(
            countdown(ymd(2025, 5, 1), ymd(2025, 5, 5)),
            Countdown::Passed { days_ago: 4 }
        );
    }

    #[test]
    fn upcoming_new_year() {
        let Countdown::Upcoming {
            remaining,
            total_days,
            total_weeks,
            day_of_week,
        } = countdown(ymd(2026, 1, 1), ymd(2025, 10, 18))
        else {
            panic!("expected an upcoming countdown");
        };
        assert_eq!(
            remaining,
            DateDelta {
                years: 0,
                months: 2,
                days: 14
            }
        );
        assert_eq!(total_days, 75);
        assert_eq!(total_weeks, 10);
        assert_eq!(day_of_week, "Thursday");
    }
}
