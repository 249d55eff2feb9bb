//! Next-birthday lookup.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::calendar::{total_days, weekday_name};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextBirthday {
    pub date: NaiveDate,
    pub days_until: i64,
    pub day_of_week: String,
}

/// Birthday of someone born on `birth` as celebrated in `year`, or `None`
/// when `year` is outside the representable range.
///
/// Feb 29 birthdays fall on March 1st in common years.
pub fn birthday_in_year(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Upcoming birthday on or after `today`.
///
/// Dates are compared whole, with no time of day: a birthday falling on
/// `today` is the upcoming one with zero days until, rather than rolling
/// over to next year. When next year's birthday is past the last
/// representable date, the result saturates at [`NaiveDate::MAX`].
pub fn next_birthday(birth: NaiveDate, today: NaiveDate) -> NextBirthday {
    let date = birthday_in_year(birth, today.year())
        .filter(|date| *date >= today)
        .or_else(|| birthday_in_year(birth, today.year() + 1))
        .unwrap_or(NaiveDate::MAX);

    NextBirthday {
        date,
        days_until: total_days(today, date),
        day_of_week: weekday_name(date),
    }
}
