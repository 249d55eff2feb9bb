//! calendar.rs
//!
//! Gregorian calendar helpers shared by every calculator.
//!
//! All functions are total over valid `NaiveDate` values. Months are
//! one-based here, the same as `chrono::Datelike::month`.

use chrono::{Datelike, NaiveDate};

/// Days per month in a common year, January first.
pub const DAYS_PER_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns number of days in a given year/month (handles leap years).
///
/// # Panics
///
/// Panics if `month` is outside `1..=12`. Callers validate months before
/// they get here.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_PER_MONTH[(month - 1) as usize]
    }
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// 1 for January 1st, up to 365 or 366 for December 31st.
pub fn day_of_year(date: NaiveDate) -> u32 {
    let before: u32 = (1..date.month())
        .map(|m| days_in_month(date.year(), m))
        .sum();
    before + date.day()
}

/// Week number counted in Sunday-started weeks, where week 1 is the
/// (possibly partial) week containing January 1st.
pub fn week_of_year(date: NaiveDate) -> u32 {
    let jan1_offset = NaiveDate::from_ymd_opt(date.year(), 1, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0);
    (day_of_year(date) + jan1_offset).div_ceil(7)
}

pub fn quarter_of_year(date: NaiveDate) -> u32 {
    date.month().div_ceil(3)
}

/// Whole days between two dates, order-independent.
pub fn total_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs()
}

/// Naive month count: ignores the day of month entirely, so it can
/// disagree with [`crate::delta::date_delta`] near month boundaries.
pub fn total_months(start: NaiveDate, end: NaiveDate) -> i32 {
    let years = end.year() - start.year();
    let months = end.month() as i32 - start.month() as i32;
    years * 12 + months
}

/// Counts leap years whose year number lies in `start.year()..=end.year()`,
/// whether or not Feb 29 itself falls between the two dates.
pub fn count_leap_years(start: NaiveDate, end: NaiveDate) -> u32 {
    (start.year()..=end.year())
        .filter(|&y| is_leap_year(y))
        .count() as u32
}

/// English weekday name, e.g. "Monday".
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}
