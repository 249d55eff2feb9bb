//! age.rs
//!
//! Everything the age calculator shows for a single birth date: the
//! calendar-aware age, totals in several units, the next birthday, the
//! zodiac sign and progress through an average lifespan.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::birthday::{NextBirthday, next_birthday};
use crate::calendar::{count_leap_years, total_days, total_months};
use crate::delta::{DateDelta, date_delta};
use crate::zodiac::ZodiacSign;

/// Average lifespan used for the life-progress percentage.
pub const AVERAGE_LIFESPAN_YEARS: u32 = 80;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeReport {
    pub birth_date: NaiveDate,
    pub age: DateDelta,
    pub total_days: i64,
    pub total_months: i32,
    pub total_hours: i64,
    pub total_minutes: i64,
    pub total_seconds: i64,
    pub leap_years: u32,
    pub next_birthday: NextBirthday,
    pub zodiac: ZodiacSign,
    pub lifespan_years: u32,
    pub life_progress_percent: f64,
}

impl AgeReport {
    /// Progress capped at 100, for drawing a bar.
    pub fn life_progress_bar_percent(&self) -> f64 {
        self.life_progress_percent.min(100.0)
    }
}

/// Builds the age report for `birth` as of `today`. The birth date must not
/// be after `today`.
pub fn age_report(birth: NaiveDate, today: NaiveDate, lifespan_years: u32) -> AgeReport {
    let age = date_delta(birth, today);
    let total_days = total_days(birth, today);
    let total_hours = total_days * 24;
    let total_minutes = total_hours * 60;

    let life_progress_percent = if lifespan_years == 0 {
        100.0
    } else {
        f64::from(age.years) / f64::from(lifespan_years) * 100.0
    };

    tracing::debug!(%birth, %today, %age, "computed age");

    AgeReport {
        birth_date: birth,
        age,
        total_days,
        total_months: total_months(birth, today),
        total_hours,
        total_minutes,
        total_seconds: total_minutes * 60,
        leap_years: count_leap_years(birth, today),
        next_birthday: next_birthday(birth, today),
        zodiac: ZodiacSign::from_month_day(birth.month(), birth.day()),
        lifespan_years,
        life_progress_percent,
    }
}
