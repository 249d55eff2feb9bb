//! Where a date sits within its year.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::calendar::{
    day_of_year, days_in_year, is_leap_year, quarter_of_year, week_of_year, weekday_name,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekInfo {
    pub date: NaiveDate,
    pub week_of_year: u32,
    pub day_of_year: u32,
    pub quarter: u32,
    pub days_remaining: u32,
    pub day_of_week: String,
    pub leap_year: bool,
    pub days_in_year: u32,
}

pub fn week_info(date: NaiveDate) -> WeekInfo {
    let day_of_year = day_of_year(date);
    let days_in_year = days_in_year(date.year());

    WeekInfo {
        date,
        week_of_year: week_of_year(date),
        day_of_year,
        quarter: quarter_of_year(date),
        days_remaining: days_in_year - day_of_year,
        day_of_week: weekday_name(date),
        leap_year: is_leap_year(date.year()),
        days_in_year,
    }
}
