use chrono::{Datelike, NaiveDate};
use datewise::calendar::{
    count_leap_years, day_of_year, days_in_month, is_leap_year, total_days, total_months,
    week_of_year,
};
use datewise::delta::{DateDelta, date_delta};
use datewise::zodiac::ZodiacSign;

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn leap_year_reference_values() {
    let cases = [(2000, true), (1900, false), (2024, true), (2023, false), (2400, true)];
    for (year, expected) in cases {
        assert_eq!(is_leap_year(year), expected, "year {year}");
    }
}

#[test]
fn days_in_month_agrees_with_chrono() {
    for year in [1900, 2000, 2023, 2024] {
        for month in 1..=12 {
            let first = ymd(year, month, 1);
            let next = if month == 12 {
                ymd(year + 1, 1, 1)
            } else {
                ymd(year, month + 1, 1)
            };
            assert_eq!(
                i64::from(days_in_month(year, month)),
                (next - first).num_days(),
                "{year}-{month}"
            );
        }
    }
}

#[test]
fn delta_reference_values() {
    assert_eq!(
        date_delta(ymd(2024, 2, 29), ymd(2025, 2, 28)),
        DateDelta {
            years: 0,
            months: 11,
            days: 30
        }
    );
    assert_eq!(
        date_delta(ymd(2023, 1, 15), ymd(2024, 3, 10)),
        DateDelta {
            years: 1,
            months: 1,
            days: 24
        }
    );
}

#[test]
fn delta_of_a_date_with_itself_is_zero() {
    let mut date = ymd(2023, 12, 25);
    for _ in 0..400 {
        assert!(date_delta(date, date).is_zero());
        date = date.succ_opt().unwrap();
    }
}

#[test]
fn delta_round_trips_and_stays_in_range() {
    // Every pair of start/end dates drawn from two leap-spanning years,
    // sampled every 3rd and 7th day to keep the run short.
    let starts: Vec<NaiveDate> = ymd(2023, 1, 1)
        .iter_days()
        .step_by(3)
        .take_while(|d| d.year() < 2025)
        .collect();
    let ends: Vec<NaiveDate> = ymd(2023, 1, 1)
        .iter_days()
        .step_by(7)
        .take_while(|d| d.year() < 2026)
        .collect();

    for &a in &starts {
        for &b in ends.iter().filter(|&&b| b >= a) {
            let delta = date_delta(a, b);
            assert!(delta.years >= 0, "{a} -> {b}: {delta:?}");
            assert!((0..=11).contains(&delta.months), "{a} -> {b}: {delta:?}");
            assert!((0..=30).contains(&delta.days), "{a} -> {b}: {delta:?}");
            assert_eq!(delta.apply_to(a), Some(b), "{a} -> {b}: {delta:?}");
        }
    }
}

#[test]
fn month_end_starts_round_trip() {
    let starts = [ymd(2023, 1, 31), ymd(2024, 1, 31), ymd(2023, 3, 31), ymd(2024, 2, 29)];
    for a in starts {
        for b in a.iter_days().take(400) {
            assert_eq!(date_delta(a, b).apply_to(a), Some(b), "{a} -> {b}");
        }
    }
}

#[test]
fn total_days_reference_values() {
    assert_eq!(total_days(ymd(2024, 1, 1), ymd(2024, 1, 1)), 0);
    assert_eq!(total_days(ymd(2024, 1, 1), ymd(2025, 1, 1)), 366);
}

#[test]
fn total_months_reference_value() {
    assert_eq!(total_months(ymd(2023, 11, 1), ymd(2024, 2, 1)), 3);
}

#[test]
fn leap_year_count_reference_value() {
    assert_eq!(count_leap_years(ymd(2000, 1, 1), ymd(2004, 12, 31)), 2);
}

#[test]
fn zodiac_reference_values() {
    assert_eq!(ZodiacSign::from_month_day(12, 25).to_string(), "Capricorn");
    assert_eq!(ZodiacSign::from_month_day(1, 19).to_string(), "Capricorn");
    assert_eq!(ZodiacSign::from_month_day(1, 20).to_string(), "Aquarius");
}

#[test]
fn year_position_reference_values() {
    assert_eq!(week_of_year(ymd(2024, 1, 1)), 1);
    assert_eq!(day_of_year(ymd(2024, 1, 1)), 1);
    assert_eq!(day_of_year(ymd(2024, 12, 31)), 366);
}
