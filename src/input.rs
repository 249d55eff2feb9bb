//! Parsing and validation of user-entered dates.
//!
//! The calculators assume valid input; this is where invalid input is
//! turned away.

use chrono::{NaiveDate, NaiveDateTime};

/// Error type for rejected user input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// Returned when text is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date: {input:?} (expected YYYY-MM-DD)")]
    InvalidDate {
        /// The text that failed to parse.
        input: String,
    },

    /// Returned when text is not a `YYYY-MM-DDTHH:MM[:SS]` date and time.
    #[error("invalid date and time: {input:?} (expected YYYY-MM-DDTHH:MM[:SS])")]
    InvalidDateTime {
        /// The text that failed to parse.
        input: String,
    },

    /// Returned when a birth date lies after today.
    #[error("birth date {date} cannot be in the future (today is {today})")]
    FutureBirthDate {
        /// The rejected birth date.
        date: NaiveDate,
        /// The reference date it was checked against.
        today: NaiveDate,
    },
}

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

pub fn parse_date(input: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| InputError::InvalidDate {
        input: input.to_string(),
    })
}

/// Accepts a `T` or a space between date and time; seconds are optional.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, InputError> {
    let trimmed = input.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| InputError::InvalidDateTime {
            input: input.to_string(),
        })
}

pub fn ensure_not_future(date: NaiveDate, today: NaiveDate) -> Result<NaiveDate, InputError> {
    if date > today {
        Err(InputError::FutureBirthDate { date, today })
    } else {
        Ok(date)
    }
}

/// Parses a birth date and rejects dates after `today`.
pub fn parse_birth_date(input: &str, today: NaiveDate) -> Result<NaiveDate, InputError> {
    ensure_not_future(parse_date(input)?, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_dates() {
        assert_eq!(parse_date("2024-02-29").unwrap(), ymd(2024, 2, 29));
        assert_eq!(parse_date(" 2024-02-29 ").unwrap(), ymd(2024, 2, 29));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert_eq!(
            parse_date("2023-02-29").unwrap_err(),
            InputError::InvalidDate {
                input: "2023-02-29".to_string()
            }
        );
        assert!(parse_date("2023-13-01").is_err());
        assert!(parse_date("yesterday").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn parses_datetimes() {
        let expected = ymd(2024, 1, 1).and_hms_opt(8, 30, 0).unwrap();
        assert_eq!(parse_datetime("2024-01-01T08:30").unwrap(), expected);
        assert_eq!(parse_datetime("2024-01-01 08:30:00").unwrap(), expected);
        assert!(parse_datetime("2024-01-01").is_err());
        assert!(parse_datetime("2024-01-01T25:00").is_err());
    }

    #[test]
    fn future_birth_dates_are_rejected() {
        let today = ymd(2025, 1, 1);
        assert_eq!(parse_birth_date("2025-01-01", today).unwrap(), today);
        assert_eq!(
            parse_birth_date("2025-01-02", today).unwrap_err(),
            InputError::FutureBirthDate {
                date: ymd(2025, 1, 2),
                today
            }
        );
    }

    #[test]
    fn error_messages() {
        let err = InputError::InvalidDate {
            input: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "invalid date: \"nope\" (expected YYYY-MM-DD)");

        let err = InputError::FutureBirthDate {
            date: ymd(2030, 1, 1),
            today: ymd(2025, 1, 1),
        };
        assert_eq!(
            err.to_string(),
            "birth date 2030-01-01 cannot be in the future (today is 2025-01-01)"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<InputError>();
    }
}
