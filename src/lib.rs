//! # datewise
//!
//! Calendar arithmetic for a set of everyday date calculators: age,
//! date difference, time between instants, week/quarter lookup, age
//! comparison, historical dates, countdowns and a live age counter.
//!
//! Every calculator is a pure function of its inputs. "Today" and "now"
//! are always passed in by the caller; nothing here reads the clock.
//!
//! ```
//! use chrono::NaiveDate;
//! use datewise::delta::date_delta;
//!
//! let start = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
//! let end = NaiveDate::from_ymd_opt(2025, 2, 28).unwrap();
//! assert_eq!(date_delta(start, end).to_string(), "0 years, 11 months, 30 days");
//! ```

pub mod age;
pub mod birthday;
pub mod calendar;
pub mod compare;
pub mod config;
pub mod countdown;
pub mod delta;
pub mod diff;
pub mod format;
pub mod historical;
pub mod input;
pub mod live;
pub mod render;
pub mod time_between;
pub mod week;
pub mod zodiac;

pub use delta::DateDelta;
pub use input::InputError;
pub use zodiac::ZodiacSign;
