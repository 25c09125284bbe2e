//! Proleptic Gregorian calendar arithmetic.
//!
//! Dates are `(year, month, day)` triples with a zero-based month
//! (January = 0) and a one-based day. Every derived value (linear day count,
//! weekday, day of year, week numbers) comes from a single civil-to-days
//! transform anchored at 1970-01-01 = day 0, so the results agree with each
//! other for any `i32` year.
//!
//! Reading the host clock and pattern-based formatting are left to
//! implementations of [`Clock`] and [`DateFormatter`].

mod adapter;
pub mod civil;
mod consts;
mod date;
mod difference;
mod month;
mod prelude;
mod time;
mod types;

pub use adapter::{AdapterError, Clock, DateFormatter, DateTime, FixedClock, SystemClock};
pub use consts::*;
pub use date::CalendarDate;
pub use difference::{
    CalendarDifference, TimeDifference, day_difference, signed_day_difference,
};
pub use month::{MonthDayRecord, MonthDays, enumerate_month, enumerate_month_with};
pub use time::TimeOfDay;
pub use types::{MonthName, WeekRule, Weekday};

/// Error type for calendar operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Month outside `0..=11` or day outside `1..=length_of_month`.
    #[error("Invalid date: year {year}, month {month} (0-based), day {day}")]
    InvalidDate { year: i32, month: u8, day: u8 },

    /// Hour, minute or second out of range.
    #[error("Invalid time: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u8, minute: u8, second: u8 },

    /// Linear day count whose year does not fit in an `i32`.
    #[error("Day count {0} is outside the representable year range")]
    DayCountOutOfRange(i64),

    /// Week rule with `minimal_days` outside `1..=7`.
    #[error("Invalid week rule: minimal days {0} (must be 1-7)")]
    InvalidWeekRule(u8),

    /// Text that is not a `dd.MM.yyyy` date or `HH:mm:ss` time.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}
