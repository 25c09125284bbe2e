//! Seams to the host environment: reading "now" and pattern-based formatting.
//!
//! The calendar functions never touch the host themselves. Callers inject a
//! [`Clock`] where "today" matters and a [`DateFormatter`] where a date has to
//! be rendered through an externally defined pattern.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::consts::SECONDS_PER_DAY;
use crate::prelude::*;
use crate::{CalendarDate, CalendarError, MonthName, TimeOfDay, WeekRule, Weekday};

/// Error type for host adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    /// The host does not provide what the adapter needs.
    #[error("Host capability unavailable: {capability}")]
    Unavailable { capability: &'static str },

    /// The host reported a value the calendar cannot represent.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// A date and time of day, as supplied by a [`Clock`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{date} {time}")]
pub struct DateTime {
    date: CalendarDate,
    time: TimeOfDay,
}

impl DateTime {
    pub const fn new(date: CalendarDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Builds a date-time from raw components; the month is zero-based.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` or `CalendarError::InvalidTime`.
    pub fn from_parts(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, CalendarError> {
        Ok(Self {
            date: CalendarDate::new(year, month, day)?,
            time: TimeOfDay::new(hour, minute, second)?,
        })
    }

    /// UTC date-time `seconds` after 1970-01-01T00:00:00.
    ///
    /// # Errors
    /// Returns `CalendarError::DayCountOutOfRange` if the year overflows `i32`.
    pub fn from_unix_seconds(seconds: i64) -> Result<Self, CalendarError> {
        let date = CalendarDate::from_day_count(seconds.div_euclid(SECONDS_PER_DAY))?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let time = TimeOfDay::from_seconds_of_day(seconds.rem_euclid(SECONDS_PER_DAY) as u32);
        Ok(Self { date, time })
    }

    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    pub const fn time(&self) -> TimeOfDay {
        self.time
    }

    /// `(year, month, day, hour, minute, second)` with a zero-based month
    pub const fn components(&self) -> (i32, u8, u8, u8, u8, u8) {
        (
            self.date.year(),
            self.date.month(),
            self.date.day(),
            self.time.hour(),
            self.time.minute(),
            self.time.second(),
        )
    }

    /// `dd.MM.yyyy`
    pub fn date_string(&self) -> String {
        self.date.to_string()
    }

    /// `HH:mm:ss`
    pub fn time_string(&self) -> String {
        self.time.to_string()
    }

    pub const fn epoch_day(&self) -> i64 {
        self.date.day_count()
    }

    pub const fn seconds_of_day(&self) -> u32 {
        self.time.seconds_of_day()
    }

    pub const fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub const fn day_of_year(&self) -> u16 {
        self.date.day_of_year()
    }

    pub fn week_of_month(&self, rule: WeekRule) -> u8 {
        self.date.week_of_month(rule)
    }

    pub fn week_of_year(&self, rule: WeekRule) -> u8 {
        self.date.week_of_year(rule)
    }

    pub const fn month_name(&self) -> MonthName {
        self.date.month_name()
    }

    pub const fn is_leap_year(&self) -> bool {
        self.date.is_leap_year()
    }
}

/// Source of the current date and time.
pub trait Clock: Send + Sync {
    /// # Errors
    /// Returns `AdapterError::Unavailable` when the host cannot tell the time.
    fn now(&self) -> Result<DateTime, AdapterError>;

    /// # Errors
    /// Same as [`Clock::now`].
    fn today(&self) -> Result<CalendarDate, AdapterError> {
        Ok(self.now()?.date())
    }
}

/// Reads the host's system time and reports it in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[tracing::instrument(level = "trace")]
    fn now(&self) -> Result<DateTime, AdapterError> {
        let seconds = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_secs()).map_err(|_| {
                AdapterError::Unavailable {
                    capability: "system time within i64 seconds",
                }
            })?,
            Err(err) => {
                let before = err.duration();
                tracing::warn!(?before, "system clock is set before the Unix epoch");
                let whole = i64::try_from(before.as_secs()).map_err(|_| {
                    AdapterError::Unavailable {
                        capability: "system time within i64 seconds",
                    }
                })?;
                // Round towards the past so the fraction lands in the previous second
                if before.subsec_nanos() > 0 {
                    -whole - 1
                } else {
                    -whole
                }
            }
        };
        DateTime::from_unix_seconds(seconds).map_err(AdapterError::from)
    }
}

/// A clock that always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime);

impl Clock for FixedClock {
    fn now(&self) -> Result<DateTime, AdapterError> {
        Ok(self.0)
    }
}

/// Renders dates through a host-defined pattern language.
///
/// Every method defaults to `AdapterError::Unavailable`, so a host only
/// implements what it supports. Patterns are passed through untouched.
pub trait DateFormatter: Send + Sync {
    /// # Errors
    /// Returns `AdapterError::Unavailable` unless the host supports date patterns.
    fn format_date(&self, _date: &CalendarDate, _pattern: &str) -> Result<String, AdapterError> {
        Err(AdapterError::Unavailable {
            capability: "date formatting",
        })
    }

    /// # Errors
    /// Returns `AdapterError::Unavailable` unless the host supports time patterns.
    fn format_time(&self, _time: &TimeOfDay, _pattern: &str) -> Result<String, AdapterError> {
        Err(AdapterError::Unavailable {
            capability: "time formatting",
        })
    }

    /// # Errors
    /// Returns `AdapterError::Unavailable` unless the host supports date-time patterns.
    fn format_date_time(
        &self,
        _date_time: &DateTime,
        _pattern: &str,
    ) -> Result<String, AdapterError> {
        Err(AdapterError::Unavailable {
            capability: "date-time formatting",
        })
    }
}
