use std::str::FromStr;

use crate::CalendarError;
use crate::consts::TIME_SEPARATOR;
use crate::prelude::*;

/// A wall-clock time with second precision, `00:00:00..=23:59:59`.
///
/// Displays and parses as `HH:mm:ss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}:{:02}:{:02}", "hour", "minute", "second")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Midnight, `00:00:00`
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Creates a time of day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidTime` if the hour is above 23 or the
    /// minute or second above 59.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, CalendarError> {
        if hour > 23 || minute > 59 || second > 59 {
            tracing::debug!(hour, minute, second, "rejecting invalid time");
            return Err(CalendarError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Builds a time from seconds since midnight, which must be below 86 400.
    pub(crate) const fn from_seconds_of_day(seconds: u32) -> Self {
        debug_assert!(seconds < 86_400);
        Self {
            hour: (seconds / 3600) as u8,
            minute: (seconds / 60 % 60) as u8,
            second: (seconds % 60) as u8,
        }
    }

    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    pub const fn second(&self) -> u8 {
        self.second
    }

    pub const fn seconds_of_day(&self) -> u32 {
        self.hour as u32 * 3600 + self.minute as u32 * 60 + self.second as u32
    }

    pub const fn minutes_of_day(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }
}

impl FromStr for TimeOfDay {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split(TIME_SEPARATOR).collect();
        let [hour, minute, second] = parts.as_slice() else {
            return Err(CalendarError::InvalidFormat(format!(
                "expected HH{TIME_SEPARATOR}mm{TIME_SEPARATOR}ss, got {trimmed}"
            )));
        };

        let invalid = || CalendarError::InvalidFormat(trimmed.to_owned());
        Self::new(
            hour.parse().map_err(|_| invalid())?,
            minute.parse().map_err(|_| invalid())?,
            second.parse().map_err(|_| invalid())?,
        )
    }
}
