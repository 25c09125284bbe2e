use std::str::FromStr;

use crate::adapter::{AdapterError, Clock};
use crate::civil::{self, days_from_civil, days_in_month, ordinal};
use crate::consts::DATE_SEPARATOR;
use crate::prelude::*;
use crate::{CalendarError, MonthName, WeekRule, Weekday};

/// A validated Gregorian date.
///
/// The month is zero-based (January = 0) and the day is one-based. The value
/// can only be built through validation, so the day never exceeds the length
/// of its month. Ordering is chronological.
///
/// Displays and parses as `dd.MM.yyyy` with a one-based month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}.{:02}.{:04}", "day", "month + 1", "year")]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a date from a year, zero-based month and one-based day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if the month is not in `0..=11` or
    /// the day does not exist in that month.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        civil::validate(year, month, day)?;
        Ok(Self { year, month, day })
    }

    /// Builds a date whose triple is known to be valid.
    pub(crate) const fn from_validated(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Date `days` after 1970-01-01.
    ///
    /// # Errors
    /// Returns `CalendarError::DayCountOutOfRange` if the year overflows `i32`.
    pub fn from_day_count(days: i64) -> Result<Self, CalendarError> {
        civil::from_linear_day_count(days)
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// One-based day of the month
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    pub const fn month_name(&self) -> MonthName {
        match MonthName::from_index(self.month) {
            Some(name) => name,
            None => MonthName::January,
        }
    }

    /// Days since 1970-01-01
    pub const fn day_count(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    pub const fn weekday(&self) -> Weekday {
        Weekday::from_day_count(self.day_count())
    }

    /// One-based day of the year
    pub const fn day_of_year(&self) -> u16 {
        ordinal(self.year, self.month, self.day)
    }

    pub fn week_of_month(&self, rule: WeekRule) -> u8 {
        let first = Weekday::from_day_count(days_from_civil(self.year, self.month, 1));
        rule.week_number(first, u16::from(self.day - 1))
    }

    pub fn week_of_year(&self, rule: WeekRule) -> u8 {
        let first = Weekday::from_day_count(days_from_civil(self.year, 0, 1));
        rule.week_number(first, self.day_of_year() - 1)
    }

    pub const fn is_leap_year(&self) -> bool {
        civil::is_leap_year(self.year)
    }

    /// Number of days in this date's month
    pub const fn length_of_month(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Returns the date `days` later (or earlier, if negative).
    ///
    /// # Errors
    /// Returns `CalendarError::DayCountOutOfRange` if the result leaves the
    /// representable year range.
    pub fn add_days(&self, days: i64) -> Result<Self, CalendarError> {
        // saturating keeps the error reporting the target rather than the delta
        civil::from_linear_day_count(self.day_count().saturating_add(days))
    }

    pub fn is_after(&self, other: &Self) -> bool {
        self > other
    }

    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    pub fn is_same_day(&self, other: &Self) -> bool {
        self == other
    }

    /// Whether this date is the clock's current date.
    ///
    /// # Errors
    /// Propagates the clock's `AdapterError`.
    pub fn is_today(&self, clock: &impl Clock) -> Result<bool, AdapterError> {
        Ok(*self == clock.now()?.date())
    }

    /// # Errors
    /// Propagates the clock's `AdapterError`.
    pub fn is_before_today(&self, clock: &impl Clock) -> Result<bool, AdapterError> {
        Ok(*self < clock.now()?.date())
    }

    /// # Errors
    /// Propagates the clock's `AdapterError`.
    pub fn is_after_today(&self, clock: &impl Clock) -> Result<bool, AdapterError> {
        Ok(*self > clock.now()?.date())
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(CalendarError::InvalidFormat(format!(
                "expected dd{DATE_SEPARATOR}MM{DATE_SEPARATOR}yyyy, got {trimmed}"
            )));
        };

        let invalid = || CalendarError::InvalidFormat(trimmed.to_owned());
        let day = day.parse::<u8>().map_err(|_| invalid())?;
        let month = month.parse::<u8>().map_err(|_| invalid())?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        // One-based month in text
        let month = month.checked_sub(1).ok_or(CalendarError::InvalidDate {
            year,
            month,
            day,
        })?;

        Self::new(year, month, day)
    }
}

impl TryFrom<(i32, u8, u8)> for CalendarDate {
    type Error = CalendarError;

    fn try_from((year, month, day): (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(year, month, day)
    }
}

impl From<CalendarDate> for (i32, u8, u8) {
    fn from(date: CalendarDate) -> Self {
        (date.year, date.month, date.day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_new_valid() {
        assert!(CalendarDate::new(2024, 0, 1).is_ok());
        assert!(CalendarDate::new(2024, 1, 29).is_ok());
        assert!(CalendarDate::new(-44, 2, 15).is_ok());
    }

    #[test]
    fn test_new_invalid() {
        assert!(matches!(
            CalendarDate::new(2023, 1, 29),
            Err(CalendarError::InvalidDate {
                year: 2023,
                month: 1,
                day: 29
            })
        ));
        assert!(CalendarDate::new(2024, 12, 1).is_err());
        assert!(CalendarDate::new(2024, 0, 0).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(date(2024, 0, 5).to_string(), "05.01.2024");
        assert_eq!(date(1991, 7, 15).to_string(), "15.08.1991");
        assert_eq!(date(12, 11, 31).to_string(), "31.12.0012");
    }

    #[test]
    fn test_parse() {
        assert_eq!("05.01.2024".parse::<CalendarDate>(), Ok(date(2024, 0, 5)));
        assert_eq!(" 29.02.2024 ".parse::<CalendarDate>(), Ok(date(2024, 1, 29)));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            "2024-01-05".parse::<CalendarDate>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "05.01".parse::<CalendarDate>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "xx.01.2024".parse::<CalendarDate>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "29.02.2023".parse::<CalendarDate>(),
            Err(CalendarError::InvalidDate { .. })
        ));
        assert!(matches!(
            "01.00.2023".parse::<CalendarDate>(),
            Err(CalendarError::InvalidDate { month: 0, .. })
        ));
        assert!(matches!(
            "01.13.2023".parse::<CalendarDate>(),
            Err(CalendarError::InvalidDate { month: 12, .. })
        ));
    }

    #[test]
    fn test_derived_attributes() {
        let d = date(2024, 1, 29);
        assert_eq!(d.weekday(), Weekday::Thursday);
        assert_eq!(d.day_of_year(), 60);
        assert_eq!(d.week_of_month(WeekRule::default()), 5);
        assert_eq!(d.week_of_year(WeekRule::default()), 9);
        assert!(d.is_leap_year());
        assert_eq!(d.length_of_month(), 29);
        assert_eq!(d.month_name(), MonthName::February);
        assert_eq!(d.day_count(), 19_782);
    }

    #[test]
    fn test_add_days() {
        assert_eq!(date(2023, 11, 31).add_days(1), Ok(date(2024, 0, 1)));
        assert_eq!(date(2024, 2, 1).add_days(-1), Ok(date(2024, 1, 29)));
        assert_eq!(date(2024, 0, 1).add_days(366), Ok(date(2025, 0, 1)));
        assert!(date(2024, 0, 1).add_days(i64::MAX).is_err());
    }

    #[test]
    fn test_add_days_reports_target_day_count() {
        assert_eq!(
            date(2024, 0, 1).add_days(1_000_000_000_000),
            Err(CalendarError::DayCountOutOfRange(1_000_000_019_723))
        );
        assert_eq!(
            date(2024, 0, 1).add_days(i64::MAX),
            Err(CalendarError::DayCountOutOfRange(i64::MAX))
        );
        assert_eq!(
            date(1970, 0, 1).add_days(i64::MIN),
            Err(CalendarError::DayCountOutOfRange(i64::MIN))
        );
    }

    #[test]
    fn test_comparisons() {
        let earlier = date(2024, 4, 10);
        let later = date(2024, 4, 11);
        assert!(later.is_after(&earlier));
        assert!(earlier.is_before(&later));
        assert!(!earlier.is_after(&earlier));
        assert!(earlier.is_same_day(&date(2024, 4, 10)));
        assert!(date(2023, 11, 31) < date(2024, 0, 1));
    }

    #[test]
    fn test_tuple_conversions() {
        let d: CalendarDate = (2024, 1, 29).try_into().unwrap();
        assert_eq!(d, date(2024, 1, 29));
        let triple: (i32, u8, u8) = d.into();
        assert_eq!(triple, (2024, 1, 29));
        assert!(CalendarDate::try_from((2023, 1, 29)).is_err());
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(1991, 7, 15);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""15.08.1991""#);
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);

        let result: Result<CalendarDate, _> = serde_json::from_str(r#""30.02.2024""#);
        assert!(result.is_err());
    }
}
