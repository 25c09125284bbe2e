use std::iter::FusedIterator;

use serde::Serialize;

use crate::civil::{self, days_from_civil};
use crate::consts::MIN_DAY;
use crate::{CalendarDate, CalendarError, WeekRule, Weekday};

/// One day of an enumerated month with its derived attributes.
///
/// Only produced by [`MonthDays`]; the fields are read through accessors so
/// a record always describes a real date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MonthDayRecord {
    date: String,
    day: u8,
    day_name: &'static str,
    day_of_week: u8,
    week_of_month: u8,
    month: u8,
    year: i32,
    #[serde(skip)]
    calendar_date: CalendarDate,
    #[serde(skip)]
    weekday: Weekday,
}

impl MonthDayRecord {
    /// `dd.MM.yyyy`, independent of locale
    pub fn date(&self) -> &str {
        &self.date
    }

    /// One-based day of the month
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Upper-case English weekday name, e.g. `"MONDAY"`
    pub const fn day_name(&self) -> &'static str {
        self.day_name
    }

    /// Monday = 0 ... Sunday = 6
    pub const fn day_of_week(&self) -> u8 {
        self.day_of_week
    }

    pub const fn week_of_month(&self) -> u8 {
        self.week_of_month
    }

    /// Zero-based month
    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    pub const fn calendar_date(&self) -> CalendarDate {
        self.calendar_date
    }

    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }
}

/// Iterator over every day of one month, in ascending order.
///
/// Produced by [`enumerate_month`]; nothing is cached, each call builds a new
/// iterator and cloning one restarts from the clone's position.
#[derive(Debug, Clone)]
pub struct MonthDays {
    year: i32,
    month: u8,
    next_day: u8,
    last_day: u8,
    weekday: Weekday,
    week: u8,
    rule: WeekRule,
}

impl Iterator for MonthDays {
    type Item = MonthDayRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_day > self.last_day {
            return None;
        }

        let day = self.next_day;
        if day > MIN_DAY && self.weekday == self.rule.first_day() {
            self.week += 1;
        }

        let date = CalendarDate::from_validated(self.year, self.month, day);
        let record = MonthDayRecord {
            date: date.to_string(),
            day,
            day_name: self.weekday.name(),
            day_of_week: self.weekday.index(),
            week_of_month: self.week,
            month: self.month,
            year: self.year,
            calendar_date: date,
            weekday: self.weekday,
        };

        self.next_day += 1;
        self.weekday = self.weekday.succ();
        Some(record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from((self.last_day + 1).saturating_sub(self.next_day));
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MonthDays {}

impl FusedIterator for MonthDays {}

/// Every day of `month` in `year` with Monday-start week numbering.
///
/// Week 1 holds the first day of the month and a new week starts on every
/// Monday. This is a fixed convention, not the locale-dependent numbering
/// some platforms use; see [`enumerate_month_with`] for other rules.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if `month` is not in `0..=11`.
pub fn enumerate_month(year: i32, month: u8) -> Result<MonthDays, CalendarError> {
    enumerate_month_with(year, month, WeekRule::default())
}

/// Every day of `month` in `year`, numbering weeks with `rule`.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if `month` is not in `0..=11`.
#[tracing::instrument(level = "trace")]
pub fn enumerate_month_with(
    year: i32,
    month: u8,
    rule: WeekRule,
) -> Result<MonthDays, CalendarError> {
    let last_day = civil::length_of_month(year, month)?;
    let weekday = Weekday::from_day_count(days_from_civil(year, month, MIN_DAY));

    Ok(MonthDays {
        year,
        month,
        next_day: MIN_DAY,
        last_day,
        weekday,
        week: rule.week_number(weekday, 0),
        rule,
    })
}
