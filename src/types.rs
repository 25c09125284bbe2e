use crate::consts::{DAYS_PER_WEEK, EPOCH_WEEKDAY, MAX_MONTH};
use crate::CalendarError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Day of the week, indexed from Monday (0) to Sunday (6).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum Weekday {
    #[display(fmt = "MONDAY")]
    Monday,
    #[display(fmt = "TUESDAY")]
    Tuesday,
    #[display(fmt = "WEDNESDAY")]
    Wednesday,
    #[display(fmt = "THURSDAY")]
    Thursday,
    #[display(fmt = "FRIDAY")]
    Friday,
    #[display(fmt = "SATURDAY")]
    Saturday,
    #[display(fmt = "SUNDAY")]
    Sunday,
}

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

impl Weekday {
    /// Returns the weekday for a zero-based index, Monday being 0
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < DAYS_PER_WEEK {
            Some(WEEKDAYS[index as usize])
        } else {
            None
        }
    }

    /// Returns the zero-based index, Monday being 0 and Sunday 6
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Upper-case English name, e.g. `"MONDAY"`
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "MONDAY",
            Self::Tuesday => "TUESDAY",
            Self::Wednesday => "WEDNESDAY",
            Self::Thursday => "THURSDAY",
            Self::Friday => "FRIDAY",
            Self::Saturday => "SATURDAY",
            Self::Sunday => "SUNDAY",
        }
    }

    /// The following day, wrapping from Sunday to Monday
    pub const fn succ(self) -> Self {
        WEEKDAYS[((self.index() + 1) % DAYS_PER_WEEK) as usize]
    }

    /// Weekday of the day `days` after 1970-01-01
    pub(crate) const fn from_day_count(days: i64) -> Self {
        let index = (days.rem_euclid(DAYS_PER_WEEK as i64) + EPOCH_WEEKDAY as i64)
            % DAYS_PER_WEEK as i64;
        WEEKDAYS[index as usize]
    }
}

/// Month of the year, indexed from January (0) to December (11).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
pub enum MonthName {
    #[display(fmt = "JANUARY")]
    January,
    #[display(fmt = "FEBRUARY")]
    February,
    #[display(fmt = "MARCH")]
    March,
    #[display(fmt = "APRIL")]
    April,
    #[display(fmt = "MAY")]
    May,
    #[display(fmt = "JUNE")]
    June,
    #[display(fmt = "JULY")]
    July,
    #[display(fmt = "AUGUST")]
    August,
    #[display(fmt = "SEPTEMBER")]
    September,
    #[display(fmt = "OCTOBER")]
    October,
    #[display(fmt = "NOVEMBER")]
    November,
    #[display(fmt = "DECEMBER")]
    December,
}

const MONTH_NAMES: [MonthName; 12] = [
    MonthName::January,
    MonthName::February,
    MonthName::March,
    MonthName::April,
    MonthName::May,
    MonthName::June,
    MonthName::July,
    MonthName::August,
    MonthName::September,
    MonthName::October,
    MonthName::November,
    MonthName::December,
];

impl MonthName {
    /// Returns the month for a zero-based index, January being 0
    pub const fn from_index(index: u8) -> Option<Self> {
        if index <= MAX_MONTH {
            Some(MONTH_NAMES[index as usize])
        } else {
            None
        }
    }

    /// Returns the zero-based index
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Upper-case English name, e.g. `"JANUARY"`
    pub const fn name(self) -> &'static str {
        match self {
            Self::January => "JANUARY",
            Self::February => "FEBRUARY",
            Self::March => "MARCH",
            Self::April => "APRIL",
            Self::May => "MAY",
            Self::June => "JUNE",
            Self::July => "JULY",
            Self::August => "AUGUST",
            Self::September => "SEPTEMBER",
            Self::October => "OCTOBER",
            Self::November => "NOVEMBER",
            Self::December => "DECEMBER",
        }
    }
}

/// Week numbering convention used for week-of-month and week-of-year.
///
/// A period (month or year) is split into weeks starting on `first_day`.
/// The leading partial week counts as week 1 when it holds at least
/// `minimal_days` days of the period, otherwise it is week 0.
///
/// The default is Monday-start with `minimal_days = 1`: the first day of the
/// period is always in week 1 and a new week begins on every Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWeekRule")]
pub struct WeekRule {
    first_day: Weekday,
    minimal_days: u8,
}

#[derive(Deserialize)]
struct RawWeekRule {
    first_day: Weekday,
    minimal_days: u8,
}

impl TryFrom<RawWeekRule> for WeekRule {
    type Error = CalendarError;

    fn try_from(raw: RawWeekRule) -> Result<Self, Self::Error> {
        Self::new(raw.first_day, raw.minimal_days)
    }
}

impl Default for WeekRule {
    fn default() -> Self {
        Self {
            first_day: Weekday::Monday,
            minimal_days: 1,
        }
    }
}

impl WeekRule {
    /// Creates a week rule.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidWeekRule` if `minimal_days` is not in `1..=7`.
    pub fn new(first_day: Weekday, minimal_days: u8) -> Result<Self, CalendarError> {
        if minimal_days == 0 || minimal_days > DAYS_PER_WEEK {
            tracing::debug!(minimal_days, "rejecting week rule");
            return Err(CalendarError::InvalidWeekRule(minimal_days));
        }
        Ok(Self {
            first_day,
            minimal_days,
        })
    }

    /// Monday-start weeks whose first week holds at least four days
    pub const fn iso() -> Self {
        Self {
            first_day: Weekday::Monday,
            minimal_days: 4,
        }
    }

    pub const fn first_day(self) -> Weekday {
        self.first_day
    }

    pub const fn minimal_days(self) -> u8 {
        self.minimal_days
    }

    /// Week number of the day at zero-based `ordinal` within a period whose
    /// first day falls on `period_start`.
    pub(crate) const fn week_number(self, period_start: Weekday, ordinal: u16) -> u8 {
        // days of the leading week that fall before the period starts
        let offset =
            (period_start.index() + DAYS_PER_WEEK - self.first_day.index()) % DAYS_PER_WEEK;
        let first_week = if DAYS_PER_WEEK - offset >= self.minimal_days {
            1
        } else {
            0
        };
        ((ordinal + offset as u16) / DAYS_PER_WEEK as u16) as u8 + first_week
    }
}
