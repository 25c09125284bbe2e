use serde::{Deserialize, Serialize};

use crate::civil::days_in_month;
use crate::consts::{DECEMBER, JANUARY, MONTHS_PER_YEAR};
use crate::prelude::*;
use crate::{CalendarDate, TimeOfDay};

/// Elapsed calendar units between two dates.
///
/// Always non-negative: the two dates are ordered before subtracting, so the
/// difference does not depend on argument order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{years}y {months}m {days}d")]
pub struct CalendarDifference {
    pub years: u32,
    /// `0..=11`
    pub months: u8,
    pub days: u8,
}

impl CalendarDifference {
    /// Years, months and days from the earlier to the later of the two dates.
    ///
    /// A negative day component borrows the length of the month preceding the
    /// later date's month, stepping back one more month if a single borrow is
    /// not enough (e.g. Jan 31 to Mar 1). Months are normalised only after the
    /// days have been borrowed, so Dec 31 to Jan 1 comes out as one day.
    ///
    /// This is not `java.time.Period` arithmetic: Jan 31 to Mar 1 2023 is
    /// 0y 0m 29d here, where `Period.between` gives one month and one day.
    ///
    /// The result is not generally convertible to a day count: one month means
    /// 28 to 31 days depending on where the borrow landed. Use
    /// [`day_difference`] for whole days.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn between(from: &CalendarDate, to: &CalendarDate) -> Self {
        let (earlier, later) = if to.day_count() >= from.day_count() {
            (from, to)
        } else {
            (to, from)
        };

        let mut years = i64::from(later.year()) - i64::from(earlier.year());
        let mut months = i64::from(later.month()) - i64::from(earlier.month());
        let mut days = i64::from(later.day()) - i64::from(earlier.day());

        let (mut borrow_year, mut borrow_month) = (later.year(), later.month());
        while days < 0 {
            (borrow_year, borrow_month) = previous_month(borrow_year, borrow_month);
            days += i64::from(days_in_month(borrow_year, borrow_month));
            months -= 1;
        }

        if months < 0 {
            months += i64::from(MONTHS_PER_YEAR);
            years -= 1;
        }

        debug_assert!(years >= 0 && (0..12).contains(&months) && days >= 0);
        Self {
            years: years as u32,
            months: months as u8,
            days: days as u8,
        }
    }

    pub const fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}

const fn previous_month(year: i32, month: u8) -> (i32, u8) {
    if month == JANUARY {
        (year - 1, DECEMBER)
    } else {
        (year, month - 1)
    }
}

/// Whole days between two dates, regardless of order. Zero only for equal dates.
pub fn day_difference(from: &CalendarDate, to: &CalendarDate) -> u64 {
    signed_day_difference(from, to).unsigned_abs()
}

/// Whole days from `from` to `to`; negative when `to` is earlier.
pub fn signed_day_difference(from: &CalendarDate, to: &CalendarDate) -> i64 {
    to.day_count() - from.day_count()
}

/// Elapsed hours, minutes and seconds between two times of day, regardless of order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{hours:02}:{minutes:02}:{seconds:02}")]
pub struct TimeDifference {
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
}

impl TimeDifference {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn between(a: &TimeOfDay, b: &TimeOfDay) -> Self {
        let (earlier, later) = if a.is_after(b) { (b, a) } else { (a, b) };

        let mut hours = i16::from(later.hour()) - i16::from(earlier.hour());
        let mut minutes = i16::from(later.minute()) - i16::from(earlier.minute());
        let mut seconds = i16::from(later.second()) - i16::from(earlier.second());

        if seconds < 0 {
            seconds += 60;
            minutes -= 1;
        }
        if minutes < 0 {
            minutes += 60;
            hours -= 1;
        }

        Self {
            hours: hours as u8,
            minutes: minutes as u8,
            seconds: seconds as u8,
        }
    }

    pub const fn total_seconds(&self) -> u32 {
        self.hours as u32 * 3600 + self.minutes as u32 * 60 + self.seconds as u32
    }
}
