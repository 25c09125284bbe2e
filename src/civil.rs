//! Pure proleptic Gregorian calendar functions.
//!
//! Months are zero-based (January = 0), days are one-based. Linear day counts
//! are days since 1970-01-01, which is day 0. All arithmetic runs in `i64`,
//! so every `i32` year maps to a day count without overflow.

use crate::consts::{
    CENTURY_CYCLE, DAYS_BEFORE_MONTH, DAYS_IN_MONTH, DAYS_PER_ERA, EPOCH_SHIFT, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY,
};
use crate::{CalendarDate, CalendarError, WeekRule, Weekday};

pub const fn is_leap_year(year: i32) -> bool {
    year % LEAP_YEAR_CYCLE == 0 && (year % CENTURY_CYCLE != 0 || year % GREGORIAN_CYCLE == 0)
}

/// Month length without range checking; `month` must already be valid.
pub(crate) const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Number of days in `month` of `year` (28, 29, 30 or 31).
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if `month` is not in `0..=11`. The
/// reported day is always 1.
pub fn length_of_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if month > MAX_MONTH {
        tracing::debug!(year, month, "rejecting month outside 0..=11");
        return Err(CalendarError::InvalidDate {
            year,
            month,
            day: MIN_DAY,
        });
    }
    Ok(days_in_month(year, month))
}

/// Checks that `(year, month, day)` names a real date.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if `month` is not in `0..=11` or
/// `day` is not in `1..=length_of_month(year, month)`.
pub fn validate(year: i32, month: u8, day: u8) -> Result<(), CalendarError> {
    if month > MAX_MONTH || day < MIN_DAY || day > days_in_month(year, month) {
        tracing::debug!(year, month, day, "rejecting invalid date");
        return Err(CalendarError::InvalidDate { year, month, day });
    }
    Ok(())
}

/// Civil-to-days transform for an already validated date.
pub(crate) const fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let month = month as i64 + 1;
    // Shift the year to start in March so the leap day is the last day of it
    let year = year as i64 - if month <= 2 { 1 } else { 0 };
    let era = year.div_euclid(GREGORIAN_CYCLE as i64);
    let year_of_era = year.rem_euclid(GREGORIAN_CYCLE as i64);
    let shifted_month = (month + 9) % 12;
    let day_of_shifted_year = (153 * shifted_month + 2) / 5 + day as i64 - 1;
    let day_of_era =
        year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_shifted_year;
    era * DAYS_PER_ERA + day_of_era - EPOCH_SHIFT
}

/// Days since 1970-01-01 (negative before it).
///
/// # Errors
/// Returns `CalendarError::InvalidDate` for an invalid triple.
pub fn to_linear_day_count(year: i32, month: u8, day: u8) -> Result<i64, CalendarError> {
    validate(year, month, day)?;
    Ok(days_from_civil(year, month, day))
}

/// Inverse of [`to_linear_day_count`].
///
/// # Errors
/// Returns `CalendarError::DayCountOutOfRange` if the resulting year does not
/// fit in an `i32`.
pub fn from_linear_day_count(days: i64) -> Result<CalendarDate, CalendarError> {
    let shifted = days
        .checked_add(EPOCH_SHIFT)
        .ok_or(CalendarError::DayCountOutOfRange(days))?;
    let era = shifted.div_euclid(DAYS_PER_ERA);
    let day_of_era = shifted.rem_euclid(DAYS_PER_ERA);
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_shifted_year =
        day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_shifted_year + 2) / 153;
    let day = day_of_shifted_year - (153 * shifted_month + 2) / 5 + 1;
    // shifted_month 0 is March; January and February belong to the next year
    let month = if shifted_month < 10 {
        shifted_month + 2
    } else {
        shifted_month - 10
    };
    let year = era * i64::from(GREGORIAN_CYCLE) + year_of_era + i64::from(month <= 1);
    let year = i32::try_from(year).map_err(|_| CalendarError::DayCountOutOfRange(days))?;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let date = CalendarDate::from_validated(year, month as u8, day as u8);
    Ok(date)
}

/// Weekday of the given date, 1970-01-01 being a Thursday.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` for an invalid triple.
pub fn day_of_week(year: i32, month: u8, day: u8) -> Result<Weekday, CalendarError> {
    Ok(Weekday::from_day_count(to_linear_day_count(year, month, day)?))
}

/// One-based day of the year, `1..=366`.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` for an invalid triple.
pub fn day_of_year(year: i32, month: u8, day: u8) -> Result<u16, CalendarError> {
    validate(year, month, day)?;
    Ok(ordinal(year, month, day))
}

pub(crate) const fn ordinal(year: i32, month: u8, day: u8) -> u16 {
    let leap_day = if month > FEBRUARY && is_leap_year(year) {
        1
    } else {
        0
    };
    DAYS_BEFORE_MONTH[month as usize] + leap_day + day as u16
}

/// Week of the month under `rule`.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` for an invalid triple.
pub fn week_of_month(
    year: i32,
    month: u8,
    day: u8,
    rule: WeekRule,
) -> Result<u8, CalendarError> {
    validate(year, month, day)?;
    let first = Weekday::from_day_count(days_from_civil(year, month, MIN_DAY));
    Ok(rule.week_number(first, u16::from(day - MIN_DAY)))
}

/// Week of the year under `rule`. Late December days never roll over into
/// week 1 of the following year.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` for an invalid triple.
pub fn week_of_year(year: i32, month: u8, day: u8, rule: WeekRule) -> Result<u8, CalendarError> {
    let day_of_year = day_of_year(year, month, day)?;
    let first = Weekday::from_day_count(days_from_civil(year, JANUARY, MIN_DAY));
    Ok(rule.week_number(first, day_of_year - 1))
}
