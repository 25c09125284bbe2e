/// Number of months in a year
pub const MONTHS_PER_YEAR: u8 = 12;

/// Highest valid zero-based month index (December)
pub const MAX_MONTH: u8 = 11;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Zero-based index of January
pub const JANUARY: u8 = 0;
/// Zero-based index of February
pub const FEBRUARY: u8 = 1;
/// Zero-based index of December
pub const DECEMBER: u8 = 11;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month, indexed by zero-based month.
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 12] = [
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days preceding the first of each month in a non-leap year
pub(crate) const DAYS_BEFORE_MONTH: [u16; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Days in a week
pub const DAYS_PER_WEEK: u8 = 7;

/// Weekday index of 1970-01-01 (a Thursday, Monday = 0)
pub const EPOCH_WEEKDAY: u8 = 3;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in one 400-year Gregorian cycle
pub(crate) const DAYS_PER_ERA: i64 = 146_097;
/// Days from 0000-03-01 (start of the shifted era) to 1970-01-01
pub(crate) const EPOCH_SHIFT: i64 = 719_468;

/// Seconds in a day, used to split clock readings
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;

/// Separator between the fields of a `dd.MM.yyyy` date
pub const DATE_SEPARATOR: char = '.';
/// Separator between the fields of a `HH:mm:ss` time
pub const TIME_SEPARATOR: char = ':';
