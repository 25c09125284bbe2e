use civil_calendar::civil::{
    day_of_week, from_linear_day_count, is_leap_year, length_of_month, to_linear_day_count,
};
use civil_calendar::{
    CalendarDate, CalendarDifference, CalendarError, DateTime, FixedClock, MonthDays, SystemClock,
    TimeOfDay, WeekRule, Weekday, day_difference, enumerate_month,
};

fn date(year: i32, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

#[test]
fn day_count_roundtrip_every_day_1600_to_2400() {
    let start = to_linear_day_count(1600, 0, 1).unwrap();
    let end = to_linear_day_count(2400, 11, 31).unwrap();
    let mut expected_weekday = day_of_week(1600, 0, 1).unwrap();

    for days in start..=end {
        let d = from_linear_day_count(days).unwrap();
        assert_eq!(
            to_linear_day_count(d.year(), d.month(), d.day()),
            Ok(days),
            "roundtrip failed for day count {days} ({d})"
        );
        assert_eq!(d.weekday(), expected_weekday, "weekday drift at {d}");
        assert_eq!(
            d.weekday().index(),
            u8::try_from((days + 3).rem_euclid(7)).unwrap()
        );
        expected_weekday = expected_weekday.succ();
    }
}

#[test]
fn consecutive_days_follow_month_lengths() {
    let mut current = date(1999, 0, 1);
    for _ in 0..(366 * 6) {
        let next = current.add_days(1).unwrap();
        if current.day() == current.length_of_month() {
            assert_eq!(next.day(), 1, "no rollover after {current}");
        } else {
            assert_eq!(next.day(), current.day() + 1);
            assert_eq!(next.month(), current.month());
        }
        current = next;
    }
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(2023));
}

#[test]
fn month_lengths() {
    assert_eq!(length_of_month(2024, 1), Ok(29));
    assert_eq!(length_of_month(2023, 1), Ok(28));
    assert_eq!(length_of_month(2024, 0), Ok(31));

    for year in [1900, 2000, 2023, 2024] {
        let total: u32 = (0..12)
            .map(|m| u32::from(length_of_month(year, m).unwrap()))
            .sum();
        let expected = if is_leap_year(year) { 366 } else { 365 };
        assert_eq!(total, expected, "year {year}");
    }
}

#[test]
fn weekday_fixed_points() {
    assert_eq!(day_of_week(1970, 0, 1).map(Weekday::index), Ok(3));
    assert_eq!(day_of_week(2024, 0, 1).map(Weekday::index), Ok(0));
}

#[test]
fn calendar_difference_borrows() {
    assert_eq!(
        CalendarDifference::between(&date(2023, 11, 31), &date(2024, 0, 1)),
        CalendarDifference {
            years: 0,
            months: 0,
            days: 1
        }
    );
    assert_eq!(
        CalendarDifference::between(&date(2020, 1, 28), &date(2020, 2, 1)),
        CalendarDifference {
            years: 0,
            months: 0,
            days: 2
        }
    );
    assert!(CalendarDifference::between(&date(2024, 6, 4), &date(2024, 6, 4)).is_zero());
}

#[test]
fn calendar_difference_fields_stay_in_range() {
    let anchors = [date(2019, 0, 31), date(2020, 1, 29), date(2021, 11, 31)];
    for anchor in anchors {
        let mut other = date(2018, 0, 1);
        while other.year() < 2023 {
            let diff = CalendarDifference::between(&anchor, &other);
            assert!(diff.months < 12, "{anchor} vs {other}: {diff}");
            assert!(diff.days < 31, "{anchor} vs {other}: {diff}");
            assert_eq!(diff, CalendarDifference::between(&other, &anchor));
            assert_eq!(diff.is_zero(), anchor == other);
            other = other.add_days(1).unwrap();
        }
    }
}

#[test]
fn day_difference_symmetry() {
    let dates = [
        date(1969, 11, 31),
        date(1970, 0, 1),
        date(2000, 1, 29),
        date(2024, 11, 31),
    ];
    for a in &dates {
        for b in &dates {
            assert_eq!(day_difference(a, b), day_difference(b, a));
            assert_eq!(day_difference(a, b) == 0, a == b);
        }
    }
}

#[test]
fn enumerate_leap_february() {
    let days: Vec<_> = enumerate_month(2024, 1).unwrap().collect();
    assert_eq!(days.len(), 29);
    assert_eq!(days[0].day(), 1);
    assert_eq!(days[0].day_of_week(), day_of_week(2024, 1, 1).unwrap().index());
    assert_eq!(days[28].day(), 29);

    for pair in days.windows(2) {
        assert!(pair[0].week_of_month() <= pair[1].week_of_month());
        assert_eq!(pair[0].day() + 1, pair[1].day());
    }
}

#[test]
fn every_month_of_a_year_enumerates_in_full() {
    for month in 0..12 {
        let records: Vec<_> = enumerate_month(2023, month).unwrap().collect();
        assert_eq!(
            records.len(),
            usize::from(length_of_month(2023, month).unwrap())
        );
        assert!(records.iter().all(|r| r.month() == month && r.year() == 2023));
        for record in &records {
            let d = record.calendar_date();
            assert_eq!(CalendarDate::new(2023, month, record.day()), Ok(d));
            assert_eq!(record.weekday(), d.weekday());
        }
        assert_eq!(records[0].week_of_month(), 1);
    }
}

#[test]
fn invalid_input() {
    assert!(matches!(
        length_of_month(2023, 12),
        Err(CalendarError::InvalidDate { .. })
    ));
    assert!(matches!(
        to_linear_day_count(2023, 0, 32),
        Err(CalendarError::InvalidDate { .. })
    ));
    assert!(matches!(
        enumerate_month(2023, 12),
        Err(CalendarError::InvalidDate { .. })
    ));
}

#[test]
fn clock_feeds_calendar() {
    let clock = FixedClock(DateTime::new(
        date(2024, 1, 29),
        TimeOfDay::new(9, 15, 0).unwrap(),
    ));
    assert_eq!(date(2024, 1, 29).is_today(&clock), Ok(true));
    assert_eq!(date(2024, 1, 28).is_before_today(&clock), Ok(true));
    assert_eq!(date(2024, 2, 1).is_after_today(&clock), Ok(true));
}

#[test]
fn public_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CalendarDate>();
    assert_send_sync::<CalendarDifference>();
    assert_send_sync::<MonthDays>();
    assert_send_sync::<WeekRule>();
    assert_send_sync::<SystemClock>();
    assert_send_sync::<FixedClock>();
    assert_send_sync::<CalendarError>();
}
