use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::model::ViewMode;

/// Truncate an instant to the start of the enclosing view-mode unit.
pub fn start_of(mode: ViewMode, dt: NaiveDateTime) -> NaiveDateTime {
    match mode {
        ViewMode::Hour => start_of_hour(dt),
        ViewMode::Day => start_of_day(dt),
        ViewMode::Week => start_of_week(dt),
        ViewMode::Month => start_of_month(dt),
        ViewMode::Year => start_of_year(dt),
    }
}

/// Start of the hour containing `dt`.
pub fn start_of_hour(dt: NaiveDateTime) -> NaiveDateTime {
    let hour = NaiveTime::from_hms_opt(dt.hour(), 0, 0).unwrap_or(NaiveTime::MIN);
    dt.date().and_time(hour)
}

/// Midnight of the day containing `dt`.
pub fn start_of_day(dt: NaiveDateTime) -> NaiveDateTime {
    dt.date().and_time(NaiveTime::MIN)
}

/// Midnight of the Monday starting the ISO week containing `dt`.
pub fn start_of_week(dt: NaiveDateTime) -> NaiveDateTime {
    let back = dt.date().weekday().num_days_from_monday();
    (dt.date() - Duration::days(i64::from(back))).and_time(NaiveTime::MIN)
}

/// Midnight of the first day of the month containing `dt`.
pub fn start_of_month(dt: NaiveDateTime) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(dt.year(), dt.month(), 1)
        .unwrap_or(dt.date())
        .and_time(NaiveTime::MIN)
}

/// Midnight of January 1st of the year containing `dt`.
pub fn start_of_year(dt: NaiveDateTime) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(dt.year(), 1, 1)
        .unwrap_or(dt.date())
        .and_time(NaiveTime::MIN)
}

/// Whole calendar days between the midnights of `start` and `end`.
///
/// Time-of-day is ignored on both ends, so 23:59 to 00:01 the next day is
/// one day, mirroring how people read calendars rather than durations.
pub fn days_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end.date() - start.date()).num_days()
}

/// Hours between two instants, rounded to the nearest whole hour.
pub fn hours_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    ((end - start).num_minutes() as f64 / 60.0).round() as i64
}

/// Calendar months between two instants, ignoring day-of-month.
pub fn months_between(start: NaiveDateTime, end: NaiveDateTime) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

/// Calendar years between two instants, ignoring month and day.
pub fn years_between(start: NaiveDateTime, end: NaiveDateTime) -> i32 {
    end.year() - start.year()
}

/// Add whole hours to an instant.
pub fn add_hours(dt: NaiveDateTime, hours: i64) -> NaiveDateTime {
    dt + Duration::hours(hours)
}

/// Add whole days to an instant.
pub fn add_days(dt: NaiveDateTime, days: i64) -> NaiveDateTime {
    dt + Duration::days(days)
}

/// Add whole months, rolling the year at boundaries and clamping the
/// day-of-month where the target month is shorter.
pub fn add_months(dt: NaiveDateTime, months: i32) -> NaiveDateTime {
    if months >= 0 {
        dt.checked_add_months(Months::new(months as u32)).unwrap_or(dt)
    } else {
        dt.checked_sub_months(Months::new(months.unsigned_abs())).unwrap_or(dt)
    }
}

/// Add whole years to an instant.
pub fn add_years(dt: NaiveDateTime, years: i32) -> NaiveDateTime {
    add_months(dt, years.saturating_mul(12))
}

/// Whether two instants fall on the same calendar day.
pub fn is_same_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}
