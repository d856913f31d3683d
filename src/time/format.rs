use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::model::ViewMode;

/// ISO 8601 week number (1–53) for the given instant.
pub fn week_number(dt: NaiveDateTime) -> u32 {
    dt.iso_week().week()
}

/// Single-row header label for a column, e.g. `"14"`, `"Mar 15"`, `"W11"`.
pub fn column_label(dt: NaiveDateTime, mode: ViewMode) -> String {
    match mode {
        ViewMode::Hour => dt.format("%-H").to_string(),
        ViewMode::Day => dt.format("%b %-d").to_string(),
        ViewMode::Week => format!("W{}", week_number(dt)),
        ViewMode::Month => dt.format("%b").to_string(),
        ViewMode::Year => dt.format("%Y").to_string(),
    }
}

/// Top row of the two-tier header: the next-larger calendar unit.
///
/// Year view has no larger enclosing unit and yields an empty string.
pub fn primary_label(dt: NaiveDateTime, mode: ViewMode) -> String {
    match mode {
        ViewMode::Hour => dt.format("%b %-d").to_string(),
        ViewMode::Day => dt.format("%B %Y").to_string(),
        ViewMode::Week | ViewMode::Month => dt.format("%Y").to_string(),
        ViewMode::Year => String::new(),
    }
}

/// Bottom row of the two-tier header: the column's own unit.
pub fn secondary_label(dt: NaiveDateTime, mode: ViewMode) -> String {
    match mode {
        ViewMode::Hour => dt.format("%-H").to_string(),
        ViewMode::Day => dt.format("%-d").to_string(),
        ViewMode::Week => format!("W{}", week_number(dt)),
        ViewMode::Month => dt.format("%b").to_string(),
        ViewMode::Year => column_label(dt, mode),
    }
}

/// Whether a column date sits on a boundary of the next-larger unit:
/// midnight in hour view, the first of the month in day view, the first
/// week of January in week view, January in month view. Year view has no
/// larger unit and is never a primary start.
pub fn is_primary_period_start(dt: NaiveDateTime, mode: ViewMode) -> bool {
    match mode {
        ViewMode::Hour => dt.hour() == 0,
        ViewMode::Day => dt.day() == 1,
        ViewMode::Week => dt.month() == 1 && dt.day() <= 7,
        ViewMode::Month => dt.month() == 1,
        ViewMode::Year => false,
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::rstest;

    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .expect("valid date")
            .and_hms_opt(h, 0, 0)
            .expect("valid time")
    }

    #[test]
    fn iso_week_numbers() {
        // 2024-01-01 is a Monday and opens ISO week 1.
        assert_eq!(week_number(dt(2024, 1, 1, 0)), 1);
        assert_eq!(week_number(dt(2024, 3, 15, 0)), 11);
        // 2023-01-01 is a Sunday, still in 2022's last ISO week.
        assert_eq!(week_number(dt(2023, 1, 1, 0)), 52);
    }

    #[rstest]
    #[case(ViewMode::Hour, "14")]
    #[case(ViewMode::Day, "Mar 15")]
    #[case(ViewMode::Week, "W11")]
    #[case(ViewMode::Month, "Mar")]
    #[case(ViewMode::Year, "2024")]
    fn column_labels_per_mode(#[case] mode: ViewMode, #[case] expected: &str) {
        assert_eq!(column_label(dt(2024, 3, 15, 14), mode), expected);
    }

    #[rstest]
    #[case(ViewMode::Hour, "Mar 15", "14")]
    #[case(ViewMode::Day, "March 2024", "15")]
    #[case(ViewMode::Week, "2024", "W11")]
    #[case(ViewMode::Month, "2024", "Mar")]
    #[case(ViewMode::Year, "", "2024")]
    fn two_tier_labels_per_mode(
        #[case] mode: ViewMode,
        #[case] primary: &str,
        #[case] secondary: &str,
    ) {
        let sample = dt(2024, 3, 15, 14);
        assert_eq!(primary_label(sample, mode), primary);
        assert_eq!(secondary_label(sample, mode), secondary);
    }

    #[rstest]
    #[case(ViewMode::Hour, dt(2024, 3, 15, 0), true)]
    #[case(ViewMode::Hour, dt(2024, 3, 15, 9), false)]
    #[case(ViewMode::Day, dt(2024, 3, 1, 0), true)]
    #[case(ViewMode::Day, dt(2024, 3, 2, 0), false)]
    #[case(ViewMode::Week, dt(2024, 1, 7, 0), true)]
    #[case(ViewMode::Week, dt(2024, 1, 8, 0), false)]
    #[case(ViewMode::Week, dt(2024, 2, 5, 0), false)]
    #[case(ViewMode::Month, dt(2024, 1, 15, 0), true)]
    #[case(ViewMode::Month, dt(2024, 2, 1, 0), false)]
    #[case(ViewMode::Year, dt(2024, 1, 1, 0), false)]
    fn primary_period_boundaries(
        #[case] mode: ViewMode,
        #[case] sample: NaiveDateTime,
        #[case] expected: bool,
    ) {
        assert_eq!(is_primary_period_start(sample, mode), expected);
    }
}
