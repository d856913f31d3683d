use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::ViewMode;

use super::calendar::{add_days, add_hours, add_months, add_years, days_between, months_between, years_between};
use super::format::{column_label, is_primary_period_start, primary_label, secondary_label};

/// One visible calendar unit in the chart header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeColumn {
    /// Start instant of the unit this column covers.
    pub date: NaiveDateTime,
    /// Single-row header label.
    pub label: String,
    pub x: f32,
    pub width: f32,
    /// Top row of the two-tier header (the enclosing larger unit).
    pub primary_label: String,
    /// Bottom row of the two-tier header (this column's unit).
    pub secondary_label: String,
    /// True at boundaries of the next-larger calendar unit.
    pub is_primary_start: bool,
}

/// Number of columns spanning `[start, end]` in the given view mode.
///
/// Both endpoints are inclusive except in week view, where a partial
/// trailing week still counts as one full column. Always at least 1, so an
/// empty or inverted range degrades to a single column.
pub fn column_count(start: NaiveDateTime, end: NaiveDateTime, mode: ViewMode) -> usize {
    let count = match mode {
        ViewMode::Hour => ((end - start).num_seconds() as f64 / 3600.0).ceil() as i64 + 1,
        ViewMode::Day => days_between(start, end) + 1,
        ViewMode::Week => (days_between(start, end) as f64 / 7.0).ceil() as i64,
        ViewMode::Month => i64::from(months_between(start, end)) + 1,
        ViewMode::Year => i64::from(years_between(start, end)) + 1,
    };
    count.max(1) as usize
}

/// Start instant of column `index`, counting in view-mode units from `start`.
pub fn column_date(start: NaiveDateTime, index: usize, mode: ViewMode) -> NaiveDateTime {
    let i = index as i64;
    match mode {
        ViewMode::Hour => add_hours(start, i),
        ViewMode::Day => add_days(start, i),
        ViewMode::Week => add_days(start, i * 7),
        ViewMode::Month => add_months(start, i as i32),
        ViewMode::Year => add_years(start, i as i32),
    }
}

/// Generate the ordered sequence of time columns for one render pass.
pub fn build_columns(
    start: NaiveDateTime,
    end: NaiveDateTime,
    mode: ViewMode,
    column_width: f32,
) -> Vec<TimeColumn> {
    let count = column_count(start, end, mode);
    (0..count)
        .map(|i| {
            let date = column_date(start, i, mode);
            TimeColumn {
                date,
                label: column_label(date, mode),
                x: i as f32 * column_width,
                width: column_width,
                primary_label: primary_label(date, mode),
                secondary_label: secondary_label(date, mode),
                is_primary_start: is_primary_period_start(date, mode),
            }
        })
        .collect()
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

    #[rstest]
    #[case(dt(2024, 1, 1, 0), dt(2024, 1, 5, 0), ViewMode::Day, 5)]
    #[case(dt(2024, 1, 1, 8), dt(2024, 1, 1, 12), ViewMode::Hour, 5)]
    #[case(dt(2024, 1, 1, 0), dt(2024, 1, 21, 0), ViewMode::Week, 3)]
    #[case(dt(2024, 1, 1, 0), dt(2024, 1, 10, 0), ViewMode::Week, 2)]
    #[case(dt(2024, 1, 1, 0), dt(2024, 5, 1, 0), ViewMode::Month, 5)]
    #[case(dt(2023, 11, 1, 0), dt(2024, 2, 1, 0), ViewMode::Month, 4)]
    #[case(dt(2020, 1, 1, 0), dt(2024, 1, 1, 0), ViewMode::Year, 5)]
    fn column_counts_per_mode(
        #[case] start: NaiveDateTime,
        #[case] end: NaiveDateTime,
        #[case] mode: ViewMode,
        #[case] expected: usize,
    ) {
        assert_eq!(column_count(start, end, mode), expected);
    }

    #[rstest]
    #[case(ViewMode::Hour)]
    #[case(ViewMode::Day)]
    #[case(ViewMode::Week)]
    #[case(ViewMode::Month)]
    #[case(ViewMode::Year)]
    fn zero_length_span_still_yields_one_column(#[case] mode: ViewMode) {
        let at = dt(2024, 1, 1, 0);
        assert_eq!(column_count(at, at, mode), 1);
    }

    #[rstest]
    #[case(ViewMode::Hour)]
    #[case(ViewMode::Day)]
    #[case(ViewMode::Week)]
    #[case(ViewMode::Month)]
    #[case(ViewMode::Year)]
    fn column_zero_starts_at_chart_start(#[case] mode: ViewMode) {
        let start = dt(2024, 1, 1, 0);
        assert_eq!(column_date(start, 0, mode), start);
    }

    #[test]
    fn column_dates_advance_by_view_mode_unit() {
        let start = dt(2024, 1, 1, 8);
        assert_eq!(column_date(start, 5, ViewMode::Hour), dt(2024, 1, 1, 13));
        assert_eq!(column_date(start, 3, ViewMode::Day), dt(2024, 1, 4, 8));
        assert_eq!(column_date(start, 2, ViewMode::Week), dt(2024, 1, 15, 8));
        assert_eq!(column_date(start, 3, ViewMode::Month), dt(2024, 4, 1, 8));
        assert_eq!(column_date(start, 2, ViewMode::Year), dt(2026, 1, 1, 8));
    }

    #[test]
    fn month_columns_roll_across_year_boundaries() {
        assert_eq!(
            column_date(dt(2023, 11, 1, 0), 3, ViewMode::Month),
            dt(2024, 2, 1, 0)
        );
    }

    #[test]
    fn build_columns_spaces_by_column_width() {
        let columns = build_columns(dt(2024, 1, 1, 0), dt(2024, 1, 5, 0), ViewMode::Day, 40.0);
        assert_eq!(columns.len(), 5);
        for (i, column) in columns.iter().enumerate() {
            assert_eq!(column.x, i as f32 * 40.0);
            assert_eq!(column.width, 40.0);
        }
        assert_eq!(columns[0].label, "Jan 1");
        assert!(columns[0].is_primary_start);
        assert!(!columns[1].is_primary_start);
    }

    #[test]
    fn build_columns_two_tier_labels() {
        let columns = build_columns(dt(2024, 1, 1, 0), dt(2024, 3, 1, 0), ViewMode::Month, 40.0);
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].primary_label, "2024");
        assert_eq!(columns[0].secondary_label, "Jan");
        assert!(columns[0].is_primary_start);
        assert_eq!(columns[2].secondary_label, "Mar");
        assert!(!columns[2].is_primary_start);
    }
}
