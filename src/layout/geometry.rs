use chrono::NaiveDateTime;

use crate::model::ViewMode;
use crate::time::calendar::{days_between, hours_between, months_between, years_between};

/// Offset from the chart start in view-mode units, fractional in week view.
fn unit_offset(chart_start: NaiveDateTime, date: NaiveDateTime, mode: ViewMode) -> f32 {
    match mode {
        ViewMode::Hour => hours_between(chart_start, date) as f32,
        ViewMode::Day => days_between(chart_start, date) as f32,
        ViewMode::Week => days_between(chart_start, date) as f32 / 7.0,
        ViewMode::Month => months_between(chart_start, date) as f32,
        ViewMode::Year => years_between(chart_start, date) as f32,
    }
}

/// Horizontal position and width for a task's date range, in pixels.
///
/// `x` is clamped to the chart (never negative) and `width` to half a
/// column, so a zero- or negative-duration task still renders a visible bar.
pub fn bar_span(
    chart_start: NaiveDateTime,
    mode: ViewMode,
    column_width: f32,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> (f32, f32) {
    let x = unit_offset(chart_start, start, mode) * column_width;
    let width = unit_offset(start, end, mode) * column_width;
    (x.max(0.0), width.max(column_width / 2.0))
}

/// Horizontal position for a point entity such as a milestone.
pub fn point_x(
    chart_start: NaiveDateTime,
    mode: ViewMode,
    column_width: f32,
    date: NaiveDateTime,
) -> f32 {
    (unit_offset(chart_start, date, mode) * column_width).max(0.0)
}
