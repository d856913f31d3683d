pub mod calendar;
pub mod columns;
pub mod format;

pub use calendar::{
    add_days, add_hours, add_months, add_years, days_between, hours_between, is_same_day,
    months_between, start_of, years_between,
};
pub use columns::{build_columns, column_count, column_date, TimeColumn};
pub use format::{column_label, is_primary_period_start, primary_label, secondary_label, week_number};
