use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Controls what calendar unit one column of the timeline spans.
///
/// The view mode drives both the axis granularity and the date arithmetic
/// used for every horizontal position in the chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Hour,
    #[default]
    Day,
    Week,
    Month,
    Year,
}

impl ViewMode {
    /// The lowercase name used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Hour => "hour",
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
            ViewMode::Year => "year",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a view mode string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized view mode `{0}`, expected hour, day, week, month or year")]
pub struct ParseViewModeError(String);

impl FromStr for ViewMode {
    type Err = ParseViewModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hour" => Ok(ViewMode::Hour),
            "day" => Ok(ViewMode::Day),
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            "year" => Ok(ViewMode::Year),
            other => Err(ParseViewModeError(other.to_string())),
        }
    }
}

/// Chart configuration, merged with defaults by the caller via struct update.
///
/// Only the sizing and grouping fields feed the layout math; the display
/// toggles are carried through for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GanttOptions {
    pub view_mode: ViewMode,
    /// Height of task bars in pixels.
    pub bar_height: f32,
    /// Width of one time column in pixels.
    pub column_width: f32,
    /// Vertical padding between task bars in pixels.
    pub bar_padding: f32,
    pub show_grid: bool,
    pub show_today: bool,
    pub show_dependencies: bool,
    pub grid_color: String,
    pub today_color: String,
    pub enable_project_grouping: bool,
    /// Height of project header rows in pixels.
    pub project_header_height: f32,
    /// Size of milestone diamonds in pixels.
    pub milestone_size: f32,
    pub show_milestone_labels: bool,
    /// Whether the rendering layer may resize task bars.
    pub edit_duration: bool,
    /// Whether the rendering layer may move task bars.
    pub edit_position: bool,
    /// Hide dependency arrows whose source or target is collapsed away.
    pub hide_orphan_dependencies: bool,
    pub enable_swimlanes: bool,
    /// Draw a summary bar spanning each project's tasks in its header.
    pub show_project_summary: bool,
    pub show_task_progress: bool,
    pub show_task_name_in_bar: bool,
    pub sidebar_title: String,
    pub show_tooltips: bool,
}

impl Default for GanttOptions {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::Day,
            bar_height: 30.0,
            column_width: 40.0,
            bar_padding: 4.0,
            show_grid: true,
            show_today: true,
            show_dependencies: true,
            grid_color: "#e5e7eb".to_string(),
            today_color: "#ef4444".to_string(),
            enable_project_grouping: false,
            project_header_height: 35.0,
            milestone_size: 16.0,
            show_milestone_labels: true,
            edit_duration: true,
            edit_position: true,
            hide_orphan_dependencies: true,
            enable_swimlanes: false,
            show_project_summary: false,
            show_task_progress: false,
            show_task_name_in_bar: true,
            sidebar_title: "Tasks".to_string(),
            show_tooltips: true,
        }
    }
}

impl GanttOptions {
    /// Vertical distance from one task row to the next.
    pub fn row_step(&self) -> f32 {
        self.bar_height + self.bar_padding
    }
}
