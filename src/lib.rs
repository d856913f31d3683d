//! Layout engine for Gantt charts.
//!
//! Given tasks, milestones, projects and swim lanes with calendar-anchored
//! extents, this crate computes everything a renderer needs to draw the
//! chart: time-axis columns with two-tier labels, per-entity pixel
//! positions, hierarchical grouping with expand/collapse, interval-packed
//! swim lane rows, and orthogonal dependency connector paths.
//!
//! Drawing, interaction and theming are deliberately out of scope; the
//! output of [`GanttChart::layout`] is plain data for an SVG, canvas or
//! immediate-mode frontend.
//!
//! ```
//! use gantt_layout::{GanttChart, GanttOptions, ProjectStates, Task};
//!
//! let start = "2024-03-01T00:00:00".parse().unwrap();
//! let end = "2024-03-08T00:00:00".parse().unwrap();
//! let chart = GanttChart::new(
//!     vec![Task::new("Design", start, end)],
//!     Vec::new(),
//!     Vec::new(),
//!     Vec::new(),
//!     GanttOptions::default(),
//! );
//! let layout = chart.layout(&ProjectStates::new());
//! assert_eq!(layout.columns.len(), 8);
//! assert_eq!(layout.tasks[0].x, 0.0);
//! ```

pub mod layout;
pub mod model;
pub mod time;

pub use layout::{
    bars_overlap, pack_into_rows, rectangular_path, to_svg_path, ChartLayout, GanttChart,
    PackedBar, PathSegment, ProjectSummary, RenderedMilestone, RenderedProject, RenderedSwimlane,
    RenderedTask, DEFAULT_CONNECTOR_OFFSET,
};
pub use model::{
    GanttOptions, Milestone, ParseViewModeError, Project, ProjectStates, Swimlane, Task, ViewMode,
};
pub use time::TimeColumn;
