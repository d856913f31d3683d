use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Milestone, Project, Swimlane, Task};

/// A task with its computed chart geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedTask {
    pub task: Task,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    /// False when the task is hidden inside a collapsed project. Hidden
    /// tasks keep their identity so dependency arrows can still resolve them.
    pub is_visible: bool,
    /// Lane-relative packing row, when swim lanes are active.
    pub row: Option<usize>,
}

/// A milestone with its computed chart position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedMilestone {
    pub milestone: Milestone,
    pub x: f32,
    pub y: f32,
    pub is_visible: bool,
}

/// Horizontal extent of a project's member tasks, for header summary bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub x: f32,
    pub width: f32,
}

/// A project header row with its vertical extent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedProject {
    pub project: Project,
    pub is_expanded: bool,
    /// Number of member tasks, shown in the header even when collapsed.
    pub task_count: usize,
    pub y: f32,
    /// Header plus member rows when expanded; header alone when collapsed.
    pub height: f32,
    /// Span of member tasks, present when summary bars are enabled.
    pub summary: Option<ProjectSummary>,
}

/// A swim lane with its vertical extent and packed row count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedSwimlane {
    pub swimlane: Swimlane,
    /// Owning project when lanes are nested inside project groups; the
    /// `(project_id, swimlane.id)` pair is the lane's identity there.
    pub project_id: Option<Uuid>,
    pub y: f32,
    pub height: f32,
    pub row_count: usize,
}
